//! Naming grammar — the fixed data every hōmyō is built from.
//!
//! Shape with an ingō: `<stem>院<suffix><given part>` (e.g. 慈光院釋光徳).
//! Shape without:      `<suffix><given part>`        (e.g. 釋光徳).

use crate::models::homyo::Gender;

/// Marker glyph that closes the ingō segment.
pub const INGO_MARKER: char = '院';
pub const INGO_MARKER_READING: &str = "いん";

/// Ingō stems used when an ingō has to be supplied. The i-th repaired
/// suggestion takes `INGO_STEMS[i % INGO_STEMS.len()]`.
pub const INGO_STEMS: [&str; 6] = ["慈光", "智慧", "福徳", "真如", "法性", "妙法"];

/// Relative position of the custom character inside the given part below
/// which it is moved into the ingō stem.
pub const FRONT_THRESHOLD: f64 = 0.33;
/// Relative position above which the given part is kept as is.
pub const BACK_THRESHOLD: f64 = 0.66;

/// Glyph substituted for a custom character moved out of the given part.
pub const FALLBACK_GLYPH: char = '慧';
/// Used instead of `FALLBACK_GLYPH` when the custom character is itself 慧.
pub const SECONDARY_FALLBACK_GLYPH: char = '恵';

const MALE_SUFFIX: &str = "釋";
const FEMALE_SUFFIX: &str = "釋尼";
/// Glyph that turns the male suffix into the female one.
const FEMALE_MARKER_GLYPH: char = '尼';
const MALE_SUFFIX_READING: &str = "しゃく";
const FEMALE_SUFFIX_READING: &str = "しゃくに";

/// Readings of the template stems, taken whole.
const STEM_READINGS: &[(&str, &str)] = &[
    ("慈光", "じこう"),
    ("智慧", "ちえ"),
    ("福徳", "ふくとく"),
    ("真如", "しんにょ"),
    ("法性", "ほっしょう"),
    ("妙法", "みょうほう"),
];

/// Go-on readings for glyphs common in hōmyō. Used for stems that were
/// rebuilt around a custom character.
const GLYPH_READINGS: &[(char, &str)] = &[
    ('慈', "じ"),
    ('光', "こう"),
    ('智', "ち"),
    ('慧', "え"),
    ('恵', "え"),
    ('福', "ふく"),
    ('徳', "とく"),
    ('真', "しん"),
    ('如', "にょ"),
    ('法', "ほう"),
    ('性', "しょう"),
    ('妙', "みょう"),
    ('心', "しん"),
    ('恩', "おん"),
    ('信', "しん"),
    ('願', "がん"),
    ('蓮', "れん"),
    ('浄', "じょう"),
    ('照', "しょう"),
    ('明', "みょう"),
    ('覚', "かく"),
    ('悟', "ご"),
    ('善', "ぜん"),
    ('和', "わ"),
    ('雲', "うん"),
    ('華', "け"),
    ('香', "こう"),
    ('月', "がつ"),
    ('空', "くう"),
    ('道', "どう"),
    ('仁', "にん"),
    ('義', "ぎ"),
    ('誠', "じょう"),
    ('楽', "らく"),
    ('寿', "じゅ"),
    ('清', "しょう"),
    ('順', "じゅん"),
    ('春', "しゅん"),
    ('秋', "しゅう"),
    ('静', "じょう"),
    ('釋', "しゃく"),
    ('尼', "に"),
];

/// The fixed token placed before the given part, chosen by gender.
pub fn gender_suffix(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => MALE_SUFFIX,
        Gender::Female => FEMALE_SUFFIX,
    }
}

pub fn gender_suffix_reading(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => MALE_SUFFIX_READING,
        Gender::Female => FEMALE_SUFFIX_READING,
    }
}

/// Splits a leading gender suffix off a name written for `gender`.
///
/// Returns the gender whose suffix was found (if any) and the remainder.
/// `釋尼` is tried before `釋` so a female suffix is never half-stripped,
/// except on a male name whose custom character is `尼`: there `釋尼` is
/// read as `釋` followed by the custom character.
pub fn strip_gender_suffix(
    name: &str,
    gender: Gender,
    custom: Option<char>,
) -> (Option<Gender>, &str) {
    let female_is_ambiguous = gender == Gender::Male && custom == Some(FEMALE_MARKER_GLYPH);

    if !female_is_ambiguous {
        if let Some(rest) = name.strip_prefix(FEMALE_SUFFIX) {
            return (Some(Gender::Female), rest);
        }
    }
    match name.strip_prefix(MALE_SUFFIX) {
        Some(rest) => (Some(Gender::Male), rest),
        None => (None, name),
    }
}

/// Reading of an ingō stem (without the marker).
///
/// Known template stems use their fixed reading. Anything else is read
/// glyph by glyph; glyphs with no known reading are kept verbatim.
pub fn to_reading_prefix(stem: &str) -> String {
    if let Some((_, reading)) = STEM_READINGS.iter().find(|(s, _)| *s == stem) {
        return (*reading).to_string();
    }

    stem.chars()
        .map(|glyph| match glyph_reading(glyph) {
            Some(reading) => reading.to_string(),
            None => glyph.to_string(),
        })
        .collect()
}

fn glyph_reading(glyph: char) -> Option<&'static str> {
    GLYPH_READINGS
        .iter()
        .find(|(g, _)| *g == glyph)
        .map(|(_, reading)| *reading)
}
