//! Structural Repairer — guarantees the ingō invariant on collaborator output.
//!
//! The collaborator is asked for `<stem>院<suffix><given>` names but may not
//! comply. When an ingō was requested and a suggestion lacks the marker, the
//! name is rebuilt from a template stem and its reading prefix rewritten.
//! Everything other than `name`/`reading` passes through untouched.
//!
//! Placement of a requested custom character, by its relative position in
//! the given part:
//! - front third: moved into the stem (`<char><template tail>`)
//! - back third: left in the given part, plain template stem
//! - middle third: even index as back; odd index folds it into the stem
//!   (`<template head><char>`) and fills the gap with a fallback glyph
//!
//! Stem templates that would duplicate or drop the custom character are
//! skipped in favour of the next one in the cycle.

use tracing::warn;

use crate::models::homyo::{Gender, NameRequest, NameSuggestion};
use crate::naming::grammar::{
    gender_suffix, gender_suffix_reading, strip_gender_suffix, to_reading_prefix, BACK_THRESHOLD,
    FALLBACK_GLYPH, FRONT_THRESHOLD, INGO_MARKER, INGO_MARKER_READING, INGO_STEMS,
    SECONDARY_FALLBACK_GLYPH,
};

/// Stem and given part of a rebuilt name.
#[derive(Debug, Clone, PartialEq)]
struct Placement {
    stem: String,
    given: String,
}

/// Repairs every suggestion independently. Never fails; returns a new list.
pub fn repair(suggestions: &[NameSuggestion], request: &NameRequest) -> Vec<NameSuggestion> {
    suggestions
        .iter()
        .enumerate()
        .map(|(index, suggestion)| repair_suggestion(index, suggestion, request))
        .collect()
}

/// Repairs the suggestion at ordinal `index`.
pub fn repair_suggestion(
    index: usize,
    suggestion: &NameSuggestion,
    request: &NameRequest,
) -> NameSuggestion {
    if !request.has_ingo || suggestion.name.contains(INGO_MARKER) {
        return suggestion.clone();
    }

    let custom = request.custom_char();
    let (stripped, given) = strip_gender_suffix(&suggestion.name, request.gender, custom);

    let placement = match custom {
        Some(c) if given.contains(c) => place_custom_character(index, given, c),
        _ => Placement {
            stem: INGO_STEMS[index % INGO_STEMS.len()].to_string(),
            given: given.to_string(),
        },
    };

    let name = format!(
        "{}{}{}{}",
        placement.stem,
        INGO_MARKER,
        gender_suffix(request.gender),
        placement.given
    );
    let prefix = format!(
        "{}{}{}",
        to_reading_prefix(&placement.stem),
        INGO_MARKER_READING,
        gender_suffix_reading(request.gender)
    );
    let reading = replace_reading_prefix(&suggestion.reading, stripped, &prefix);

    warn!(
        "Suggestion {index} lacked a required ingō, repaired: {} -> {}",
        suggestion.name, name
    );

    NameSuggestion {
        name,
        reading,
        ..suggestion.clone()
    }
}

fn place_custom_character(index: usize, given: &str, c: char) -> Placement {
    let glyphs: Vec<char> = given.chars().collect();
    let position = glyphs.iter().position(|&g| g == c).unwrap_or_default();
    let relative = position as f64 / glyphs.len() as f64;
    let occurrences = count(given, c);

    let keep_in_given = || Placement {
        stem: pick_stem(index, given, occurrences, c, |template| template.to_string()),
        given: given.to_string(),
    };

    if relative < FRONT_THRESHOLD {
        let remaining = given.replacen(c, "", 1);
        // A one-glyph given part stays put rather than leaving it empty.
        if remaining.is_empty() {
            return keep_in_given();
        }
        Placement {
            stem: pick_stem(index, &remaining, occurrences, c, |template| {
                format!("{c}{}", template.chars().skip(1).collect::<String>())
            }),
            given: remaining,
        }
    } else if relative > BACK_THRESHOLD || index % 2 == 0 {
        keep_in_given()
    } else {
        let fallback = if c == FALLBACK_GLYPH {
            SECONDARY_FALLBACK_GLYPH
        } else {
            FALLBACK_GLYPH
        };
        let remaining = given.replacen(c, &fallback.to_string(), 1);
        Placement {
            stem: pick_stem(index, &remaining, occurrences, c, |template| {
                let head_len = template.chars().count().saturating_sub(1);
                format!("{}{c}", template.chars().take(head_len).collect::<String>())
            }),
            given: remaining,
        }
    }
}

/// Builds a stem from the template at `index`, moving on through the cycle
/// while the result would change how often `c` appears in the full name.
fn pick_stem(
    index: usize,
    given: &str,
    occurrences: usize,
    c: char,
    build: impl Fn(&str) -> String,
) -> String {
    (0..INGO_STEMS.len())
        .map(|offset| build(INGO_STEMS[(index + offset) % INGO_STEMS.len()]))
        .find(|stem| count(stem, c) + count(given, c) == occurrences)
        .unwrap_or_else(|| build(INGO_STEMS[index % INGO_STEMS.len()]))
}

fn count(text: &str, c: char) -> usize {
    text.chars().filter(|&g| g == c).count()
}

/// Swaps the leading gender-suffix reading for `prefix`.
///
/// The token stripped is the one matching the suffix found in the name;
/// when the name carried none, either reading token is accepted. A reading
/// with no such token gets the prefix prepended.
fn replace_reading_prefix(reading: &str, stripped: Option<Gender>, prefix: &str) -> String {
    let candidates: &[Gender] = match stripped {
        Some(Gender::Female) => &[Gender::Female],
        Some(Gender::Male) => &[Gender::Male],
        None => &[Gender::Female, Gender::Male],
    };

    let rest = candidates
        .iter()
        .find_map(|&gender| reading.strip_prefix(gender_suffix_reading(gender)))
        .unwrap_or(reading);

    format!("{prefix}{rest}")
}
