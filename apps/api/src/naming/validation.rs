//! Request shape validation, run before any prompt is built.

use crate::errors::AppError;
use crate::models::homyo::NameRequest;

pub const FIRST_NAME_MAX_CHARS: usize = 20;
pub const PERSONALITY_MAX_CHARS: usize = 1000;

/// Rejects requests the engine cannot act on.
///
/// Lengths are counted in characters, never bytes.
pub fn validate_request(request: &NameRequest) -> Result<(), AppError> {
    let first_name = request.first_name.trim();
    if first_name.is_empty() {
        return Err(AppError::BadRequest("firstName is required".to_string()));
    }
    if first_name.chars().count() > FIRST_NAME_MAX_CHARS {
        return Err(AppError::BadRequest(format!(
            "firstName must be at most {FIRST_NAME_MAX_CHARS} characters"
        )));
    }

    if request.personality.chars().count() > PERSONALITY_MAX_CHARS {
        return Err(AppError::BadRequest(format!(
            "personality must be at most {PERSONALITY_MAX_CHARS} characters"
        )));
    }

    if let Some(custom) = request.custom_character.as_deref() {
        let mut chars = custom.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {}
            (Some(c), None) if is_japanese_glyph(c) => {}
            (Some(_), None) => {
                return Err(AppError::BadRequest(
                    "customCharacter must be a kanji, hiragana or katakana character".to_string(),
                ))
            }
            (Some(_), Some(_)) => {
                return Err(AppError::BadRequest(
                    "customCharacter must be a single character".to_string(),
                ))
            }
        }
    }

    Ok(())
}

/// CJK unified ideographs, hiragana and katakana (incl. the long-vowel mark).
fn is_japanese_glyph(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FAF}' | '\u{3040}'..='\u{3096}' | '\u{30A0}'..='\u{30FC}')
}
