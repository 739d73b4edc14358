//! Response Extractor — pulls the first well-formed JSON object out of the
//! collaborator's free-form reply.
//!
//! The reply may wrap the object in prose or markdown fences. Candidate spans
//! are found by brace matching that ignores braces inside JSON strings, so a
//! `}` inside a `meaning` text never closes the object early.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON object found in collaborator reply")]
    NoJsonObject,

    #[error("invalid JSON in collaborator reply: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Extracts the first brace-delimited span that parses as a JSON object.
///
/// Falls back to parsing the whole trimmed text when no balanced span
/// exists. Fails when neither yields an object.
pub fn extract_json_object(raw: &str) -> Result<Map<String, Value>, ParseError> {
    let text = raw.trim();
    let mut last_error: Option<serde_json::Error> = None;

    for (start, _) in text.match_indices('{') {
        let Some(end) = matching_brace(text, start) else {
            continue;
        };
        match serde_json::from_str::<Value>(&text[start..=end]) {
            Ok(Value::Object(object)) => return Ok(object),
            Ok(_) => {}
            Err(e) => last_error = Some(e),
        }
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(ParseError::NoJsonObject),
        Err(e) => Err(match last_error {
            Some(span_error) => ParseError::InvalidJson(span_error),
            None if text.contains('{') => ParseError::InvalidJson(e),
            None => ParseError::NoJsonObject,
        }),
    }
}

/// Byte index of the `}` closing the `{` at `start`, or `None` if unbalanced.
fn matching_brace(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_bare_object() {
        let object = extract_json_object(r#"{"suggestions": []}"#).unwrap();
        assert!(object.contains_key("suggestions"));
    }

    #[test]
    fn test_extracts_object_surrounded_by_prose_and_fences() {
        let raw = "以下が提案です。\n```json\n{\"suggestions\": [{\"name\": \"釋光徳\"}]}\n```\nご確認ください。";
        let object = extract_json_object(raw).unwrap();
        assert_eq!(object["suggestions"][0]["name"], "釋光徳");
    }

    #[test]
    fn test_braces_inside_strings_do_not_close_object() {
        let raw = r#"{"suggestions": [{"name": "釋光徳", "meaning": "閉じ括弧 } を含む"}]} 追記 {"#;
        let object = extract_json_object(raw).unwrap();
        assert_eq!(object["suggestions"][0]["meaning"], "閉じ括弧 } を含む");
    }

    #[test]
    fn test_skips_non_json_brace_span_in_prose() {
        let raw = r#"Note {this is not json} then {"suggestions": []}"#;
        let object = extract_json_object(raw).unwrap();
        assert!(object.contains_key("suggestions"));
    }

    #[test]
    fn test_plain_refusal_is_no_json_object() {
        let err = extract_json_object("Sorry, I cannot comply.").unwrap_err();
        assert!(matches!(err, ParseError::NoJsonObject));
    }

    #[test]
    fn test_invalid_span_is_invalid_json() {
        let err = extract_json_object(r#"{"suggestions": [,]}"#).unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson(_)));
    }

    #[test]
    fn test_unbalanced_prefix_does_not_hide_later_object() {
        let raw = r#"{ 途中で切れた文 {"suggestions": []}"#;
        let object = extract_json_object(raw).unwrap();
        assert!(object.contains_key("suggestions"));
    }

    #[test]
    fn test_top_level_array_is_not_an_object() {
        let err = extract_json_object(r#"[1, 2, 3]"#).unwrap_err();
        assert!(matches!(err, ParseError::NoJsonObject));
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let raw = r#"{"suggestions": [{"reasoning": "\"慈\" を選んだ {理由}"}]}"#;
        let object = extract_json_object(raw).unwrap();
        assert_eq!(object["suggestions"][0]["reasoning"], "\"慈\" を選んだ {理由}");
    }
}
