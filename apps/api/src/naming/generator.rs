//! Hōmyō generation — the request/response engine.
//!
//! Flow: build_prompt → collaborator → extract_json_object → decode
//! suggestions → repair → GenerationResult.
//!
//! Single attempt: a collaborator failure ends the request. Nothing here
//! touches persistence.

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::homyo::{GenerationResult, NameRequest, NameSuggestion};
use crate::naming::extractor::extract_json_object;
use crate::naming::prompt_builder::build_prompt;
use crate::naming::repair::repair;

/// Suggestion counts the prompt asks for. Outside this range is logged only.
const EXPECTED_SUGGESTIONS: std::ops::RangeInclusive<usize> = 3..=5;

/// Runs one generation for an already validated request.
pub async fn generate_names(
    generator: &dyn TextGenerator,
    request: &NameRequest,
) -> Result<GenerationResult, AppError> {
    let prompt = build_prompt(request);
    info!(
        "Requesting suggestions: prompt_chars={}, has_ingo={}, custom_character={}",
        prompt.chars().count(),
        request.has_ingo,
        request.custom_char().is_some()
    );

    let raw = generator.generate(&prompt).await?;
    debug!("Collaborator reply: {raw}");

    let object = extract_json_object(&raw).map_err(|e| AppError::UpstreamMalformed {
        reason: e.to_string(),
        raw: raw.clone(),
    })?;

    let suggestions = decode_suggestions(&object).ok_or_else(|| AppError::UpstreamMalformed {
        reason: "reply has no suggestions array".to_string(),
        raw: raw.clone(),
    })?;

    if !EXPECTED_SUGGESTIONS.contains(&suggestions.len()) {
        warn!(
            "Collaborator returned {} suggestions (expected 3-5)",
            suggestions.len()
        );
    }

    Ok(GenerationResult {
        suggestions: repair(&suggestions, request),
    })
}

/// Reads `suggestions` leniently. `None` when the array itself is missing.
fn decode_suggestions(object: &Map<String, Value>) -> Option<Vec<NameSuggestion>> {
    let items = object.get("suggestions")?.as_array()?;

    let suggestions = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let decoded = NameSuggestion::from_value(item);
            if decoded.is_none() {
                warn!("Dropping suggestion {index}: not a JSON object");
            }
            decoded
        })
        .collect();

    Some(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::models::homyo::Gender;
    use crate::naming::grammar::INGO_MARKER;
    use crate::test_support::{FailingGenerator, MockGenerator};

    fn request(has_ingo: bool, custom: Option<&str>) -> NameRequest {
        NameRequest {
            first_name: "太郎".to_string(),
            gender: Gender::Male,
            has_ingo,
            hobbies: vec!["囲碁".to_string()],
            skills: vec!["書道".to_string()],
            personality: "穏やか".to_string(),
            custom_character: custom.map(str::to_string),
        }
    }

    const BARE_REPLY: &str = r#"承知しました。
```json
{
  "suggestions": [
    {"name": "釋慈徳", "reading": "しゃくじとく", "meaning": "慈しみの徳", "reasoning": "人柄", "buddhistContext": "慈悲"},
    {"name": "釋光明", "reading": "しゃくこうみょう", "meaning": "光", "reasoning": "明るさ", "buddhistContext": "光明"},
    {"name": "釋真心", "reading": "しゃくしんしん", "meaning": "真心", "reasoning": "誠実", "buddhistContext": "徳目"}
  ]
}
```"#;

    #[tokio::test]
    async fn test_prompt_reaches_collaborator() {
        let generator = MockGenerator::new(BARE_REPLY);
        let req = request(true, None);
        generate_names(&generator, &req).await.unwrap();
        assert_eq!(generator.prompts(), vec![build_prompt(&req)]);
    }

    #[tokio::test]
    async fn test_missing_ingo_is_repaired_in_result() {
        let generator = MockGenerator::new(BARE_REPLY);
        let result = generate_names(&generator, &request(true, Some("慈")))
            .await
            .unwrap();

        assert_eq!(result.suggestions.len(), 3);
        for s in &result.suggestions {
            assert_eq!(s.name.chars().filter(|&c| c == INGO_MARKER).count(), 1);
        }
        assert_eq!(result.suggestions[0].name, "慈光院釋徳");
        assert_eq!(result.suggestions[0].meaning, "慈しみの徳");
    }

    #[tokio::test]
    async fn test_unrequested_ingo_is_kept() {
        let reply = r#"{"suggestions": [{"name": "慈光院釋光徳", "reading": "じこういんしゃくこうとく"}]}"#;
        let generator = MockGenerator::new(reply);
        let result = generate_names(&generator, &request(false, None)).await.unwrap();
        assert_eq!(result.suggestions[0].name, "慈光院釋光徳");
    }

    #[tokio::test]
    async fn test_refusal_is_upstream_malformed_with_raw_text() {
        let generator = MockGenerator::new("Sorry, I cannot comply.");
        let err = generate_names(&generator, &request(true, None))
            .await
            .unwrap_err();
        match err {
            AppError::UpstreamMalformed { raw, .. } => assert_eq!(raw, "Sorry, I cannot comply."),
            other => panic!("expected UpstreamMalformed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_object_without_suggestions_is_malformed() {
        let generator = MockGenerator::new(r#"{"names": ["釋光徳"]}"#);
        let err = generate_names(&generator, &request(false, None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UpstreamMalformed { .. }));
    }

    #[tokio::test]
    async fn test_non_object_entries_are_dropped() {
        let reply = r#"{"suggestions": ["釋光徳", {"name": "釋真心", "reading": "しゃくしんしん"}]}"#;
        let generator = MockGenerator::new(reply);
        let result = generate_names(&generator, &request(false, None)).await.unwrap();
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].name, "釋真心");
    }

    #[tokio::test]
    async fn test_collaborator_failure_is_upstream_error() {
        let generator = FailingGenerator(|| LlmError::Api {
            status: 503,
            body: "overloaded".to_string(),
        });
        let err = generate_names(&generator, &request(false, None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upstream { status: Some(503), .. }));
    }

    #[tokio::test]
    async fn test_missing_credential_is_configuration_error() {
        let generator = FailingGenerator(|| LlmError::MissingApiKey);
        let err = generate_names(&generator, &request(false, None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
