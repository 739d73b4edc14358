use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Declared gender of the deceased. Selects the gender suffix of the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Inbound body of a generation request. Field names follow the
/// browser front-end (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRequest {
    pub first_name: String,
    pub gender: Gender,
    pub has_ingo: bool,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub personality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_character: Option<String>,
}

impl NameRequest {
    /// The custom character when exactly one glyph was supplied.
    /// An empty string counts as absent.
    pub fn custom_char(&self) -> Option<char> {
        let raw = self.custom_character.as_deref()?;
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// A single candidate hōmyō as returned to the caller.
///
/// Only `name` and `reading` are ever rewritten by this service. Any fields
/// the collaborator added beyond the five known ones are kept in `extra`
/// and echoed back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSuggestion {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub reading: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub buddhist_context: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const KNOWN_FIELDS: [&str; 5] = ["name", "reading", "meaning", "reasoning", "buddhistContext"];

impl NameSuggestion {
    /// Lenient decode of one element of the collaborator's `suggestions` array.
    ///
    /// Returns `None` for non-objects. Known fields that are missing or not
    /// strings decode as empty strings; unknown fields land in `extra`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let text = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let extra = object
            .iter()
            .filter(|(key, _)| !KNOWN_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Some(Self {
            name: text("name"),
            reading: text("reading"),
            meaning: text("meaning"),
            reasoning: text("reasoning"),
            buddhist_context: text("buddhistContext"),
            extra,
        })
    }
}

/// The response body: repaired suggestions in collaborator order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub suggestions: Vec<NameSuggestion>,
}
