//! Prompt Builder — turns a validated `NameRequest` into the instruction text
//! sent to the text-generation collaborator.
//!
//! The prompt is a fixed sequence of typed fragments. `PromptBuilder::for_request`
//! decides which fragments apply; `render` fills their placeholders. No
//! randomness: the same request always yields the same string.

use crate::models::homyo::{Gender, NameRequest};
use crate::naming::grammar::{gender_suffix, gender_suffix_reading};
use crate::naming::prompts::{
    BARE_PLACEMENT, BARE_RULE, BARE_SCHEMA, CUSTOM_CHARACTER_GUIDANCE, INGO_PLACEMENT, INGO_RULE,
    INGO_SCHEMA, LABEL_CUSTOM_CHARACTER, LABEL_FIRST_NAME, LABEL_GENDER, LABEL_HAS_INGO,
    LABEL_HOBBIES, LABEL_PERSONALITY, LABEL_SKILLS, PREAMBLE, PROFILE_HEADER,
};

const FRAGMENT_SEPARATOR: &str = "\n\n";
const LIST_SEPARATOR: &str = "、";

/// One block of the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptFragment<'a> {
    Preamble,
    Profile(&'a NameRequest),
    CustomCharacterGuidance(char),
    IngoRule(Gender),
    IngoPlacement(Gender, char),
    BareRule(Gender),
    BarePlacement(Gender, char),
    IngoSchema(Gender),
    BareSchema(Gender),
}

impl PromptFragment<'_> {
    pub fn render(&self) -> String {
        match self {
            PromptFragment::Preamble => PREAMBLE.to_string(),
            PromptFragment::Profile(request) => render_profile(request),
            PromptFragment::CustomCharacterGuidance(c) => {
                CUSTOM_CHARACTER_GUIDANCE.replace("{char}", &c.to_string())
            }
            PromptFragment::IngoRule(gender) => fill_suffix(INGO_RULE, *gender),
            PromptFragment::IngoPlacement(gender, c) => {
                fill_suffix(INGO_PLACEMENT, *gender).replace("{char}", &c.to_string())
            }
            PromptFragment::BareRule(gender) => fill_suffix(BARE_RULE, *gender),
            PromptFragment::BarePlacement(gender, c) => {
                fill_suffix(BARE_PLACEMENT, *gender).replace("{char}", &c.to_string())
            }
            PromptFragment::IngoSchema(gender) => fill_suffix(INGO_SCHEMA, *gender),
            PromptFragment::BareSchema(gender) => fill_suffix(BARE_SCHEMA, *gender),
        }
    }
}

/// Ordered fragment list for one request.
#[derive(Debug, Clone)]
pub struct PromptBuilder<'a> {
    fragments: Vec<PromptFragment<'a>>,
}

impl<'a> PromptBuilder<'a> {
    pub fn for_request(request: &'a NameRequest) -> Self {
        let gender = request.gender;
        let custom = request.custom_char();

        let mut fragments = vec![PromptFragment::Preamble, PromptFragment::Profile(request)];

        if let Some(c) = custom {
            fragments.push(PromptFragment::CustomCharacterGuidance(c));
        }

        if request.has_ingo {
            fragments.push(PromptFragment::IngoRule(gender));
            if let Some(c) = custom {
                fragments.push(PromptFragment::IngoPlacement(gender, c));
            }
            fragments.push(PromptFragment::IngoSchema(gender));
        } else {
            fragments.push(PromptFragment::BareRule(gender));
            if let Some(c) = custom {
                fragments.push(PromptFragment::BarePlacement(gender, c));
            }
            fragments.push(PromptFragment::BareSchema(gender));
        }

        Self { fragments }
    }

    pub fn fragments(&self) -> &[PromptFragment<'a>] {
        &self.fragments
    }

    pub fn build(&self) -> String {
        self.fragments
            .iter()
            .map(PromptFragment::render)
            .collect::<Vec<_>>()
            .join(FRAGMENT_SEPARATOR)
    }
}

/// Builds the full prompt for a request.
pub fn build_prompt(request: &NameRequest) -> String {
    PromptBuilder::for_request(request).build()
}

fn fill_suffix(template: &str, gender: Gender) -> String {
    template
        .replace("{suffix_reading}", gender_suffix_reading(gender))
        .replace("{suffix}", gender_suffix(gender))
}

fn render_profile(request: &NameRequest) -> String {
    let gender = match request.gender {
        Gender::Male => "男性",
        Gender::Female => "女性",
    };
    let has_ingo = if request.has_ingo { "あり" } else { "なし" };

    let mut lines = vec![
        PROFILE_HEADER.to_string(),
        format!("- {LABEL_FIRST_NAME}: {}", request.first_name.trim()),
        format!("- {LABEL_GENDER}: {gender}"),
        format!("- {LABEL_HAS_INGO}: {has_ingo}"),
    ];

    let hobbies = join_non_empty(&request.hobbies);
    if !hobbies.is_empty() {
        lines.push(format!("- {LABEL_HOBBIES}: {hobbies}"));
    }
    let skills = join_non_empty(&request.skills);
    if !skills.is_empty() {
        lines.push(format!("- {LABEL_SKILLS}: {skills}"));
    }
    let personality = request.personality.trim();
    if !personality.is_empty() {
        lines.push(format!("- {LABEL_PERSONALITY}: {personality}"));
    }
    if let Some(c) = request.custom_char() {
        lines.push(format!("- {LABEL_CUSTOM_CHARACTER}: {c}"));
    }

    lines.join("\n")
}

fn join_non_empty(items: &[String]) -> String {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(gender: Gender, has_ingo: bool, custom: Option<&str>) -> NameRequest {
        NameRequest {
            first_name: "太郎".to_string(),
            gender,
            has_ingo,
            hobbies: vec!["囲碁".to_string(), " ".to_string(), "釣り".to_string()],
            skills: vec![],
            personality: "穏やかで家族思い".to_string(),
            custom_character: custom.map(str::to_string),
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let req = request(Gender::Male, true, Some("慈"));
        assert_eq!(build_prompt(&req), build_prompt(&req));
    }

    #[test]
    fn test_profile_includes_labels_and_skips_empty_fields() {
        let prompt = build_prompt(&request(Gender::Male, false, None));
        assert!(prompt.starts_with(PREAMBLE));
        assert!(prompt.contains("- 俗名: 太郎"));
        assert!(prompt.contains("- 性別: 男性"));
        assert!(prompt.contains("- 院号の有無: なし"));
        assert!(prompt.contains("- 趣味: 囲碁、釣り"));
        assert!(prompt.contains("- 人柄や人生: 穏やかで家族思い"));
        assert!(!prompt.contains("- 特技:"));
        assert!(prompt.contains("3〜5案"));
    }

    #[test]
    fn test_first_name_is_trimmed_in_profile() {
        let mut req = request(Gender::Male, false, None);
        req.first_name = "  太郎 \n".to_string();
        let prompt = build_prompt(&req);
        assert!(prompt.contains("- 俗名: 太郎\n"));
        assert!(!prompt.contains("  太郎"));
    }

    #[test]
    fn test_ingo_prompt_uses_gender_suffix_in_rule_and_schema() {
        let prompt = build_prompt(&request(Gender::Female, true, None));
        assert!(prompt.contains("院号部分 + 院 + 釋尼 + 法名部分"));
        assert!(prompt.contains("慈光院釋尼光徳"));
        assert!(prompt.contains("智慧院釋尼真心"));
        assert!(prompt.contains("じこういんしゃくにこうとく"));
        assert!(!prompt.contains("院号なしが指定されています"));
    }

    #[test]
    fn test_bare_prompt_has_bare_rule_and_schema() {
        let prompt = build_prompt(&request(Gender::Male, false, None));
        assert!(prompt.contains("法名は「釋○○」の形式"));
        assert!(prompt.contains("\"name\": \"釋光徳\""));
        assert!(!prompt.contains("院号ありが指定されています"));
    }

    #[test]
    fn test_custom_character_adds_guidance_and_placements() {
        let req = request(Gender::Male, true, Some("慈"));
        let builder = PromptBuilder::for_request(&req);
        assert_eq!(
            builder.fragments(),
            &[
                PromptFragment::Preamble,
                PromptFragment::Profile(&req),
                PromptFragment::CustomCharacterGuidance('慈'),
                PromptFragment::IngoRule(Gender::Male),
                PromptFragment::IngoPlacement(Gender::Male, '慈'),
                PromptFragment::IngoSchema(Gender::Male),
            ]
        );

        let prompt = builder.build();
        assert!(prompt.contains("- 俗名から含めたい漢字: 慈"));
        assert!(prompt.contains("『慈光院釋○○』"));
        assert!(prompt.contains("『○○院釋○慈』"));
    }

    #[test]
    fn test_bare_placement_for_custom_character() {
        let prompt = build_prompt(&request(Gender::Female, false, Some("蓮")));
        assert!(prompt.contains("『釋尼蓮○』"));
        assert!(prompt.contains("『釋尼○蓮』"));
        assert!(!prompt.contains("院号での指定漢字配置パターン"));
    }
}
