// Prompt fragments for hōmyō generation.
// Placeholders are filled by `prompt_builder`; every fragment is plain text
// and joined with blank lines in a fixed order.

/// Role framing. Always first.
pub const PREAMBLE: &str = "あなたは浄土真宗の法名を生成するAIアシスタントです。\
故人の情報に基づいて、浄土真宗の教義に沿った法名を3〜5案提案してください。\
各法名について、読み方（呉音）、意味、選定理由、使用漢字の仏教的背景を詳細に説明してください。";

pub const PROFILE_HEADER: &str = "故人の情報：";
pub const LABEL_FIRST_NAME: &str = "俗名";
pub const LABEL_GENDER: &str = "性別";
pub const LABEL_HAS_INGO: &str = "院号の有無";
pub const LABEL_HOBBIES: &str = "趣味";
pub const LABEL_SKILLS: &str = "特技";
pub const LABEL_PERSONALITY: &str = "人柄や人生";
pub const LABEL_CUSTOM_CHARACTER: &str = "俗名から含めたい漢字";

/// General placement advice for a requested character. Replace `{char}`.
pub const CUSTOM_CHARACTER_GUIDANCE: &str = r#"**【指定漢字の配置について】**
- 指定漢字『{char}』は法名の前半後半で様々なパターンで配置してください
- 各案で異なる位置（院号部分・法名前半・法名後半）に配置し、バリエーションを作ってください
- 読み方の自然さと漢字の組み合わせの意味を最優先に配置を決定してください
- 心地よく読めることと、仏教的な意味の深さを判断軸としてください"#;

/// Mandatory ingō shape. Replace `{suffix}`.
pub const INGO_RULE: &str = r#"**【重要】院号ありが指定されています。以下の規則を絶対に守ってください:**
1. 法名は必ず「院号部分 + 院 + {suffix} + 法名部分」の構造にする
2. 例：「慈光院{suffix}光徳」「智慧院{suffix}真心」
3. 「釋○○」のような院号なしの形式は絶対に使用禁止
4. 全ての法名案に例外なく院号を含める
5. 院号部分は故人の特徴から選ぶ（例：慈光、智慧、福徳、真如、法性など）"#;

/// Candidate positions for the custom character when an ingō is present.
/// Replace `{char}` and `{suffix}`.
pub const INGO_PLACEMENT: &str = r#"**【院号での指定漢字配置パターン】**
指定漢字『{char}』を以下のパターンで配置し、各案で異なる位置に使用:
- 案1: 院号部分に配置（例：『{char}光院{suffix}○○』）
- 案2: 法名前半に配置（例：『○○院{suffix}{char}○』）
- 案3: 法名後半に配置（例：『○○院{suffix}○{char}』）
- 案4: 院号と法名両方に使用も可（例：『{char}○院{suffix}{char}○』）
- 案5: 他の漢字との組み合わせで新たな意味を生成
※必ず読み方の美しさと意味の深さを重視して最適な位置を選んでください"#;

/// Mandatory bare shape. Replace `{suffix}`.
pub const BARE_RULE: &str = "**院号なしが指定されています。法名は「{suffix}○○」の形式で提案してください。**";

/// Candidate positions for the custom character without an ingō.
/// Replace `{char}` and `{suffix}`.
pub const BARE_PLACEMENT: &str = r#"**【法名での指定漢字配置パターン】**
指定漢字『{char}』を以下のパターンで配置し、各案で異なる位置に使用:
- 案1: 法名前半に配置（例：『{suffix}{char}○』）
- 案2: 法名後半に配置（例：『{suffix}○{char}』）
- 案3: 他の漢字と組み合わせて新たな熟語を形成
※『{suffix}』の直後に同じ漢字ばかり配置せず、バリエーションを作ってください
※読み方の自然さと仏教的意味を最重視してください"#;

/// JSON answer format with an ingō. Replace `{suffix}` and `{suffix_reading}`.
pub const INGO_SCHEMA: &str = r#"**【最重要】以下のJSON形式で回答してください。name欄は必ず「○○院{suffix}○○」形式にしてください:**

{
  "suggestions": [
    {
      "name": "慈光院{suffix}光徳",
      "reading": "じこういん{suffix_reading}こうとく",
      "meaning": "光の徳を持つ者という意味",
      "reasoning": "故人の優しい人柄から光の文字を選択",
      "buddhistContext": "光は仏の慈悲を表す重要な概念"
    },
    {
      "name": "智慧院{suffix}真心",
      "reading": "ちえいん{suffix_reading}しんしん",
      "meaning": "真心をもって仏道を歩む者",
      "reasoning": "故人の誠実な生き方を表現",
      "buddhistContext": "真心は仏教における重要な徳目"
    },
    {
      "name": "福徳院{suffix}慈恩",
      "reading": "ふくとくいん{suffix_reading}じおん",
      "meaning": "慈悲と恩恵を表す",
      "reasoning": "家族を大切にした人柄を表現",
      "buddhistContext": "慈は仏教の根本概念の一つ"
    }
  ]
}

**絶対に「釋○○」だけの形式は使わないでください。必ず「○○院{suffix}○○」の形式で3つ以上提案してください。**"#;

/// JSON answer format without an ingō. Replace `{suffix}` and `{suffix_reading}`.
pub const BARE_SCHEMA: &str = r#"**重要**: 必ず以下のJSON形式でのみ回答してください。

{
  "suggestions": [
    {
      "name": "{suffix}光徳",
      "reading": "{suffix_reading}こうとく",
      "meaning": "光の徳を持つ者という意味",
      "reasoning": "故人の優しい人柄から光の文字を選択",
      "buddhistContext": "光は仏の慈悲を表す重要な概念"
    },
    {
      "name": "{suffix}慈恩",
      "reading": "{suffix_reading}じおん",
      "meaning": "慈悲と恩恵を表す",
      "reasoning": "家族を大切にした人柄を表現",
      "buddhistContext": "慈は仏教の根本概念の一つ"
    },
    {
      "name": "{suffix}真心",
      "reading": "{suffix_reading}しんしん",
      "meaning": "真心をもって仏道を歩む者",
      "reasoning": "故人の誠実な生き方を表現",
      "buddhistContext": "真心は仏教における重要な徳目"
    }
  ]
}

**上記の形式で必ず3つ以上の法名を提案してください。**"#;
