/// The system prompt that steers the model into emitting a single analysis
/// JSON object, in the requested summary language.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnalysisTemplate {
  Thai,
  English,
  Auto,
}

const SYSTEM_THAI: &str = "คุณคือระบบวิเคราะห์ข้อความลูกค้า ตอบกลับเป็น JSON เดียวเท่านั้น \
รูปแบบ: {\"summary\":\"...\",\"category\":\"general|complaint|request|other\",\
\"urgency\":\"low|medium|high\",\"language\":\"th|en\"} \
กติกา: ให้เขียน summary เป็น 'ภาษาไทย' และกำหนด language เป็น 'th' เท่านั้น \
ห้ามใส่ข้อความอื่นนอกเหนือจาก JSON เดียว";

const SYSTEM_EN: &str = "You are a text analysis system. Reply with ONE JSON object only: \
{\"summary\":\"...\",\"category\":\"general|complaint|request|other\",\
\"urgency\":\"low|medium|high\",\"language\":\"th|en\"} \
Rules: write the summary in 'English' and set language to 'en' only. \
No extra text outside the single JSON.";

const SYSTEM_AUTO: &str = "You are a multilingual text analysis system. Detect the language automatically. \
Reply with ONE JSON object only: \
{\"summary\":\"...\",\"category\":\"general|complaint|request|other\",\
\"urgency\":\"low|medium|high\",\"language\":\"xx\"} \
Rules: (1) Set language as ISO 639-1 code (e.g. th, en, ja, zh, fr, de, es); \
(2) Write the summary in the same language as the input; \
(3) Output only the single JSON, no extra text.";

impl AnalysisTemplate {
  /// Total over any input: only "th" and "en" pin a single language,
  /// everything else gets auto-detection.
  pub fn for_language(language: &str) -> Self {
    match language {
      "th" => AnalysisTemplate::Thai,
      "en" => AnalysisTemplate::English,
      _ => AnalysisTemplate::Auto,
    }
  }

  pub fn system_prompt(&self) -> &'static str {
    match self {
      AnalysisTemplate::Thai => SYSTEM_THAI,
      AnalysisTemplate::English => SYSTEM_EN,
      AnalysisTemplate::Auto => SYSTEM_AUTO,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn th_and_en_pick_single_language_templates() {
    assert_eq!(AnalysisTemplate::for_language("th"), AnalysisTemplate::Thai);
    assert_eq!(AnalysisTemplate::for_language("en"), AnalysisTemplate::English);
  }

  #[test]
  fn everything_else_falls_back_to_auto() {
    for lang in ["auto", "multi", "", "ja", "TH", "garbage"] {
      assert_eq!(AnalysisTemplate::for_language(lang), AnalysisTemplate::Auto);
    }
  }

  #[test]
  fn prompts_all_demand_a_single_json_object() {
    for template in [
      AnalysisTemplate::Thai,
      AnalysisTemplate::English,
      AnalysisTemplate::Auto,
    ] {
      assert!(template.system_prompt().contains("JSON"));
      assert!(template.system_prompt().contains("\"category\""));
    }
  }
}
