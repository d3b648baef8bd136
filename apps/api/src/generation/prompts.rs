// All prompt constants for the Generation module. The template embeds the
// output schema literally; generation code only substitutes the résumé text.

/// Interview-question prompt template. Replace `{resume_text}` before sending.
///
/// The schema block must stay in sync with `questions.rs` — field names and
/// enum labels are matched verbatim on the way back in.
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"You are an expert technical interviewer. Given the resume below, generate a personalized set of interview questions.

STRICT OUTPUT REQUIREMENT: Return ONLY valid JSON. No markdown, no code fences, no explanatory text. Just raw JSON.

JSON SCHEMA:
{
  "meta": {
    "role_guess": string,
    "seniority_guess": "Intern" | "Junior" | "Mid" | "Senior" | "Staff" | "Unknown",
    "focus_areas": string[]
  },
  "questions": [
    {
      "id": string,
      "category": "Skills" | "Projects" | "Experience" | "Behavioral" | "Leadership" | "System Design" | "Problem Solving" | "Career Motivation" | "Culture Fit" | "Other",
      "label": string,
      "question": string,
      "why_this_question": string,
      "resume_anchor": string,
      "difficulty": "Easy" | "Medium" | "Hard"
    }
  ]
}

REQUIREMENTS:
1. Generate 12-18 questions total
2. Include at least 2 questions from each of these categories: Skills, Projects, Experience, Behavioral
3. Add System Design questions ONLY if the resume shows relevant experience (senior+ roles, architecture, scalability work)
4. Every question MUST be grounded in specific resume details
5. The "resume_anchor" field should contain a SHORT direct quote or paraphrase from the resume (10-20 words max)
6. Avoid generic questions - each must be tailored to THIS specific resume
7. Do NOT invent information not present in the resume
8. Vary difficulty levels appropriately based on seniority

RESUME:
{resume_text}

Remember: Output ONLY the JSON object. Start with { and end with }. No other text."#;

/// Builds the complete generation prompt for a résumé.
/// Pure: no side effects, no I/O, always succeeds for any input string.
pub fn build_interview_prompt(resume_text: &str) -> String {
    INTERVIEW_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_resume_text_verbatim() {
        let resume = "Built a distributed cache in Rust serving 40k rps.";
        let prompt = build_interview_prompt(resume);
        assert!(prompt.contains(resume));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let resume = "Ten years of backend work.";
        assert_eq!(build_interview_prompt(resume), build_interview_prompt(resume));
    }

    #[test]
    fn test_prompt_carries_schema_field_names() {
        let prompt = build_interview_prompt("resume");
        for field in [
            "role_guess",
            "seniority_guess",
            "focus_areas",
            "why_this_question",
            "resume_anchor",
            "difficulty",
        ] {
            assert!(prompt.contains(field), "missing schema field {field}");
        }
    }

    #[test]
    fn test_prompt_carries_generation_requirements() {
        let prompt = build_interview_prompt("resume");
        assert!(prompt.contains("12-18 questions"));
        assert!(prompt.contains("10-20 words max"));
        assert!(prompt.contains("Skills, Projects, Experience, Behavioral"));
    }

    #[test]
    fn test_prompt_ends_with_raw_json_instruction() {
        let prompt = build_interview_prompt("resume");
        assert!(prompt.ends_with("No other text."));
    }
}
