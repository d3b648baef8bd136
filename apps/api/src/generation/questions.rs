//! Typed model of the generation output.
//!
//! Deliberately lenient: every field is defaulted and every categorical enum
//! carries a fallback variant, because the upstream completion cannot be
//! trusted to respect the schema. The render layer turns the defaults into
//! "Unknown"/"N/A" at display time. A result is either fully present or
//! absent — callers never hold a partially merged one.

use serde::{Deserialize, Serialize};

/// Question category. Ten fixed labels; anything else collapses to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    Skills,
    Projects,
    Experience,
    Behavioral,
    Leadership,
    #[serde(rename = "System Design")]
    SystemDesign,
    #[serde(rename = "Problem Solving")]
    ProblemSolving,
    #[serde(rename = "Career Motivation")]
    CareerMotivation,
    #[serde(rename = "Culture Fit")]
    CultureFit,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    /// Display label — also the lexical sort key for the grouped view.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Skills => "Skills",
            Category::Projects => "Projects",
            Category::Experience => "Experience",
            Category::Behavioral => "Behavioral",
            Category::Leadership => "Leadership",
            Category::SystemDesign => "System Design",
            Category::ProblemSolving => "Problem Solving",
            Category::CareerMotivation => "Career Motivation",
            Category::CultureFit => "Culture Fit",
            Category::Other => "Other",
        }
    }
}

/// Seniority guessed from the résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Seniority {
    Intern,
    Junior,
    Mid,
    Senior,
    Staff,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Seniority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Intern => "Intern",
            Seniority::Junior => "Junior",
            Seniority::Mid => "Mid",
            Seniority::Senior => "Senior",
            Seniority::Staff => "Staff",
            Seniority::Unknown => "Unknown",
        }
    }
}

/// Question difficulty. The schema promises Easy/Medium/Hard; anything else
/// is rendered literally as Unknown rather than guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
        }
    }
}

/// Profile summary guessed from the résumé.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileMeta {
    pub role_guess: String,
    pub seniority_guess: Seniority,
    pub focus_areas: Vec<String>,
}

/// A single generated interview question, anchored in the résumé.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    pub id: String,
    pub category: Category,
    pub label: String,
    pub question: String,
    pub why_this_question: String,
    /// Short quote or paraphrase from the résumé justifying the question.
    pub resume_anchor: String,
    pub difficulty: Difficulty,
}

/// The full output of one generation call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationResult {
    pub meta: ProfileMeta,
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_deserializes_spaced_labels() {
        let category: Category = serde_json::from_str(r#""System Design""#).unwrap();
        assert_eq!(category, Category::SystemDesign);
        let category: Category = serde_json::from_str(r#""Culture Fit""#).unwrap();
        assert_eq!(category, Category::CultureFit);
    }

    #[test]
    fn test_unknown_category_falls_back_to_other() {
        let category: Category = serde_json::from_str(r#""Quantum Vibes""#).unwrap();
        assert_eq!(category, Category::Other);
    }

    #[test]
    fn test_category_serializes_back_to_spaced_label() {
        let json = serde_json::to_string(&Category::ProblemSolving).unwrap();
        assert_eq!(json, r#""Problem Solving""#);
    }

    #[test]
    fn test_unknown_seniority_falls_back_to_unknown() {
        let seniority: Seniority = serde_json::from_str(r#""Distinguished""#).unwrap();
        assert_eq!(seniority, Seniority::Unknown);
    }

    #[test]
    fn test_unknown_difficulty_falls_back_to_unknown() {
        let difficulty: Difficulty = serde_json::from_str(r#""Brutal""#).unwrap();
        assert_eq!(difficulty, Difficulty::Unknown);
    }

    #[test]
    fn test_question_with_missing_fields_takes_defaults() {
        let question: Question = serde_json::from_str(r#"{"question": "Tell me about X"}"#).unwrap();
        assert_eq!(question.question, "Tell me about X");
        assert_eq!(question.category, Category::Other);
        assert_eq!(question.difficulty, Difficulty::Unknown);
        assert!(question.id.is_empty());
        assert!(question.resume_anchor.is_empty());
    }

    #[test]
    fn test_result_with_missing_meta_takes_defaults() {
        let result: GenerationResult = serde_json::from_str(r#"{"questions": []}"#).unwrap();
        assert!(result.meta.role_guess.is_empty());
        assert_eq!(result.meta.seniority_guess, Seniority::Unknown);
        assert!(result.meta.focus_areas.is_empty());
    }

    #[test]
    fn test_full_result_deserializes() {
        let json = r#"{
            "meta": {
                "role_guess": "Backend Engineer",
                "seniority_guess": "Senior",
                "focus_areas": ["Rust", "Distributed Systems"]
            },
            "questions": [
                {
                    "id": "q1",
                    "category": "Skills",
                    "label": "Rust ownership",
                    "question": "How does the borrow checker shape your API designs?",
                    "why_this_question": "Resume lists five years of Rust.",
                    "resume_anchor": "five years building Rust services",
                    "difficulty": "Medium"
                }
            ]
        }"#;
        let result: GenerationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.meta.seniority_guess, Seniority::Senior);
        assert_eq!(result.questions.len(), 1);
        assert_eq!(result.questions[0].category, Category::Skills);
        assert_eq!(result.questions[0].difficulty, Difficulty::Medium);
    }
}
