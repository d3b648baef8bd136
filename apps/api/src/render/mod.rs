//! Presentation of a generation result: grouping by category and the
//! plain-text export. Pure — no network or file I/O.

use serde::Serialize;

use crate::generation::questions::{Category, GenerationResult, Question};

const RULE_WIDTH: usize = 60;

/// Questions of one category, in order of first appearance.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
    pub questions: Vec<Question>,
}

/// Groups questions by category. Within a category, questions keep insertion
/// order; categories are sorted lexically by display label.
pub fn group_by_category(questions: &[Question]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for question in questions {
        match groups.iter_mut().find(|g| g.category == question.category) {
            Some(group) => group.questions.push(question.clone()),
            None => groups.push(CategoryGroup {
                category: question.category,
                label: question.category.as_str(),
                count: 0,
                questions: vec![question.clone()],
            }),
        }
    }

    for group in &mut groups {
        group.count = group.questions.len();
    }
    groups.sort_by(|a, b| a.label.cmp(b.label));
    groups
}

/// The parser performs no semantic validation, so missing meta fields
/// surface here as "Unknown"/"N/A".
fn role_or_unknown(role: &str) -> &str {
    let trimmed = role.trim();
    if trimmed.is_empty() {
        "Unknown"
    } else {
        trimmed
    }
}

fn focus_areas_or_na(areas: &[String]) -> String {
    if areas.is_empty() {
        "N/A".to_string()
    } else {
        areas.join(", ")
    }
}

/// Serializes the grouped view into the fixed plain-text export layout:
/// a header with role/seniority/focus areas, then per-category numbered
/// entries with question/why/anchor/difficulty.
///
/// Deterministic: the same result always produces the identical blob.
pub fn render_plain_text(result: &GenerationResult) -> String {
    let groups = group_by_category(&result.questions);

    let mut text = String::new();
    text.push_str("Interview Questions\n");
    text.push_str(&format!(
        "Role: {}\n",
        role_or_unknown(&result.meta.role_guess)
    ));
    text.push_str(&format!(
        "Seniority: {}\n",
        result.meta.seniority_guess.as_str()
    ));
    text.push_str(&format!(
        "Focus Areas: {}\n",
        focus_areas_or_na(&result.meta.focus_areas)
    ));
    text.push_str(&format!("\n{}\n\n", "=".repeat(RULE_WIDTH)));

    for group in &groups {
        text.push_str(&format!(
            "{} ({})\n",
            group.label.to_uppercase(),
            group.count
        ));
        text.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));
        for (idx, q) in group.questions.iter().enumerate() {
            text.push_str(&format!("\n{}. {}\n", idx + 1, q.label));
            text.push_str(&format!("   Q: {}\n", q.question));
            text.push_str(&format!("   Why: {}\n", q.why_this_question));
            text.push_str(&format!("   Anchor: \"{}\"\n", q.resume_anchor));
            text.push_str(&format!("   Difficulty: {}\n", q.difficulty.as_str()));
        }
        text.push('\n');
    }

    text
}
