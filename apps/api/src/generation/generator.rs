//! Question generation — the one orchestrated pipeline in the service.
//!
//! Flow: length gate → build prompt → Gemini call → JSON recovery → typed
//! result. The gate runs before anything else; a résumé below the minimum
//! never produces a request.

use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::build_interview_prompt;
use crate::generation::questions::GenerationResult;
use crate::llm_client::GeminiClient;

/// Minimum résumé length accepted for generation, in characters.
pub const MIN_RESUME_CHARS: usize = 200;

/// Generates interview questions for a résumé.
///
/// The returned result carries whatever the model produced after JSON
/// recovery — no semantic validation beyond the lenient typed decode.
pub async fn generate_questions(
    resume_text: &str,
    llm: &GeminiClient,
) -> Result<GenerationResult, AppError> {
    let length = resume_text.chars().count();
    if length < MIN_RESUME_CHARS {
        return Err(AppError::Validation(format!(
            "Resume text must be at least {MIN_RESUME_CHARS} characters (got {length})"
        )));
    }

    let prompt = build_interview_prompt(resume_text);
    let result: GenerationResult = llm.call_json(&prompt).await?;

    info!(
        "Generated {} questions (role guess: '{}')",
        result.questions.len(),
        result.meta.role_guess
    );

    Ok(result)
}
