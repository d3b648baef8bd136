//! PDF text extraction — delegates page-by-page extraction to `pdf-extract`
//! and assembles the pages into a single résumé text.

use crate::errors::AppError;

/// Trimmed extracted text below this many characters is treated as
/// "extraction yielded nothing usable" (image-only or empty PDF).
pub const MIN_EXTRACTED_CHARS: usize = 50;

/// Extracts text from PDF bytes, page by page, joined in page order and
/// separated by blank lines. CPU-bound — callers on the async runtime wrap
/// this in `spawn_blocking`.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, AppError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| {
        AppError::UnprocessableEntity(format!("Failed to extract text from PDF: {e}"))
    })?;

    let text = assemble_pages(&pages);

    if text.chars().count() < MIN_EXTRACTED_CHARS {
        return Err(AppError::Validation(
            "PDF appears to be empty or text could not be extracted. Try a different PDF."
                .to_string(),
        ));
    }

    Ok(text)
}

/// Joins page texts in page order, separated by blank lines, with the
/// surrounding whitespace trimmed.
fn assemble_pages(pages: &[String]) -> String {
    pages.join("\n\n").trim().to_string()
}
