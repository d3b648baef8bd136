use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::config::Config;
use crate::generation::questions::GenerationResult;
use crate::llm_client::GeminiClient;

/// The current résumé text and its originating file name.
#[derive(Debug, Clone)]
pub struct ResumeText {
    pub file_name: String,
    pub text: String,
}

/// Per-process session: the single most-recent résumé and generation result.
/// Each is replaced wholesale by the next successful operation — never merged.
#[derive(Debug, Default)]
pub struct Session {
    pub resume: Option<ResumeText>,
    pub result: Option<GenerationResult>,
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: GeminiClient,
    pub session: Arc<RwLock<Session>>,
    /// Held for the duration of an extraction; an overlapping upload is
    /// refused rather than queued.
    pub extract_gate: Arc<Mutex<()>>,
    /// Held for the duration of a generation call.
    pub generate_gate: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            llm: GeminiClient::new(config.gemini_api_key),
            session: Arc::new(RwLock::new(Session::default())),
            extract_gate: Arc::new(Mutex::new(())),
            generate_gate: Arc::new(Mutex::new(())),
        }
    }
}
