// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::cleaner::ResponseCleaner;
use crate::services::generation::{GeminiClient, GenerationError, TextGenerator};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub cleaner: ResponseCleaner,
}

impl AppState {
    /// Build the state for the real server: one Gemini client constructed
    /// at startup and reused across requests.
    pub fn new(config: &AppConfig) -> Result<SharedState, GenerationError> {
        let client = GeminiClient::new(&config.gemini)?;
        Ok(Self::with_generator(Arc::new(client)))
    }

    /// Build state around any generator. Tests substitute a stub here.
    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> SharedState {
        Arc::new(AppState {
            generator,
            cleaner: ResponseCleaner::new(),
        })
    }
}
