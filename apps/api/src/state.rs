use std::sync::Arc;

use crate::config::Config;
use crate::scoring::ResumeScorer;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Resume and score storage. Default: MemStore.
    pub store: Arc<dyn Store>,
    /// Pluggable scorer. Default: KeywordAtsScorer.
    pub scorer: Arc<dyn ResumeScorer>,
}
