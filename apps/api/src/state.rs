use std::sync::Arc;

use crate::auth::IdentityResolver;
use crate::history::HistoryStore;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only across requests.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation collaborator. Default: `GeminiClient`.
    pub generator: Arc<dyn TextGenerator>,
    /// Identity collaborator. Default: `SupabaseIdentityResolver`.
    pub identity: Arc<dyn IdentityResolver>,
    /// `None` when no database is configured; generation still works.
    pub history: Option<Arc<dyn HistoryStore>>,
}
