use crate::auth::JwtKeys;
use crate::db::DbPool;
use receptai_core::ai::AiClient;
use receptai_core::detection::ObjectDetector;
use std::sync::Arc;

/// Everything a handler may need, built once at startup.
pub struct AppContext {
    pub pool: DbPool,
    pub jwt: JwtKeys,
    pub detector: Arc<dyn ObjectDetector>,
    pub ai_client: Arc<dyn AiClient>,
}

/// Application state shared across all handlers
pub type AppState = Arc<AppContext>;
