use std::sync::Arc;

use sqlx::PgPool;

use crate::ats::analyzer::ResumeAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Backs the resume draft store only; analyses are never persisted.
    pub db: PgPool,
    /// Pluggable analyzer. Default: KeywordAnalyzer.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
