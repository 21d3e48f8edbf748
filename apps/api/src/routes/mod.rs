pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats_handlers;
use crate::drafts::handlers as draft_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS API
        .route("/api/v1/ats/analyze", post(ats_handlers::handle_analyze))
        .route(
            "/api/v1/ats/job-description",
            post(ats_handlers::handle_parse_posting),
        )
        // Draft API
        .route("/api/v1/drafts", post(draft_handlers::handle_create_draft))
        .route(
            "/api/v1/drafts/:id",
            get(draft_handlers::handle_get_draft).put(draft_handlers::handle_save_draft),
        )
        .route(
            "/api/v1/drafts/:id/history",
            get(draft_handlers::handle_draft_history),
        )
        .route(
            "/api/v1/drafts/:id/version/:v",
            get(draft_handlers::handle_get_draft_version),
        )
        .route(
            "/api/v1/drafts/:id/analyze",
            post(draft_handlers::handle_analyze_draft),
        )
        .with_state(state)
}
