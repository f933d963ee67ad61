pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::resumes::handlers;
use crate::state::AppState;

/// Room for multipart boundaries and the `name` field on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/resume/upload",
            post(handlers::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/resume/analyze", post(handlers::handle_analyze))
        .route("/api/resumes", get(handlers::handle_list_resumes))
        .route("/api/resume/:id", delete(handlers::handle_delete_resume))
        .route("/api/resume/:id/scores", get(handlers::handle_list_scores))
        .route("/api/scores/:id", get(handlers::handle_get_score))
        .with_state(state)
}
