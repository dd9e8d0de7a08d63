pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::search::handlers as search;
use crate::state::AppState;
use crate::targets::handlers as targets;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate search
        .route("/api/v1/candidates/search", post(search::handle_search))
        // Resume targets
        .route("/api/v1/targets/resolve", get(targets::handle_resolve))
        .route(
            "/api/v1/requirements/progress",
            get(targets::handle_list_progress),
        )
        .route(
            "/api/v1/requirements/:id/progress",
            get(targets::handle_get_progress),
        )
        .with_state(state)
}
