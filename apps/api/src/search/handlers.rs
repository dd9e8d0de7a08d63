use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::search::candidate::{project_rows, Candidate};
use crate::search::filter::{filter_candidates, FilterSpec, View};
use crate::search::pagination::{paginate, Page};
use crate::state::AppState;

/// Search request. Page and saved ids are session state owned by the caller.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub filters: FilterSpec,
    pub view: View,
    pub page: usize,
    pub saved_ids: Vec<String>,
}

/// POST /api/v1/candidates/search
pub async fn handle_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<Page<Candidate>>, AppError> {
    let rows = state.candidates.fetch_candidates().await?;
    let candidates = project_rows(&rows, &req.saved_ids, Utc::now());
    let matched = filter_candidates(&candidates, &req.filters, req.view);
    let page = paginate(&matched, req.page, state.config.search_page_size);

    debug!(
        "Candidate search: {} of {} matched, page {}/{}",
        page.total_count,
        candidates.len(),
        page.page,
        page.total_pages
    );
    Ok(Json(page))
}
