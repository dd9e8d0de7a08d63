use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::targets::progress::RequirementProgress;
use crate::targets::resolver::{normalize_criticality, normalize_toughness, resolve_target};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResolveQuery {
    pub criticality: String,
    pub toughness: String,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub criticality: String,
    pub toughness: String,
    pub target: u32,
}

/// GET /api/v1/targets/resolve
pub async fn handle_resolve(Query(params): Query<ResolveQuery>) -> Json<ResolveResponse> {
    Json(ResolveResponse {
        criticality: normalize_criticality(&params.criticality),
        toughness: normalize_toughness(&params.toughness),
        target: resolve_target(&params.criticality, &params.toughness),
    })
}

/// GET /api/v1/requirements/progress
pub async fn handle_list_progress(
    State(state): State<AppState>,
) -> Result<Json<Vec<RequirementProgress>>, AppError> {
    let rows = state.requirements.fetch_requirements().await?;
    let progress: Vec<_> = rows.iter().map(RequirementProgress::from_row).collect();
    debug!("Computed delivery progress for {} requirements", progress.len());
    Ok(Json(progress))
}

/// GET /api/v1/requirements/:id/progress
pub async fn handle_get_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RequirementProgress>, AppError> {
    let row = state
        .requirements
        .fetch_requirement(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Requirement {id} not found")))?;
    Ok(Json(RequirementProgress::from_row(&row)))
}
