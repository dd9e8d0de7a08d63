use std::sync::Arc;

use crate::config::Config;
use crate::search::source::CandidateSource;
use crate::targets::source::RequirementSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Candidate-data collaborator. Default: PgCandidateSource.
    pub candidates: Arc<dyn CandidateSource>,
    /// Requirement store with delivered-resume counts. Default: PgRequirementSource.
    pub requirements: Arc<dyn RequirementSource>,
}
