//! Candidate-data collaborator seam.
//!
//! `AppState` holds an `Arc<dyn CandidateSource>`; the engine itself only ever
//! sees the rows a source hands back.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::candidate::CandidateRow;

#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Returns every candidate in a stable order.
    async fn fetch_candidates(&self) -> Result<Vec<CandidateRow>, AppError>;
}

/// Reads candidates from the `candidates` table, newest first.
pub struct PgCandidateSource {
    pool: PgPool,
}

impl PgCandidateSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateSource for PgCandidateSource {
    async fn fetch_candidates(&self) -> Result<Vec<CandidateRow>, AppError> {
        let rows: Vec<CandidateRow> = sqlx::query_as(
            r#"
            SELECT id::text AS id, name, title, location, current_company, education,
                   experience, skills, current_ctc, expected_ctc,
                   pedigree_level, company_level, company_sector,
                   product_service, product_category, product_domain,
                   employment_type, notice_period, availability, created_at
            FROM candidates
            ORDER BY created_at DESC NULLS LAST, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} candidate rows", rows.len());
        Ok(rows)
    }
}

/// Fixed in-memory candidate list.
#[cfg(test)]
pub struct StaticCandidateSource(pub Vec<CandidateRow>);

#[cfg(test)]
#[async_trait]
impl CandidateSource for StaticCandidateSource {
    async fn fetch_candidates(&self) -> Result<Vec<CandidateRow>, AppError> {
        Ok(self.0.clone())
    }
}
