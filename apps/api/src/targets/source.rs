use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::requirement::RequirementRow;

/// Requirement store seam. Rows carry the delivered-resume count.
#[async_trait]
pub trait RequirementSource: Send + Sync {
    async fn fetch_requirements(&self) -> Result<Vec<RequirementRow>, AppError>;
    async fn fetch_requirement(&self, id: Uuid) -> Result<Option<RequirementRow>, AppError>;
}

pub struct PgRequirementSource {
    pool: PgPool,
}

impl PgRequirementSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const REQUIREMENT_SELECT: &str = r#"
    SELECT r.id, r.title, r.client_name, r.criticality, r.toughness,
           COUNT(s.id) AS delivered
    FROM requirements r
    LEFT JOIN requirement_submissions s ON s.requirement_id = r.id
"#;

#[async_trait]
impl RequirementSource for PgRequirementSource {
    async fn fetch_requirements(&self) -> Result<Vec<RequirementRow>, AppError> {
        let sql = format!("{REQUIREMENT_SELECT} GROUP BY r.id ORDER BY r.created_at DESC");
        let rows: Vec<RequirementRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        debug!("Fetched {} requirements", rows.len());
        Ok(rows)
    }

    async fn fetch_requirement(&self, id: Uuid) -> Result<Option<RequirementRow>, AppError> {
        let sql = format!("{REQUIREMENT_SELECT} WHERE r.id = $1 GROUP BY r.id");
        let row: Option<RequirementRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[cfg(test)]
pub struct StaticRequirementSource(pub Vec<RequirementRow>);

#[cfg(test)]
#[async_trait]
impl RequirementSource for StaticRequirementSource {
    async fn fetch_requirements(&self) -> Result<Vec<RequirementRow>, AppError> {
        Ok(self.0.clone())
    }

    async fn fetch_requirement(&self, id: Uuid) -> Result<Option<RequirementRow>, AppError> {
        Ok(self.0.iter().find(|r| r.id == id).cloned())
    }
}
