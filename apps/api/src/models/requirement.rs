use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Open job requirement with the number of resumes delivered against it so far.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RequirementRow {
    pub id: Uuid,
    pub title: String,
    pub client_name: Option<String>,
    pub criticality: Option<String>,
    pub toughness: Option<String>,
    pub delivered: i64,
}
