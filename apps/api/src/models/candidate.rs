use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw candidate record as stored by the data-entry and bulk-import collaborators.
/// Free-text columns are projected into a `search::candidate::Candidate` before filtering.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub current_company: Option<String>,
    pub education: Option<String>,
    /// e.g. "5.5 years"
    pub experience: Option<String>,
    /// Comma-separated, e.g. "React, Node.js, AWS"
    pub skills: Option<String>,
    pub current_ctc: Option<String>,
    pub expected_ctc: Option<String>,
    pub pedigree_level: Option<String>,
    pub company_level: Option<String>,
    pub company_sector: Option<String>,
    pub product_service: Option<String>,
    pub product_category: Option<String>,
    pub product_domain: Option<String>,
    pub employment_type: Option<String>,
    pub notice_period: Option<String>,
    pub availability: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
