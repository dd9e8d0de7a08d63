use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::requirement::RequirementRow;
use crate::targets::resolver::{normalize_criticality, normalize_toughness, resolve_target};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    NotStarted,
    InProgress,
    Met,
}

/// Resume target vs. resumes actually delivered for one requirement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryProgress {
    pub target: u32,
    pub delivered: u32,
    pub remaining: u32,
    /// delivered / target, capped at 1.0
    pub completion: f64,
    pub status: DeliveryStatus,
}

pub fn compute_progress(target: u32, delivered: u32) -> DeliveryProgress {
    let status = match delivered {
        0 if target > 0 => DeliveryStatus::NotStarted,
        d if d >= target => DeliveryStatus::Met,
        _ => DeliveryStatus::InProgress,
    };
    let completion = if target == 0 {
        1.0
    } else {
        (delivered as f64 / target as f64).min(1.0)
    };

    DeliveryProgress {
        target,
        delivered,
        remaining: target.saturating_sub(delivered),
        completion,
        status,
    }
}

/// Dashboard row: a requirement with its normalized classification and progress.
#[derive(Debug, Clone, Serialize)]
pub struct RequirementProgress {
    pub requirement_id: Uuid,
    pub title: String,
    pub client_name: Option<String>,
    pub criticality: String,
    pub toughness: String,
    pub progress: DeliveryProgress,
}

impl RequirementProgress {
    pub fn from_row(row: &RequirementRow) -> Self {
        let criticality = row.criticality.as_deref().unwrap_or("");
        let toughness = row.toughness.as_deref().unwrap_or("");
        let target = resolve_target(criticality, toughness);
        let delivered = u32::try_from(row.delivered.max(0)).unwrap_or(u32::MAX);

        Self {
            requirement_id: row.id,
            title: row.title.clone(),
            client_name: row.client_name.clone(),
            criticality: normalize_criticality(criticality),
            toughness: normalize_toughness(toughness),
            progress: compute_progress(target, delivered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_started() {
        let p = compute_progress(6, 0);
        assert_eq!(p.status, DeliveryStatus::NotStarted);
        assert_eq!(p.remaining, 6);
        assert_eq!(p.completion, 0.0);
    }

    #[test]
    fn test_in_progress() {
        let p = compute_progress(4, 3);
        assert_eq!(p.status, DeliveryStatus::InProgress);
        assert_eq!(p.remaining, 1);
        assert!((p.completion - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_over_delivery_is_met_and_capped() {
        let p = compute_progress(2, 5);
        assert_eq!(p.status, DeliveryStatus::Met);
        assert_eq!(p.remaining, 0);
        assert_eq!(p.completion, 1.0);
    }

    #[test]
    fn test_row_with_missing_classification_uses_defaults() {
        let row = RequirementRow {
            id: Uuid::new_v4(),
            title: "Staff Backend Engineer".into(),
            client_name: None,
            criticality: None,
            toughness: Some("tough".into()),
            delivered: 1,
        };
        let rp = RequirementProgress::from_row(&row);
        assert_eq!(rp.criticality, "MEDIUM");
        assert_eq!(rp.toughness, "Tough");
        assert_eq!(rp.progress.target, 2);
        assert_eq!(rp.progress.status, DeliveryStatus::InProgress);
    }

    #[test]
    fn test_negative_delivered_count_reads_as_zero() {
        let row = RequirementRow {
            id: Uuid::new_v4(),
            title: "QA Lead".into(),
            client_name: Some("Initech".into()),
            criticality: Some("HIGH".into()),
            toughness: Some("Easy".into()),
            delivered: -3,
        };
        let rp = RequirementProgress::from_row(&row);
        assert_eq!(rp.progress.delivered, 0);
        assert_eq!(rp.progress.target, 6);
    }
}
