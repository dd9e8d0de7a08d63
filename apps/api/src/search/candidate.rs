//! Candidate projection: turns a raw store record into the searchable shape the
//! filter engine works on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::candidate::CandidateRow;

pub const NOT_SPECIFIED: &str = "Not specified";

/// Read-only search projection of a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub title: String,
    pub location: String,
    pub current_company: String,
    pub education: String,
    /// Years, parsed from free text. Never negative.
    pub experience: f64,
    pub skills: Vec<String>,
    pub current_ctc: String,
    pub expected_ctc: String,
    pub pedigree_level: String,
    pub company_level: String,
    pub company_sector: String,
    pub product_service: String,
    pub product_category: String,
    pub product_domain: String,
    pub employment_type: String,
    pub notice_period: String,
    pub availability: String,
    /// Session-scoped; set from the caller's saved ids, never persisted here.
    pub saved: bool,
    pub last_active: String,
}

impl Candidate {
    pub fn from_row(row: &CandidateRow, now: DateTime<Utc>) -> Self {
        Self {
            id: row.id.clone(),
            name: display_or_default(row.name.as_deref()),
            title: display_or_default(row.title.as_deref()),
            location: display_or_default(row.location.as_deref()),
            current_company: display_or_default(row.current_company.as_deref()),
            education: display_or_default(row.education.as_deref()),
            experience: parse_experience(row.experience.as_deref().unwrap_or("")),
            skills: split_skills(row.skills.as_deref().unwrap_or("")),
            current_ctc: text_or_empty(row.current_ctc.as_deref()),
            expected_ctc: text_or_empty(row.expected_ctc.as_deref()),
            pedigree_level: text_or_empty(row.pedigree_level.as_deref()),
            company_level: text_or_empty(row.company_level.as_deref()),
            company_sector: text_or_empty(row.company_sector.as_deref()),
            product_service: text_or_empty(row.product_service.as_deref()),
            product_category: text_or_empty(row.product_category.as_deref()),
            product_domain: text_or_empty(row.product_domain.as_deref()),
            employment_type: text_or_empty(row.employment_type.as_deref()),
            notice_period: text_or_empty(row.notice_period.as_deref()),
            availability: text_or_empty(row.availability.as_deref()),
            saved: false,
            last_active: last_active_label(row.created_at, now),
        }
    }

    /// Text the boolean search matches against: name, title and all skills.
    pub fn search_haystack(&self) -> String {
        format!("{} {} {}", self.name, self.title, self.skills.join(" ")).to_lowercase()
    }
}

/// Projects every row, marking candidates whose id is in `saved_ids`.
pub fn project_rows(rows: &[CandidateRow], saved_ids: &[String], now: DateTime<Utc>) -> Vec<Candidate> {
    rows.iter()
        .map(|row| {
            let mut candidate = Candidate::from_row(row, now);
            candidate.saved = saved_ids.iter().any(|id| *id == candidate.id);
            candidate
        })
        .collect()
}

fn display_or_default(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_SPECIFIED.to_string(),
    }
}

fn text_or_empty(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Keeps digits and '.', then reads the longest leading decimal number.
/// "5.5 years" -> 5.5, "Fresher" -> 0.0
pub fn parse_experience(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut seen_dot = false;
    let leading: String = cleaned
        .chars()
        .take_while(|c| {
            if *c == '.' {
                if seen_dot {
                    return false;
                }
                seen_dot = true;
            }
            true
        })
        .collect();

    let leading = leading.trim_end_matches('.');
    if !leading.chars().any(|c| c.is_ascii_digit()) {
        return 0.0;
    }
    leading.parse::<f64>().unwrap_or(0.0)
}

/// Splits a comma-separated skills field. Duplicates (ignoring case) keep the
/// first spelling.
pub fn split_skills(raw: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut skills: Vec<String> = Vec::new();
    for skill in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let key = skill.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            skills.push(skill.to_string());
        }
    }
    skills
}

pub fn last_active_label(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let days = match created_at {
        Some(ts) => (now - ts).num_days(),
        None => 0,
    };
    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        d => format!("{d} days ago"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_experience_leading_decimal() {
        assert_eq!(parse_experience("5.5 years"), 5.5);
        assert_eq!(parse_experience("3 yrs"), 3.0);
        assert_eq!(parse_experience("1.2.3"), 1.2);
    }

    #[test]
    fn test_experience_without_digits_is_zero() {
        assert_eq!(parse_experience("Fresher"), 0.0);
        assert_eq!(parse_experience(""), 0.0);
        assert_eq!(parse_experience("..."), 0.0);
    }

    #[test]
    fn test_skills_split_trim_and_dedupe() {
        let skills = split_skills(" React ,Node.js,, react , AWS");
        assert_eq!(skills, vec!["React", "Node.js", "AWS"]);
    }

    #[test]
    fn test_skills_dedupe_non_ascii_case() {
        assert_eq!(split_skills("Ödoo, ödoo, Straße"), vec!["Ödoo", "Straße"]);
    }

    #[test]
    fn test_missing_display_fields_default() {
        let row = CandidateRow {
            id: "c1".into(),
            name: Some("  ".into()),
            ..CandidateRow::default()
        };
        let c = Candidate::from_row(&row, now());
        assert_eq!(c.name, NOT_SPECIFIED);
        assert_eq!(c.education, NOT_SPECIFIED);
        assert_eq!(c.pedigree_level, "");
        assert_eq!(c.experience, 0.0);
        assert!(c.skills.is_empty());
        assert!(!c.saved);
    }

    #[test]
    fn test_last_active_labels() {
        let n = now();
        assert_eq!(last_active_label(Some(n - Duration::hours(3)), n), "Today");
        assert_eq!(last_active_label(Some(n - Duration::days(1)), n), "1 day ago");
        assert_eq!(last_active_label(Some(n - Duration::days(9)), n), "9 days ago");
        assert_eq!(last_active_label(Some(n + Duration::days(2)), n), "Today");
        assert_eq!(last_active_label(None, n), "Today");
    }

    #[test]
    fn test_project_rows_marks_saved() {
        let rows = vec![
            CandidateRow { id: "a".into(), ..CandidateRow::default() },
            CandidateRow { id: "b".into(), ..CandidateRow::default() },
        ];
        let projected = project_rows(&rows, &["b".to_string()], now());
        assert!(!projected[0].saved);
        assert!(projected[1].saved);
    }

    #[test]
    fn test_haystack_is_lowercase_name_title_skills() {
        let row = CandidateRow {
            id: "c1".into(),
            name: Some("Asha Rao".into()),
            title: Some("Backend Engineer".into()),
            skills: Some("Rust, AWS".into()),
            ..CandidateRow::default()
        };
        let c = Candidate::from_row(&row, now());
        assert_eq!(c.search_haystack(), "asha rao backend engineer rust aws");
    }
}
