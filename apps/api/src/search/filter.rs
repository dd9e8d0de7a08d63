//! Candidate Filter Engine: faceted filtering over an in-memory candidate list.
//!
//! Pure and stable: the output keeps the input's relative order and identical
//! inputs always give identical output. Empty filter values never reject.

use serde::{Deserialize, Serialize};

use crate::search::candidate::Candidate;
use crate::search::query::SearchQuery;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    All,
    Saved,
}

/// Inclusive experience range in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ExperienceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::MAX,
        }
    }
}

impl ExperienceRange {
    pub fn contains(&self, years: f64) -> bool {
        !(years < self.min || years > self.max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub query: String,
    pub boolean_mode: bool,
    pub location: String,
    /// Matched against the candidate's title.
    pub role: String,
    /// Matched against the candidate's current company.
    pub company: String,
    pub pedigree_level: String,
    pub company_level: String,
    pub company_sector: String,
    pub product_service: String,
    pub product_category: String,
    pub product_domain: String,
    pub employment_type: String,
    pub notice_period: String,
    pub availability: String,
    pub experience: ExperienceRange,
    pub ctc_min: String,
    pub ctc_max: String,
    /// Every entry must be contained in at least one candidate skill.
    pub skills: Vec<String>,
}

impl FilterSpec {
    /// (filter value, candidate field) pairs for the substring facets.
    fn field_filters<'a>(&'a self, c: &'a Candidate) -> [(&'a str, &'a str); 12] {
        [
            (self.location.as_str(), c.location.as_str()),
            (self.role.as_str(), c.title.as_str()),
            (self.company.as_str(), c.current_company.as_str()),
            (self.pedigree_level.as_str(), c.pedigree_level.as_str()),
            (self.company_level.as_str(), c.company_level.as_str()),
            (self.company_sector.as_str(), c.company_sector.as_str()),
            (self.product_service.as_str(), c.product_service.as_str()),
            (self.product_category.as_str(), c.product_category.as_str()),
            (self.product_domain.as_str(), c.product_domain.as_str()),
            (self.employment_type.as_str(), c.employment_type.as_str()),
            (self.notice_period.as_str(), c.notice_period.as_str()),
            (self.availability.as_str(), c.availability.as_str()),
        ]
    }
}

/// Filters `candidates` by `spec` within `view`, keeping input order.
pub fn filter_candidates(candidates: &[Candidate], spec: &FilterSpec, view: View) -> Vec<Candidate> {
    let query = SearchQuery::parse(&spec.query, spec.boolean_mode);
    let required_skills: Vec<String> = spec
        .skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    let ctc_min = parse_ctc_bound(&spec.ctc_min);
    let ctc_max = parse_ctc_bound(&spec.ctc_max);

    candidates
        .iter()
        .filter(|c| view == View::All || c.saved)
        .filter(|c| query.matches(c))
        .filter(|c| {
            spec.field_filters(c)
                .iter()
                .all(|(wanted, actual)| contains_ignore_case(actual, wanted))
        })
        .filter(|c| spec.experience.contains(c.experience))
        .filter(|c| has_required_skills(c, &required_skills))
        .filter(|c| ctc_within(parse_ctc(&c.current_ctc), ctc_min, ctc_max))
        .cloned()
        .collect()
}

/// Case-insensitive substring test; an empty needle always matches.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn has_required_skills(candidate: &Candidate, required: &[String]) -> bool {
    if required.is_empty() {
        return true;
    }
    let skills: Vec<String> = candidate.skills.iter().map(|s| s.to_lowercase()).collect();
    required
        .iter()
        .all(|req| skills.iter().any(|s| s.contains(req.as_str())))
}

/// Strips every non-digit and reads the rest as an integer.
/// No digits (or a value too large for u64) reads as 0.
pub fn parse_ctc(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// A bound with no digits is unset.
fn parse_ctc_bound(raw: &str) -> Option<u64> {
    if raw.chars().any(|c| c.is_ascii_digit()) {
        Some(parse_ctc(raw))
    } else {
        None
    }
}

fn ctc_within(ctc: u64, min: Option<u64>, max: Option<u64>) -> bool {
    min.map_or(true, |m| ctc >= m) && max.map_or(true, |m| ctc <= m)
}
