//! Free-text search query parsing.
//!
//! Boolean mode is a token split, not a grammar: the query is split on
//! whitespace and every interior `AND` / `OR` token (any case) is an operator.
//! Runs of other tokens form the terms. If any operator is `AND`, every term
//! must match; otherwise if any is `OR`, one term must match. Mixed queries
//! therefore take AND semantics.

use lazy_static::lazy_static;
use regex::Regex;

use crate::search::candidate::Candidate;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    /// Blank query; every candidate passes.
    Blank,
    /// Name, title or any single skill contains the text.
    Plain(String),
    /// Boolean mode without operators: one substring match against the haystack.
    Phrase(String),
    /// Every term must be in the haystack.
    All(Vec<String>),
    /// At least one term must be in the haystack.
    Any(Vec<String>),
}

impl SearchQuery {
    /// Parses once per evaluation. Terms and text are lowercased here.
    pub fn parse(raw: &str, boolean_mode: bool) -> Self {
        let query = raw.trim();
        if query.is_empty() {
            return SearchQuery::Blank;
        }
        let lowered = query.to_lowercase();
        if !boolean_mode {
            return SearchQuery::Plain(lowered);
        }

        let tokens: Vec<&str> = WHITESPACE.split(query).collect();
        let last = tokens.len() - 1;
        let mut terms: Vec<String> = Vec::new();
        let mut run: Vec<&str> = Vec::new();
        let mut has_and = false;
        let mut has_or = false;
        for (i, token) in tokens.into_iter().enumerate() {
            // an operator needs a word on each side, so a leading or trailing AND/OR is a term
            let is_and = token.eq_ignore_ascii_case("AND");
            let is_or = token.eq_ignore_ascii_case("OR");
            if (is_and || is_or) && i > 0 && i < last {
                has_and |= is_and;
                has_or |= is_or;
                if !run.is_empty() {
                    terms.push(run.join(" ").to_lowercase());
                    run.clear();
                }
            } else {
                run.push(token);
            }
        }
        if !run.is_empty() {
            terms.push(run.join(" ").to_lowercase());
        }

        if has_and {
            SearchQuery::All(terms)
        } else if has_or {
            SearchQuery::Any(terms)
        } else {
            SearchQuery::Phrase(lowered)
        }
    }

    pub fn matches(&self, candidate: &Candidate) -> bool {
        match self {
            SearchQuery::Blank => true,
            SearchQuery::Plain(text) => {
                candidate.name.to_lowercase().contains(text.as_str())
                    || candidate.title.to_lowercase().contains(text.as_str())
                    || candidate
                        .skills
                        .iter()
                        .any(|s| s.to_lowercase().contains(text.as_str()))
            }
            SearchQuery::Phrase(text) => candidate.search_haystack().contains(text.as_str()),
            SearchQuery::All(terms) => {
                let haystack = candidate.search_haystack();
                terms.iter().all(|t| haystack.contains(t.as_str()))
            }
            SearchQuery::Any(terms) => {
                let haystack = candidate.search_haystack();
                terms.iter().any(|t| haystack.contains(t.as_str()))
            }
        }
    }
}
