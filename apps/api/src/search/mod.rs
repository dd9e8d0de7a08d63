// Candidate search: projection, boolean query parsing, faceted filtering, paging.
// The engine is pure; rows come in through CandidateSource.

pub mod candidate;
pub mod filter;
pub mod handlers;
pub mod pagination;
pub mod query;
pub mod source;
