pub mod candidate;
pub mod requirement;
