//! Search orchestrator: strategy fan-out, relevance scoring, dedup, ranking.
//!
//! This module fans planned queries out to the provider concurrently,
//! scores each hit for location relevance, deduplicates by canonical URL
//! and returns a ranked, truncated result set.

pub mod fanout;
pub mod merge;
pub mod pipeline;
pub mod scoring;
pub mod url_normalize;
