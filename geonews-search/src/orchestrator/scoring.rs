//! Location relevance scoring.
//!
//! A bounded keyword-density heuristic. Each signal found in the result's
//! lowercased title, body text and URL adds a fixed weight:
//!
//! | signal                              | weight        |
//! |-------------------------------------|---------------|
//! | primary name                        | 3             |
//! | region                              | 2             |
//! | each alias                          | 2             |
//! | each distinct local keyword         | 0.5           |
//! | each distinct nearby place          | 0.3           |
//! | URL on a preferred source domain    | 2             |
//!
//! `score = min(sum / 10, 1)`. Results scored without a location get
//! [`NEUTRAL_SCORE`].

use std::collections::BTreeSet;

use crate::catalog::LocationDescriptor;
use crate::types::{ScoredResult, SearchResultItem};

use super::fanout::StrategyHit;

/// Score given to every result when no location is known.
pub const NEUTRAL_SCORE: f64 = 0.5;

const PRIMARY_NAME_WEIGHT: f64 = 3.0;
const REGION_WEIGHT: f64 = 2.0;
const ALIAS_WEIGHT: f64 = 2.0;
const LOCAL_KEYWORD_WEIGHT: f64 = 0.5;
const NEARBY_PLACE_WEIGHT: f64 = 0.3;
const PREFERRED_SOURCE_WEIGHT: f64 = 2.0;
const SCORE_DIVISOR: f64 = 10.0;

/// Relevance of `result` to `location`, in `[0, 1]`.
pub fn score(result: &SearchResultItem, location: Option<&LocationDescriptor>) -> f64 {
    let Some(location) = location else {
        return NEUTRAL_SCORE;
    };

    let haystack = format!(
        "{} {} {}",
        result.title.as_deref().unwrap_or_default(),
        result.body_text.as_deref().unwrap_or_default(),
        result.url
    )
    .to_lowercase();
    let contains = |needle: &str| haystack.contains(&needle.to_lowercase());

    let mut raw = 0.0;

    if contains(location.primary_name) {
        raw += PRIMARY_NAME_WEIGHT;
    }
    if location.region.is_some_and(contains) {
        raw += REGION_WEIGHT;
    }
    raw += ALIAS_WEIGHT * count_distinct(location.aliases, contains) as f64;
    raw += LOCAL_KEYWORD_WEIGHT * count_distinct(location.local_keywords, contains) as f64;
    raw += NEARBY_PLACE_WEIGHT * count_distinct(location.nearby_place_names, contains) as f64;

    let url = result.url.to_lowercase();
    if location
        .preferred_source_domains
        .iter()
        .any(|domain| url.contains(&domain.to_lowercase()))
    {
        raw += PREFERRED_SOURCE_WEIGHT;
    }

    (raw / SCORE_DIVISOR).clamp(0.0, 1.0)
}

/// Score every fan-out hit, keeping strategy order.
pub fn score_hits(
    hits: Vec<StrategyHit>,
    location: Option<&LocationDescriptor>,
) -> Vec<ScoredResult> {
    hits.into_iter()
        .map(|hit| ScoredResult {
            relevance_score: score(&hit.item, location),
            strategy_index: hit.strategy_index,
            item: hit.item,
        })
        .collect()
}

/// Number of distinct (case-insensitive) terms for which `found` holds.
fn count_distinct(terms: &[&str], found: impl Fn(&str) -> bool) -> usize {
    terms
        .iter()
        .map(|term| term.to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter(|term| found(term))
        .count()
}
