//! Dedup and final ranking of scored results.
//!
//! Duplicates are detected by canonical URL and the *first* occurrence in
//! input order wins, whatever its score. Survivors are ranked by
//!
//! ```text
//! combined = relevance * W_r + (published_at / now) * W_t
//! ```
//!
//! with `(W_r, W_t)` chosen by [`MergePolicy`]. Equal keys fall back to
//! the lower strategy index, then to input order.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::catalog::LocationDescriptor;
use crate::types::{RankedResultSet, ScoredResult};

use super::url_normalize::canonical_url;

/// How relevance and recency are weighted in the final ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Relevance 0.7, recency 0.3.
    General,
    /// Relevance 0.8, recency 0.2. Used when a location drove the search.
    LocationSpecific,
}

impl MergePolicy {
    /// `(relevance_weight, recency_weight)`.
    pub fn weights(self) -> (f64, f64) {
        match self {
            Self::General => (0.7, 0.3),
            Self::LocationSpecific => (0.8, 0.2),
        }
    }

    /// [`Self::LocationSpecific`] when a location is known.
    pub fn for_location(location: Option<&LocationDescriptor>) -> Self {
        if location.is_some() {
            Self::LocationSpecific
        } else {
            Self::General
        }
    }
}

/// Dedup, rank and truncate `scored` to at most `cap` results.
pub fn merge(scored: Vec<ScoredResult>, policy: MergePolicy, cap: usize) -> RankedResultSet {
    merge_at(scored, policy, cap, Utc::now())
}

/// [`merge`] with an explicit "now" for the recency term.
pub fn merge_at(
    scored: Vec<ScoredResult>,
    policy: MergePolicy,
    cap: usize,
    now: DateTime<Utc>,
) -> RankedResultSet {
    let mut seen: HashSet<String> = HashSet::with_capacity(scored.len());
    let mut ranked: Vec<(usize, f64, ScoredResult)> = scored
        .into_iter()
        .filter(|result| seen.insert(canonical_url(&result.item.url)))
        .enumerate()
        .map(|(position, result)| (position, combined_key(&result, policy, now), result))
        .collect();

    ranked.sort_by(|(pos_a, key_a, a), (pos_b, key_b, b)| {
        key_b
            .partial_cmp(key_a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.strategy_index.cmp(&b.strategy_index))
            .then_with(|| pos_a.cmp(pos_b))
    });
    ranked.truncate(cap);

    RankedResultSet::from_ranked(ranked.into_iter().map(|(_, _, result)| result).collect())
}

/// The ranking key for one result.
pub fn combined_key(result: &ScoredResult, policy: MergePolicy, now: DateTime<Utc>) -> f64 {
    let (relevance_weight, recency_weight) = policy.weights();
    result.relevance_score * relevance_weight
        + recency(result.item.published_at, now) * recency_weight
}

/// `published_at / now` on epoch milliseconds; 0 for a non-positive `now`.
fn recency(published_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let now_ms = now.timestamp_millis();
    if now_ms <= 0 {
        return 0.0;
    }
    published_at.timestamp_millis() as f64 / now_ms as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchResultItem;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).single().expect("time")
    }

    fn scored(
        url: &str,
        relevance: f64,
        strategy: usize,
        published: DateTime<Utc>,
    ) -> ScoredResult {
        ScoredResult {
            item: SearchResultItem::new(url, published),
            relevance_score: relevance,
            strategy_index: strategy,
        }
    }

    fn urls(set: &RankedResultSet) -> Vec<&str> {
        set.iter().map(|r| r.item.url.as_str()).collect()
    }

    #[test]
    fn duplicate_url_keeps_first_occurrence() {
        let input = vec![
            scored("https://a.com/story", 0.9, 0, now()),
            scored("https://a.com/story", 0.3, 1, now()),
        ];
        let merged = merge_at(input, MergePolicy::General, 10, now());
        assert_eq!(merged.len(), 1);
        assert!((merged.as_slice()[0].relevance_score - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn first_occurrence_wins_even_with_lower_score() {
        let input = vec![
            scored("https://a.com/story", 0.1, 0, now()),
            scored("https://a.com/story", 0.95, 1, now()),
        ];
        let merged = merge_at(input, MergePolicy::General, 10, now());
        assert_eq!(merged.len(), 1);
        assert!((merged.as_slice()[0].relevance_score - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn canonically_equal_urls_are_duplicates() {
        let input = vec![
            scored("https://www.a.com/story/?utm_source=x", 0.5, 0, now()),
            scored("https://a.com/story", 0.5, 1, now()),
            scored("https://a.com/story/amp", 0.5, 2, now()),
        ];
        let merged = merge_at(input, MergePolicy::General, 10, now());
        assert_eq!(urls(&merged), vec!["https://www.a.com/story/?utm_source=x"]);
    }

    #[test]
    fn location_policy_prefers_relevance_at_equal_time() {
        let input = vec![
            scored("https://b.com", 0.6, 0, now()),
            scored("https://a.com", 0.9, 0, now()),
        ];
        let merged = merge_at(input, MergePolicy::LocationSpecific, 10, now());
        assert_eq!(urls(&merged), vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn recency_breaks_equal_relevance() {
        let old = now() - chrono::Duration::days(3650);
        let input = vec![
            scored("https://old.com", 0.5, 0, old),
            scored("https://new.com", 0.5, 0, now()),
        ];
        let merged = merge_at(input, MergePolicy::General, 10, now());
        assert_eq!(urls(&merged), vec!["https://new.com", "https://old.com"]);
    }

    #[test]
    fn policy_weights() {
        assert_eq!(MergePolicy::General.weights(), (0.7, 0.3));
        assert_eq!(MergePolicy::LocationSpecific.weights(), (0.8, 0.2));
        assert_eq!(MergePolicy::for_location(None), MergePolicy::General);
    }

    #[test]
    fn combined_key_formula() {
        let result = scored("https://a.com", 0.5, 0, now());
        let key = combined_key(&result, MergePolicy::General, now());
        assert!((key - (0.35 + 0.3)).abs() < 1e-12);
    }

    #[test]
    fn ties_break_on_strategy_then_input_order() {
        let input = vec![
            scored("https://c.com", 0.5, 2, now()),
            scored("https://a.com", 0.5, 0, now()),
            scored("https://b.com", 0.5, 0, now()),
        ];
        let merged = merge_at(input, MergePolicy::General, 10, now());
        assert_eq!(urls(&merged), vec!["https://a.com", "https://b.com", "https://c.com"]);
    }

    #[test]
    fn truncates_to_cap() {
        let input: Vec<ScoredResult> = (0..20)
            .map(|i| scored(&format!("https://example{i}.com"), 0.5, 0, now()))
            .collect();
        let merged = merge_at(input, MergePolicy::General, 5, now());
        assert_eq!(merged.len(), 5);
    }

    #[test]
    fn output_never_longer_than_input_or_cap() {
        let input = vec![
            scored("https://a.com", 0.2, 0, now()),
            scored("https://a.com", 0.4, 1, now()),
            scored("https://b.com", 0.6, 1, now()),
        ];
        let merged = merge_at(input, MergePolicy::General, 10, now());
        assert_eq!(merged.len(), 2);
        let merged = merge_at(Vec::new(), MergePolicy::General, 0, now());
        assert!(merged.is_empty());
    }

    #[test]
    fn output_urls_are_unique() {
        let input: Vec<ScoredResult> = (0..30)
            .map(|i| {
                let url = format!("https://dup{}.com/x", i % 7);
                scored(&url, 0.1 * (i % 10) as f64, i % 4, now())
            })
            .collect();
        let merged = merge_at(input, MergePolicy::LocationSpecific, 100, now());
        let mut seen = HashSet::new();
        for result in merged.iter() {
            assert!(seen.insert(canonical_url(&result.item.url)));
        }
        assert_eq!(merged.len(), 7);
    }

    #[test]
    fn zero_cap_yields_empty() {
        let input = vec![scored("https://a.com", 1.0, 0, now())];
        let merged = merge_at(input, MergePolicy::General, 0, now());
        assert!(merged.is_empty());
    }
}
