//! Concurrent strategy fan-out with per-strategy failure isolation.
//!
//! Every planned query is sent at once and the fan-out waits for all of
//! them to settle. A failing strategy is logged and contributes nothing;
//! it never cancels or fails its siblings. There are no retries.

use chrono::{DateTime, TimeDelta, Utc};

use crate::catalog::{editorial_domains, LocationDescriptor};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::provider::{NewsSearchProvider, ProviderQuery};
use crate::types::SearchResultItem;

/// Extra results requested per strategy to cover later dedup and filtering.
pub const OVERFETCH: usize = 5;

/// A provider hit tagged with the strategy that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyHit {
    pub strategy_index: usize,
    pub item: SearchResultItem,
}

/// A strategy whose provider call failed.
#[derive(Debug)]
pub struct StrategyFailure {
    pub strategy_index: usize,
    pub query: String,
    pub error: SearchError,
}

/// Everything the fan-out produced, in strategy order.
#[derive(Debug, Default)]
pub struct FanoutReport {
    /// Flattened hits, not yet scored or deduplicated.
    pub hits: Vec<StrategyHit>,
    pub failures: Vec<StrategyFailure>,
    /// Number of strategies issued.
    pub attempted: usize,
}

impl FanoutReport {
    /// `true` when at least one strategy ran and none succeeded.
    pub fn all_failed(&self) -> bool {
        self.attempted > 0 && self.failures.len() == self.attempted
    }

    /// `"#i (query): error"` for each failure, joined with `"; "`.
    pub fn failure_summary(&self) -> String {
        self.failures
            .iter()
            .map(|f| format!("#{} ({}): {}", f.strategy_index, f.query, f.error))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Results to request from each of `strategies` calls to end up with `target_count`.
///
/// `ceil(target_count / strategies) + OVERFETCH`, or 0 when there are no strategies.
pub fn per_request_cap(target_count: usize, strategies: usize) -> usize {
    if strategies == 0 {
        return 0;
    }
    target_count.div_ceil(strategies) + OVERFETCH
}

/// Domain allow-list for a location.
///
/// The country's editorial outlets followed by the location's own preferred
/// outlets, without duplicates. `None` (no restriction) when there is no
/// location or the combined list is empty.
pub fn allowed_domains(location: Option<&LocationDescriptor>) -> Option<Vec<String>> {
    let location = location?;
    let mut domains: Vec<String> = Vec::new();
    for domain in editorial_domains(location.country)
        .iter()
        .chain(location.preferred_source_domains)
    {
        if !domains.iter().any(|d| d == domain) {
            domains.push((*domain).to_owned());
        }
    }
    (!domains.is_empty()).then_some(domains)
}

/// `now` minus `lookback_days`, saturating at the earliest representable time.
pub fn published_floor(now: DateTime<Utc>, lookback_days: u32) -> DateTime<Utc> {
    TimeDelta::try_days(i64::from(lookback_days))
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Issue one provider call per query and wait for all of them to settle.
pub async fn execute<P: NewsSearchProvider>(
    provider: &P,
    queries: &[String],
    location: Option<&LocationDescriptor>,
    target_count: usize,
    config: &SearchConfig,
) -> FanoutReport {
    let num_results = per_request_cap(target_count, queries.len());
    let include_domains = allowed_domains(location);
    let published_after = published_floor(Utc::now(), config.lookback_days);

    let calls = queries.iter().enumerate().map(|(strategy_index, query)| {
        let request = ProviderQuery {
            query: query.clone(),
            num_results,
            published_after,
            include_domains: include_domains.clone(),
        };
        async move {
            let outcome = provider.search(&request).await;
            (strategy_index, request.query, outcome)
        }
    });

    let outcomes = futures::future::join_all(calls).await;

    let mut report = FanoutReport {
        attempted: outcomes.len(),
        ..FanoutReport::default()
    };

    for (strategy_index, query, outcome) in outcomes {
        match outcome {
            Ok(items) => {
                tracing::debug!(
                    provider = provider.name(),
                    strategy_index,
                    count = items.len(),
                    "strategy returned results"
                );
                report.hits.extend(items.into_iter().map(|item| StrategyHit {
                    strategy_index,
                    item,
                }));
            }
            Err(error) => {
                tracing::warn!(
                    provider = provider.name(),
                    strategy_index,
                    error = %error,
                    "strategy failed"
                );
                report.failures.push(StrategyFailure {
                    strategy_index,
                    query,
                    error,
                });
            }
        }
    }

    report
}
