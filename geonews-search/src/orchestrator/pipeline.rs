//! End-to-end news search: detect, plan, fan out, score, merge.
//!
//! # Pipeline
//!
//! 1. Resolve the location from the caller's hint, else detect it in the query
//! 2. Plan up to four strategy queries
//! 3. Fan out to the provider concurrently; failed strategies contribute nothing
//! 4. Fail only if every strategy failed
//! 5. Score each hit for location relevance
//! 6. Dedup by canonical URL, rank by relevance and recency, truncate

use crate::catalog::{LocationCatalog, LocationDescriptor};
use crate::config::SearchConfig;
use crate::detect::{detect, resolve_hint};
use crate::error::SearchError;
use crate::planner::plan;
use crate::provider::NewsSearchProvider;
use crate::types::RankedResultSet;

use super::fanout;
use super::merge::{merge, MergePolicy};
use super::scoring::score_hits;

/// A caller's search request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsQuery {
    /// Free-text query, e.g. `"Mumbai traffic today"`.
    pub query: String,
    /// Optional place the caller already knows about (catalog key or name).
    pub location_hint: Option<String>,
    /// Result count; `None` uses [`SearchConfig::max_results`].
    pub limit: Option<usize>,
}

impl NewsQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_location_hint(mut self, hint: impl Into<String>) -> Self {
        self.location_hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// What a search produced, including how it got there.
#[derive(Debug, Clone)]
pub struct NewsSearchOutcome {
    /// Location the search was targeted at, if any.
    pub location: Option<&'static LocationDescriptor>,
    /// The strategy queries that were issued.
    pub strategies: Vec<String>,
    /// Number of strategies whose provider call failed.
    pub failed_strategies: usize,
    pub results: RankedResultSet,
}

/// Location-aware news search over a [`NewsSearchProvider`].
#[derive(Debug, Clone)]
pub struct NewsSearch<P> {
    provider: P,
    catalog: &'static LocationCatalog,
    config: SearchConfig,
}

impl<P: NewsSearchProvider> NewsSearch<P> {
    /// Search with the built-in catalog.
    pub fn new(provider: P, config: SearchConfig) -> Self {
        Self {
            provider,
            catalog: LocationCatalog::builtin(),
            config,
        }
    }

    /// Swap in another catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: &'static LocationCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'static LocationCatalog {
        self.catalog
    }

    /// Run the full pipeline for one request.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Config`] if the configuration is invalid
    /// - [`SearchError::InvalidQuery`] for a blank query or a zero limit
    /// - [`SearchError::AllStrategiesFailed`] if every provider call failed
    pub async fn search(&self, request: &NewsQuery) -> Result<NewsSearchOutcome, SearchError> {
        self.config.validate()?;

        let query = request.query.trim();
        if query.is_empty() {
            return Err(SearchError::InvalidQuery("query is empty".into()));
        }
        let limit = request.limit.unwrap_or(self.config.max_results);
        if limit == 0 {
            return Err(SearchError::InvalidQuery("limit must be greater than 0".into()));
        }

        let location = request
            .location_hint
            .as_deref()
            .and_then(|hint| resolve_hint(self.catalog, hint))
            .or_else(|| detect(self.catalog, query));

        let strategies = plan(query, location);
        tracing::trace!(query, ?strategies, "planned strategies");
        tracing::debug!(
            location = location.map(|l| l.key),
            strategies = strategies.len(),
            limit,
            "news search started"
        );

        let report =
            fanout::execute(&self.provider, &strategies, location, limit, &self.config).await;
        if report.all_failed() {
            return Err(SearchError::AllStrategiesFailed(report.failure_summary()));
        }

        let failed_strategies = report.failures.len();
        let hit_count = report.hits.len();
        let scored = score_hits(report.hits, location);
        let results = merge(scored, MergePolicy::for_location(location), limit);

        tracing::debug!(
            hits = hit_count,
            ranked = results.len(),
            failed_strategies,
            "news search finished"
        );

        Ok(NewsSearchOutcome {
            location,
            strategies,
            failed_strategies,
            results,
        })
    }
}
