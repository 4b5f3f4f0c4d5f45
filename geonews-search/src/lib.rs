//! # geonews-search
//!
//! Location-aware news search over a neural search provider.
//!
//! A free-text query such as `"Mumbai traffic today"` is matched against a
//! static catalog of places, expanded into up to four strategy queries,
//! fanned out to the provider concurrently, scored for location relevance,
//! deduplicated by canonical URL and ranked by relevance and recency.
//!
//! ## Design
//!
//! - Static location catalog; no locking, entries borrowed for `'static`
//! - Provider behind the [`NewsSearchProvider`] trait; Exa is built in
//! - Strategy failures are isolated: a search fails only when all fail
//! - Optional enrichment: article page extraction and model summaries
//!
//! ## Security
//!
//! - API keys are never logged or included in error messages
//! - Query text is logged only at trace level

pub mod catalog;
pub mod config;
pub mod content;
pub mod detect;
pub mod enrich;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod planner;
pub mod provider;
pub mod providers;
pub mod summarize;
pub mod types;

pub use catalog::{LocationCatalog, LocationDescriptor};
pub use config::SearchConfig;
pub use content::PageFetcher;
pub use enrich::enrich;
pub use error::{Result, SearchError};
pub use orchestrator::pipeline::{NewsQuery, NewsSearch, NewsSearchOutcome};
pub use provider::{NewsSearchProvider, ProviderQuery};
pub use providers::ExaProvider;
pub use summarize::Summarizer;
pub use types::{NewsArticle, PageContent, RankedResultSet, ScoredResult, SearchResultItem};

/// Run one location-aware search against Exa with the given key.
///
/// Convenience wrapper that builds an [`ExaProvider`] and a [`NewsSearch`]
/// for a single request. Long-lived callers should build a [`NewsSearch`]
/// once and reuse it.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an empty key or invalid config,
/// [`SearchError::InvalidQuery`] for a blank query, or
/// [`SearchError::AllStrategiesFailed`] if no strategy produced results.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> geonews_search::Result<()> {
/// let config = geonews_search::SearchConfig::default();
/// let outcome = geonews_search::search("Mumbai traffic today", "exa-key", &config).await?;
/// for result in outcome.results.iter() {
///     println!("{:.2} {}", result.relevance_score, result.item.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(
    query: &str,
    api_key: &str,
    config: &SearchConfig,
) -> Result<NewsSearchOutcome> {
    config.validate()?;
    let provider = ExaProvider::new(api_key, config.timeout_seconds, config.max_text_chars)?;
    NewsSearch::new(provider, config.clone())
        .search(&NewsQuery::new(query))
        .await
}

/// Fetch and extract readable text content from a news article page.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the page cannot be fetched, or
/// [`SearchError::Parse`] if no article text can be extracted.
pub async fn fetch_page_content(url: &str, config: &SearchConfig) -> Result<PageContent> {
    PageFetcher::new(config)?.fetch(url).await
}
