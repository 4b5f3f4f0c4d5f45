//! Trait definition for pluggable news search backends.
//!
//! The pipeline only needs "run this query, give me validated items";
//! [`NewsSearchProvider`] is that seam. The production backend lives in
//! [`crate::providers`]; tests plug in scripted providers.

use chrono::{DateTime, Utc};

use crate::error::SearchError;
use crate::types::SearchResultItem;

/// One provider call as issued by the fanout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderQuery {
    /// The planned strategy string.
    pub query: String,
    /// How many results to ask for.
    pub num_results: usize,
    /// Publish-date floor.
    pub published_after: DateTime<Utc>,
    /// Restrict candidates to these domains. `None` means no restriction.
    pub include_domains: Option<Vec<String>>,
}

/// A news search backend.
///
/// Implementors own their transport, encoding and response validation.
/// All implementations must be `Send + Sync` for concurrent strategy calls.
pub trait NewsSearchProvider: Send + Sync {
    /// Run a single search and return validated items.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails, times out, or the
    /// response cannot be decoded.
    fn search(
        &self,
        request: &ProviderQuery,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResultItem>, SearchError>> + Send;

    /// Short provider name for logs.
    fn name(&self) -> &'static str;
}
