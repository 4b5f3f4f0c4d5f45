//! Error types for the geonews-search crate.
//!
//! Messages are stable and safe to surface to API callers. Provider keys
//! and request bodies never appear in them.

/// Errors that can occur while planning, fetching or describing news results.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Every planned strategy failed, so there is nothing to rank.
    #[error("all search strategies failed: {0}")]
    AllStrategiesFailed(String),

    /// A provider or page request exceeded its time budget.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// An HTTP request to an external service failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The caller supplied an unusable query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The summarisation service returned no usable text.
    #[error("summarize error: {0}")]
    Summarize(String),
}

impl SearchError {
    /// Map a transport error, keeping timeouts distinguishable.
    pub(crate) fn from_reqwest(context: &str, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(format!("{context}: {err}"))
        } else {
            Self::Http(format!("{context}: {err}"))
        }
    }
}

/// Convenience type alias for geonews-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
