//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls result counts, timeouts, the publish-date
//! window and how much text is pulled for each article.

use crate::error::SearchError;

/// Longest publish-date window accepted, in days.
pub const MAX_LOOKBACK_DAYS: u32 = 3650;

/// Configuration for a news search operation.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Results returned after dedup and ranking when the caller gives no limit.
    pub max_results: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Only articles published within this many days are requested.
    pub lookback_days: u32,
    /// Snippets shorter than this trigger a page fetch during enrichment.
    pub min_snippet_chars: usize,
    /// Maximum article characters requested from the provider and kept from pages.
    pub max_text_chars: usize,
    /// Custom User-Agent for page fetches. If `None`, rotates through a
    /// built-in list of browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            timeout_seconds: 8,
            lookback_days: 7,
            min_snippet_chars: 200,
            max_text_chars: 2000,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - `lookback_days` must be between 1 and [`MAX_LOOKBACK_DAYS`]
    /// - `max_text_chars` must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.lookback_days == 0 {
            return Err(SearchError::Config(
                "lookback_days must be greater than 0".into(),
            ));
        }
        if self.lookback_days > MAX_LOOKBACK_DAYS {
            return Err(SearchError::Config(format!(
                "lookback_days must be at most {MAX_LOOKBACK_DAYS}"
            )));
        }
        if self.max_text_chars == 0 {
            return Err(SearchError::Config(
                "max_text_chars must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
