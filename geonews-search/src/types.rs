//! Core types for search results as they move through the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news hit returned by the search provider, after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Headline, when the provider knows it.
    pub title: Option<String>,
    /// Article URL. Identity of the result.
    pub url: String,
    /// Publication time. Falls back to fetch time when the provider omits it.
    pub published_at: DateTime<Utc>,
    /// Byline, if any.
    pub author: Option<String>,
    /// Article text as returned by the provider (possibly truncated).
    pub body_text: Option<String>,
    /// Key sentences picked by the provider.
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Lead image.
    pub image_url: Option<String>,
}

impl SearchResultItem {
    /// Minimal item with only a URL and publish time set.
    pub fn new(url: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        Self {
            title: None,
            url: url.into(),
            published_at,
            author: None,
            body_text: None,
            highlights: Vec::new(),
            image_url: None,
        }
    }

    /// Best available text: body text, else the joined highlights.
    pub fn snippet(&self) -> String {
        match self.body_text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text.to_owned(),
            _ => self.highlights.join(" ").trim().to_owned(),
        }
    }
}

/// A search hit tagged with its location relevance and originating strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub item: SearchResultItem,
    /// Location relevance in `[0, 1]`.
    pub relevance_score: f64,
    /// Index of the planned query that produced this hit.
    pub strategy_index: usize,
}

/// Deduplicated, ranked results for one request. No two entries share a URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResultSet {
    results: Vec<ScoredResult>,
}

impl RankedResultSet {
    /// Only the merger builds ranked sets, so uniqueness holds by construction.
    pub(crate) fn from_ranked(results: Vec<ScoredResult>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredResult> {
        self.results.iter()
    }

    pub fn as_slice(&self) -> &[ScoredResult] {
        &self.results
    }

    pub fn into_vec(self) -> Vec<ScoredResult> {
        self.results
    }
}

impl IntoIterator for RankedResultSet {
    type Item = ScoredResult;
    type IntoIter = std::vec::IntoIter<ScoredResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

/// Extracted readable content from a fetched web page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    /// The URL that was fetched.
    pub url: String,
    /// The page title extracted from HTML.
    pub title: String,
    /// Cleaned, readable text content with HTML boilerplate stripped.
    pub text: String,
    /// Number of words in the extracted text.
    pub word_count: usize,
}

/// A ranked result ready to show to a reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    /// Short description (model summary or truncated text).
    pub description: String,
    pub published_at: DateTime<Utc>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    /// Host name of the publisher, without a leading `www.`.
    pub source: String,
    pub relevance_score: f64,
}
