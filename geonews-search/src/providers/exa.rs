//! Exa neural search backend.
//!
//! `POST {base}/search` with an `x-api-key` header. Article text and
//! highlights are requested inline so most results never need a page fetch.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::http;
use crate::provider::{NewsSearchProvider, ProviderQuery};
use crate::types::SearchResultItem;

/// Public Exa API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.exa.ai";

/// Sentences per highlight requested from the provider.
const HIGHLIGHT_SENTENCES: u32 = 3;

/// Exa search client.
#[derive(Debug, Clone)]
pub struct ExaProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    max_text_chars: usize,
}

impl ExaProvider {
    /// Create a client for the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an empty key, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        timeout_seconds: u64,
        max_text_chars: usize,
    ) -> Result<Self, SearchError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SearchError::Config("search provider api key is empty".into()));
        }
        Ok(Self {
            client: http::build_api_client(timeout_seconds)?,
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            max_text_chars,
        })
    }

    /// Point the client at another base URL (proxies, mock servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    fn build_body(&self, request: &ProviderQuery) -> ExaRequest {
        ExaRequest {
            query: request.query.clone(),
            num_results: request.num_results,
            start_published_date: request
                .published_after
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            include_domains: request.include_domains.clone(),
            contents: ExaContents {
                text: ExaTextOptions {
                    max_characters: self.max_text_chars,
                },
                highlights: ExaHighlightOptions {
                    num_sentences: HIGHLIGHT_SENTENCES,
                },
            },
        }
    }
}

impl NewsSearchProvider for ExaProvider {
    async fn search(&self, request: &ProviderQuery) -> Result<Vec<SearchResultItem>, SearchError> {
        tracing::trace!(query = %request.query, "Exa search");

        let body = self.build_body(request);
        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest("Exa request failed", &e))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Exa HTTP error: {e}")))?;

        let text = response
            .text()
            .await
            .map_err(|e| SearchError::from_reqwest("Exa response read failed", &e))?;

        tracing::trace!(bytes = text.len(), "Exa response received");

        parse_exa_response(&text, Utc::now())
    }

    fn name(&self) -> &'static str {
        "exa"
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaRequest {
    query: String,
    num_results: usize,
    start_published_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_domains: Option<Vec<String>>,
    contents: ExaContents,
}

#[derive(Debug, Serialize)]
struct ExaContents {
    text: ExaTextOptions,
    highlights: ExaHighlightOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaTextOptions {
    max_characters: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaHighlightOptions {
    num_sentences: u32,
}

#[derive(Debug, Deserialize)]
struct ExaResponse {
    #[serde(default)]
    results: Vec<ExaResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExaResult {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    published_date: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    highlights: Vec<String>,
    #[serde(default)]
    image: Option<String>,
}

/// Decode an Exa response body into validated items.
///
/// Records without a URL are dropped. A missing or unreadable publish date
/// becomes `fetched_at`. Blank optional strings become `None`.
pub(crate) fn parse_exa_response(
    body: &str,
    fetched_at: DateTime<Utc>,
) -> Result<Vec<SearchResultItem>, SearchError> {
    let response: ExaResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("invalid Exa response: {e}")))?;

    let items = response
        .results
        .into_iter()
        .filter_map(|raw| {
            let url = non_blank(raw.url)?;
            Some(SearchResultItem {
                title: non_blank(raw.title),
                published_at: raw
                    .published_date
                    .as_deref()
                    .and_then(parse_published_date)
                    .unwrap_or(fetched_at),
                author: non_blank(raw.author),
                body_text: non_blank(raw.text),
                highlights: raw
                    .highlights
                    .into_iter()
                    .map(|h| h.trim().to_owned())
                    .filter(|h| !h.is_empty())
                    .collect(),
                image_url: non_blank(raw.image),
                url,
            })
        })
        .collect();

    Ok(items)
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
fn parse_published_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
