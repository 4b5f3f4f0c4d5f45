//! HTTP API for location-aware news search.
//!
//! ## Endpoints
//!
//! - `POST /api/news/search` — search, rank and describe news for a query
//! - `GET /api/locations` — places the service knows about
//! - `GET /health` — liveness

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use geonews_search::detect::{detect, resolve_hint};
use geonews_search::{
    ExaProvider, LocationCatalog, LocationDescriptor, NewsArticle, NewsQuery, NewsSearch,
    PageFetcher, SearchConfig, SearchError, Summarizer, enrich,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{Instrument, info};
use uuid::Uuid;

use crate::config::{AppConfig, ServerConfig};
use crate::error::{AppError, Result};
use crate::sample::sample_articles;

/// Largest `limit` a caller may ask for.
pub const MAX_LIMIT: usize = 50;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body of `POST /api/news/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    /// Catalog key or place name; overrides detection from the query.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Response of `POST /api/news/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<NewsArticle>,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationSummary>,
    /// Strategy queries issued; empty for fallback responses.
    #[serde(default)]
    pub strategies: Vec<String>,
    /// `true` when the results are static sample data.
    pub fallback: bool,
}

/// Public view of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSummary {
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub country: String,
}

impl From<&LocationDescriptor> for LocationSummary {
    fn from(location: &LocationDescriptor) -> Self {
        Self {
            key: location.key.to_owned(),
            name: location.primary_name.to_owned(),
            region: location.region.map(str::to_owned),
            country: location.country.to_owned(),
        }
    }
}

/// Error body for 4xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// Services shared by all handlers. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no provider key is configured; searches then serve samples.
    search: Option<Arc<NewsSearch<ExaProvider>>>,
    summarizer: Option<Arc<Summarizer>>,
    fetcher: Option<Arc<PageFetcher>>,
    search_config: SearchConfig,
}

impl AppState {
    /// Build the search, summariser and page-fetch clients from `config`.
    ///
    /// A missing provider or summariser key disables that service with a
    /// warning instead of failing startup.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid settings (zero limits, empty model name)
    /// or if an HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let search_config = config.search_config();
        search_config.validate()?;

        let search = match config.search.api_key.resolve() {
            Ok(Some(api_key)) => {
                let provider = ExaProvider::new(
                    api_key,
                    search_config.timeout_seconds,
                    search_config.max_text_chars,
                )?
                .with_base_url(config.search.api_url.as_str());
                Some(Arc::new(NewsSearch::new(provider, search_config.clone())))
            }
            Ok(None) => {
                tracing::warn!("no search provider key configured, serving sample data");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "search provider key unavailable, serving sample data");
                None
            }
        };

        let summarizer = if config.summarizer.enabled {
            match config.summarizer.api_key.resolve() {
                Ok(api_key) => Some(Arc::new(Summarizer::new(
                    config.summarizer.api_url.as_str(),
                    config.summarizer.api_model.as_str(),
                    api_key.unwrap_or_default(),
                    config.summarizer.timeout_seconds,
                )?)),
                Err(e) => {
                    tracing::warn!(error = %e, "summarizer key unavailable, using excerpts");
                    None
                }
            }
        } else {
            None
        };

        let fetcher = if config.extraction.enabled {
            let fetch_config = SearchConfig {
                timeout_seconds: config.extraction.timeout_seconds,
                ..search_config.clone()
            };
            Some(Arc::new(PageFetcher::new(&fetch_config)?))
        } else {
            None
        };

        Ok(Self {
            search,
            summarizer,
            fetcher,
            search_config,
        })
    }

    /// Whether live search is available.
    pub fn has_search(&self) -> bool {
        self.search.is_some()
    }

    fn catalog(&self) -> &'static LocationCatalog {
        self.search
            .as_ref()
            .map_or_else(LocationCatalog::builtin, |search| search.catalog())
    }
}

/// The API routes over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/news/search", post(handle_search))
        .route("/api/locations", get(handle_locations))
        .route("/health", get(handle_health))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// NewsServer
// ---------------------------------------------------------------------------

/// The news API running in a background task.
pub struct NewsServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl NewsServer {
    /// Bind to `{config.host}:{config.port}` (port `0` auto-assigns) and
    /// start serving.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Server`] if the TCP listener cannot bind.
    pub async fn start(state: AppState, config: &ServerConfig) -> Result<Self> {
        let app = router(state);

        let bind_addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| AppError::Server(format!("bind {bind_addr} failed: {e}")))?;
        let addr = listener
            .local_addr()
            .map_err(|e| AppError::Server(format!("failed to get local addr: {e}")))?;

        info!("news API listening on http://{addr}");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("news API server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for NewsServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// `POST /api/news/search`.
async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("news_search", %request_id);
    run_search(state, request).instrument(span).await
}

async fn run_search(state: AppState, request: SearchRequest) -> Response {
    let query = request.query.trim();
    if query.is_empty() {
        return bad_request("query is required");
    }
    let limit = request
        .limit
        .unwrap_or(state.search_config.max_results)
        .min(MAX_LIMIT);
    if limit == 0 {
        return bad_request("limit must be greater than 0");
    }

    let Some(search) = state.search.as_deref() else {
        return fallback_response(&state, query, request.location.as_deref(), limit);
    };

    let mut news_query = NewsQuery::new(query).with_limit(limit);
    if let Some(hint) = request.location.as_deref().filter(|h| !h.trim().is_empty()) {
        news_query = news_query.with_location_hint(hint);
    }

    let outcome = match search.search(&news_query).await {
        Ok(outcome) => outcome,
        Err(SearchError::InvalidQuery(message)) => return bad_request(&message),
        Err(e) => {
            tracing::warn!(error = %e, "live search failed, serving sample data");
            return fallback_response(&state, query, request.location.as_deref(), limit);
        }
    };

    let results = enrich(
        &outcome.results,
        outcome.location,
        state.summarizer.as_deref(),
        state.fetcher.as_deref(),
        search.config(),
    )
    .await;

    info!(
        location = outcome.location.map(|l| l.key),
        count = results.len(),
        failed_strategies = outcome.failed_strategies,
        "news search served"
    );

    Json(SearchResponse {
        count: results.len(),
        results,
        location: outcome.location.map(LocationSummary::from),
        strategies: outcome.strategies,
        fallback: false,
    })
    .into_response()
}

/// `GET /api/locations`.
async fn handle_locations(State(state): State<AppState>) -> Json<Vec<LocationSummary>> {
    Json(
        state
            .catalog()
            .entries()
            .iter()
            .map(LocationSummary::from)
            .collect(),
    )
}

/// `GET /health`.
async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_owned(),
        }),
    )
        .into_response()
}

fn fallback_response(state: &AppState, query: &str, hint: Option<&str>, limit: usize) -> Response {
    let catalog = state.catalog();
    let location = hint
        .and_then(|hint| resolve_hint(catalog, hint))
        .or_else(|| detect(catalog, query));
    let results = sample_articles(location, limit);

    Json(SearchResponse {
        count: results.len(),
        results,
        location: location.map(LocationSummary::from),
        strategies: Vec::new(),
        fallback: true,
    })
    .into_response()
}
