//! Integration tests for the news HTTP API.
//!
//! The search provider and chat model are wiremock servers; the API runs on
//! an auto-assigned localhost port and is driven with reqwest.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use geonews::config::{AppConfig, SecretRef, ServerConfig};
use geonews::server::{AppState, ErrorResponse, LocationSummary, NewsServer, SearchResponse};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn local_server() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_owned(),
        port: 0,
    }
}

/// Config pointing at `exa` with summaries and page fetches off.
fn config_for(exa: Option<&MockServer>) -> AppConfig {
    let mut config = AppConfig::default();
    config.summarizer.enabled = false;
    config.extraction.enabled = false;
    match exa {
        Some(exa) => {
            config.search.api_url = exa.uri();
            config.search.api_key = SecretRef::Literal {
                value: "test-key".to_owned(),
            };
        }
        None => config.search.api_key = SecretRef::None,
    }
    config
}

async fn start(config: &AppConfig) -> NewsServer {
    let state = AppState::from_config(config).unwrap();
    NewsServer::start(state, &local_server()).await.unwrap()
}

fn url(server: &NewsServer, route: &str) -> String {
    format!("http://{}{route}", server.addr())
}

async fn post_search(server: &NewsServer, body: serde_json::Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(url(server, "/api/news/search"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let server = start(&config_for(None)).await;
    let body: serde_json::Value = reqwest::get(url(&server, "/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn locations_lists_catalog() {
    let server = start(&config_for(None)).await;
    let locations: Vec<LocationSummary> = reqwest::get(url(&server, "/api/locations"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(locations.len() >= 10);
    assert!(locations.iter().any(|l| l.key == "mumbai" && l.country == "India"));
    assert!(locations.iter().any(|l| l.key == "london" && l.country == "UK"));
}

#[tokio::test]
async fn empty_query_is_bad_request() {
    let server = start(&config_for(None)).await;
    let response = post_search(&server, json!({ "query": "   " })).await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json().await.unwrap();
    assert!(body.error.contains("query"));
}

#[tokio::test]
async fn zero_limit_is_bad_request() {
    let server = start(&config_for(None)).await;
    let response = post_search(&server, json!({ "query": "rain", "limit": 0 })).await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn live_search_returns_ranked_articles() {
    let exa = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "url": "https://www.mid-day.com/mumbai/news/andheri-traffic",
                    "title": "Mumbai: Andheri traffic snarls after waterlogging",
                    "publishedDate": "2026-10-16T06:30:00.000Z",
                    "author": "Mid-day Desk",
                    "text": "Traffic in Andheri and Bandra crawled for hours.",
                    "image": "https://images.mid-day.com/andheri.jpg"
                },
                {
                    "url": "https://example.com/elsewhere",
                    "title": "Unrelated story",
                    "publishedDate": "2026-10-16T06:30:00.000Z",
                    "text": "Nothing about the city."
                }
            ]
        })))
        .mount(&exa)
        .await;

    let server = start(&config_for(Some(&exa))).await;
    let request = json!({ "query": "Mumbai traffic today", "limit": 5 });
    let response = post_search(&server, request).await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: SearchResponse = response.json().await.unwrap();
    assert!(!body.fallback);
    assert_eq!(body.count, 2);
    assert_eq!(body.results.len(), 2);
    assert_eq!(body.location.as_ref().map(|l| l.key.as_str()), Some("mumbai"));
    assert_eq!(body.strategies.len(), 4);

    let top = &body.results[0];
    assert_eq!(top.source, "mid-day.com");
    assert_eq!(top.author.as_deref(), Some("Mid-day Desk"));
    assert_eq!(top.image_url.as_deref(), Some("https://images.mid-day.com/andheri.jpg"));
    assert_eq!(top.description, "Traffic in Andheri and Bandra crawled for hours.");
    assert!(top.relevance_score > body.results[1].relevance_score);
}

#[tokio::test]
async fn articles_serialize_camel_case() {
    let exa = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "url": "https://a.com/1", "title": "One", "text": "Body." }]
        })))
        .mount(&exa)
        .await;

    let server = start(&config_for(Some(&exa))).await;
    let body: serde_json::Value = post_search(&server, json!({ "query": "election" }))
        .await
        .json()
        .await
        .unwrap();
    let article = &body["results"][0];
    assert!(article.get("publishedAt").is_some());
    assert!(article.get("relevanceScore").is_some());
    assert!(body.get("location").is_none());
}

#[tokio::test]
async fn location_field_overrides_detection() {
    let exa = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&exa)
        .await;

    let server = start(&config_for(Some(&exa))).await;
    let request = json!({ "query": "rent prices", "location": "london" });
    let body: SearchResponse = post_search(&server, request)
        .await
        .json()
        .await
        .unwrap();
    assert!(!body.fallback);
    assert_eq!(body.count, 0);
    assert_eq!(body.location.map(|l| l.key), Some("london".to_owned()));
}

#[tokio::test]
async fn provider_outage_serves_sample_data() {
    let exa = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&exa)
        .await;

    let server = start(&config_for(Some(&exa))).await;
    let response = post_search(&server, json!({ "query": "Delhi air quality", "limit": 3 })).await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: SearchResponse = response.json().await.unwrap();
    assert!(body.fallback);
    assert_eq!(body.count, 3);
    assert!(body.strategies.is_empty());
    assert_eq!(body.location.map(|l| l.key), Some("delhi".to_owned()));
    assert!(body.results.iter().all(|a| a.title.contains("Delhi")));
}

#[tokio::test]
async fn missing_provider_key_serves_sample_data() {
    let server = start(&config_for(None)).await;
    let body: SearchResponse = post_search(&server, json!({ "query": "weather" }))
        .await
        .json()
        .await
        .unwrap();
    assert!(body.fallback);
    assert!(body.count > 0);
    assert!(body.location.is_none());
}

#[tokio::test]
async fn summarizer_descriptions_are_used_when_configured() {
    let exa = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "url": "https://a.com/1", "title": "One", "text": "Long provider body." }]
        })))
        .mount(&exa)
        .await;
    let model = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Model summary." } }]
        })))
        .mount(&model)
        .await;

    let mut config = config_for(Some(&exa));
    config.summarizer.enabled = true;
    config.summarizer.api_url = model.uri();
    config.summarizer.api_key = SecretRef::None;

    let server = start(&config).await;
    let body: SearchResponse = post_search(&server, json!({ "query": "election" }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body.results[0].description, "Model summary.");
}
