//! Turn ranked results into reader-facing [`NewsArticle`]s.
//!
//! Each result gets its best available text (provider snippet, or the
//! fetched page when the snippet is thin) and a short description. All
//! results are enriched concurrently; output order matches the ranking.

use futures::future::join_all;

use crate::catalog::LocationDescriptor;
use crate::config::SearchConfig;
use crate::content::PageFetcher;
use crate::orchestrator::url_normalize::source_name;
use crate::summarize::{excerpt, Summarizer};
use crate::types::{NewsArticle, RankedResultSet, ScoredResult};

/// Build articles for every ranked result.
///
/// Never fails: a failed page fetch keeps the snippet, a failed or missing
/// summariser yields an excerpt.
pub async fn enrich(
    results: &RankedResultSet,
    location: Option<&LocationDescriptor>,
    summarizer: Option<&Summarizer>,
    fetcher: Option<&PageFetcher>,
    config: &SearchConfig,
) -> Vec<NewsArticle> {
    let label = location.map(LocationDescriptor::label);
    let label = label.as_deref();

    join_all(
        results
            .iter()
            .map(|result| enrich_one(result, label, summarizer, fetcher, config)),
    )
    .await
}

async fn enrich_one(
    result: &ScoredResult,
    location_label: Option<&str>,
    summarizer: Option<&Summarizer>,
    fetcher: Option<&PageFetcher>,
    config: &SearchConfig,
) -> NewsArticle {
    let item = &result.item;
    let mut content = item.snippet();
    let mut page_title = None;

    if content.chars().count() < config.min_snippet_chars {
        if let Some(fetcher) = fetcher {
            match fetcher.fetch(&item.url).await {
                Ok(page) if page.text.chars().count() > content.chars().count() => {
                    content = page.text;
                    page_title = Some(page.title).filter(|t| !t.is_empty());
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(
                        url = %item.url,
                        error = %e,
                        "page fetch failed, keeping snippet"
                    );
                }
            }
        }
    }

    let source = source_name(&item.url).unwrap_or_default();
    let title = item
        .title
        .clone()
        .or(page_title)
        .unwrap_or_else(|| source.clone());

    let description = match summarizer {
        Some(summarizer) if !content.is_empty() => {
            summarizer
                .describe_or_fallback(&title, &content, location_label)
                .await
        }
        _ => excerpt(&content),
    };

    NewsArticle {
        title,
        url: item.url.clone(),
        description,
        published_at: item.published_at,
        author: item.author.clone(),
        image_url: item.image_url.clone(),
        source,
        relevance_score: result.relevance_score,
    }
}
