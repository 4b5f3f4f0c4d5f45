//! Static articles served when live search is unavailable.
//!
//! Responses built from these carry `fallback: true`, so clients can tell
//! them apart from real results.

use chrono::{Duration, Utc};
use geonews_search::{LocationDescriptor, NewsArticle};

/// Source name reported for every sample article.
pub const SAMPLE_SOURCE: &str = "geonews sample";

struct SampleStory {
    slug: &'static str,
    topic: &'static str,
    description: &'static str,
}

const STORIES: &[SampleStory] = &[
    SampleStory {
        slug: "transport",
        topic: "Commuter services",
        description: "Live news is unavailable right now. Check local transport operators for service changes and delays.",
    },
    SampleStory {
        slug: "weather",
        topic: "Weather outlook",
        description: "Live news is unavailable right now. Check the national weather service for current forecasts and alerts.",
    },
    SampleStory {
        slug: "civic",
        topic: "Council and civic updates",
        description: "Live news is unavailable right now. Local government sites publish notices on roadworks, budgets and public meetings.",
    },
    SampleStory {
        slug: "business",
        topic: "Business and markets",
        description: "Live news is unavailable right now. Market summaries resume once the search service is reachable again.",
    },
    SampleStory {
        slug: "culture",
        topic: "Events and culture",
        description: "Live news is unavailable right now. Listings for concerts, exhibitions and festivals will return shortly.",
    },
];

/// Up to `limit` sample articles, titled for `location` when one is known.
pub fn sample_articles(location: Option<&LocationDescriptor>, limit: usize) -> Vec<NewsArticle> {
    let now = Utc::now();
    let place = location.map(|l| l.primary_name);
    let key = location.map_or("general", |l| l.key);

    STORIES
        .iter()
        .take(limit)
        .zip(0_i64..)
        .map(|(story, hours_ago)| NewsArticle {
            title: match place {
                Some(place) => format!("{}: {place}", story.topic),
                None => story.topic.to_owned(),
            },
            url: format!("https://geonews.invalid/sample/{}/{}", key.replace(' ', "-"), story.slug),
            description: story.description.to_owned(),
            published_at: now - Duration::hours(hours_ago),
            author: None,
            image_url: None,
            source: SAMPLE_SOURCE.to_owned(),
            relevance_score: 0.0,
        })
        .collect()
}
