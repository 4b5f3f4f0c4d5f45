//! Query planning: one user query becomes several provider queries.
//!
//! Each planned string is a *strategy*. With a known place the strategies
//! approach it from different angles (name + region, neighbourhoods,
//! surrounding towns, alternate names); without one they ask for recent
//! and breaking coverage of the bare topic.

use crate::catalog::LocationDescriptor;

/// Upper bound on strategies per request.
pub const MAX_STRATEGIES: usize = 4;

/// Tokens that carry no topic and are stripped before planning.
const FILLER_TOKENS: &[&str] = &["news", "latest", "today", "breaking"];

/// Plan the provider queries for `query`.
///
/// Never returns more than [`MAX_STRATEGIES`] entries.
pub fn plan(query: &str, location: Option<&LocationDescriptor>) -> Vec<String> {
    let base = base_term(query);

    let mut queries = match location {
        Some(location) => located_strategies(&base, location),
        None => vec![
            join_parts(&[&base, "latest news"]),
            join_parts(&[&base, "breaking news today"]),
        ],
    };

    queries.truncate(MAX_STRATEGIES);
    queries
}

/// The query with filler tokens removed and whitespace collapsed.
pub fn base_term(query: &str) -> String {
    query
        .split_whitespace()
        .filter(|token| !FILLER_TOKENS.contains(&token.to_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn located_strategies(base: &str, location: &LocationDescriptor) -> Vec<String> {
    let name = location.primary_name;
    let region = location.region.unwrap_or_default();
    let mut queries = vec![join_parts(&[base, name, region, "news"])];

    if !location.local_keywords.is_empty() {
        let mut parts = vec![base, name];
        parts.extend(location.local_keywords.iter().take(3).copied());
        queries.push(join_parts(&parts));
    }

    if !location.nearby_place_names.is_empty() {
        let mut parts = vec![base, name];
        parts.extend(location.nearby_place_names.iter().take(2).copied());
        parts.push("region");
        queries.push(join_parts(&parts));
    }

    for &alias in location.aliases {
        queries.push(join_parts(&[base, alias, "news"]));
    }

    queries
}

/// Join non-empty parts with single spaces.
fn join_parts(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
