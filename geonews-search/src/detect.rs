//! Place detection from free-text queries.
//!
//! Matching is plain lowercase substring search against the catalog, in
//! catalog order:
//!
//! 1. primary name or any alias present → that entry
//! 2. otherwise, at least [`MIN_KEYWORD_HITS`] local keywords present → that entry
//!
//! Two entries can both qualify in step 2. The earlier catalog entry wins;
//! there is no closer-match tie-break.

use crate::catalog::{LocationCatalog, LocationDescriptor};

/// Local keywords needed before a query is attributed to a place by keywords alone.
pub const MIN_KEYWORD_HITS: usize = 2;

/// Detect the place a query is about, if any.
pub fn detect(
    catalog: &LocationCatalog,
    query: &str,
) -> Option<&'static LocationDescriptor> {
    let query = query.to_lowercase();
    if query.trim().is_empty() {
        return None;
    }

    let named = catalog.entries().iter().find(|entry| {
        query.contains(&entry.primary_name.to_lowercase())
            || entry.aliases.iter().any(|alias| query.contains(alias))
    });
    if named.is_some() {
        return named;
    }

    catalog
        .entries()
        .iter()
        .find(|entry| keyword_hits(entry, &query) >= MIN_KEYWORD_HITS)
}

/// Resolve a caller-supplied location hint.
///
/// The hint is tried as a catalog key first (`"new york"`), then as free
/// text (`"Bombay, India"`).
pub fn resolve_hint(
    catalog: &LocationCatalog,
    hint: &str,
) -> Option<&'static LocationDescriptor> {
    catalog.lookup(hint).or_else(|| detect(catalog, hint))
}

/// Number of the entry's local keywords found in an already-lowercased query.
fn keyword_hits(entry: &LocationDescriptor, lowered_query: &str) -> usize {
    entry
        .local_keywords
        .iter()
        .filter(|keyword| lowered_query.contains(*keyword))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> &'static LocationCatalog {
        LocationCatalog::builtin()
    }

    fn detected_key(query: &str) -> Option<&'static str> {
        detect(builtin(), query).map(|entry| entry.key)
    }

    #[test]
    fn mumbai_traffic_today_detects_mumbai() {
        assert_eq!(detected_key("Mumbai traffic today"), Some("mumbai"));
    }

    #[test]
    fn alias_detects_entry() {
        assert_eq!(detected_key("flooding in Bombay"), Some("mumbai"));
        assert_eq!(detected_key("Calcutta tram service"), Some("kolkata"));
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(detected_key("SAN FRANCISCO housing"), Some("san francisco"));
        assert_eq!(detected_key("nyc rent guidelines"), Some("new york"));
        assert_eq!(detected_key("NYC RENT"), Some("new york"));
    }

    #[test]
    fn every_primary_name_and_alias_is_detected() {
        for entry in builtin().entries() {
            let by_name = format!("what happened in {} this week", entry.primary_name);
            let found = detect(builtin(), &by_name).expect("name should match");
            assert!(
                by_name.to_lowercase().contains(&found.primary_name.to_lowercase())
                    || found.aliases.iter().any(|a| by_name.to_lowercase().contains(a)),
                "{by_name} matched {}",
                found.key
            );
            for alias in entry.aliases {
                let by_alias = format!("{alias} update");
                assert!(detect(builtin(), &by_alias).is_some(), "{by_alias}");
            }
        }
    }

    #[test]
    fn two_local_keywords_detect_entry() {
        assert_eq!(detected_key("waterlogging in andheri and bandra"), Some("mumbai"));
        assert_eq!(detected_key("Koramangala to Whitefield commute"), Some("bengaluru"));
    }

    #[test]
    fn single_local_keyword_is_not_enough() {
        assert_eq!(detected_key("new cafe opens in hollywood"), None);
        assert_eq!(detected_key("brooklyn bridge repairs"), None);
    }

    #[test]
    fn no_keywords_returns_none() {
        assert_eq!(detected_key("global markets rally"), None);
    }

    #[test]
    fn empty_query_returns_none() {
        assert_eq!(detected_key(""), None);
        assert_eq!(detected_key("   "), None);
    }

    #[test]
    fn name_match_beats_keyword_match_on_other_entry() {
        // Keywords point at Mumbai, the name at London.
        assert_eq!(detected_key("andheri bandra diaspora in London"), Some("london"));
    }

    #[test]
    fn keyword_tie_resolves_by_catalog_order() {
        static ENTRIES: &[LocationDescriptor] = &[
            LocationDescriptor {
                key: "first",
                primary_name: "Firstville",
                region: None,
                country: "X",
                aliases: &[],
                local_keywords: &["harbour", "old mill"],
                nearby_place_names: &[],
                preferred_source_domains: &[],
            },
            LocationDescriptor {
                key: "second",
                primary_name: "Secondton",
                region: None,
                country: "X",
                aliases: &[],
                local_keywords: &["harbour", "old mill", "ferry"],
                nearby_place_names: &[],
                preferred_source_domains: &[],
            },
        ];
        let catalog = LocationCatalog::new(ENTRIES);
        let found = detect(&catalog, "ferry from the harbour past the old mill");
        assert_eq!(found.map(|e| e.key), Some("first"));
    }

    #[test]
    fn resolve_hint_prefers_catalog_key() {
        assert_eq!(resolve_hint(builtin(), "New York").map(|e| e.key), Some("new york"));
    }

    #[test]
    fn resolve_hint_falls_back_to_detection() {
        assert_eq!(resolve_hint(builtin(), "Bombay, India").map(|e| e.key), Some("mumbai"));
        assert!(resolve_hint(builtin(), "Atlantis").is_none());
    }
}
