//! Static table of known places.
//!
//! The catalog is plain `static` data built at compile time and never
//! mutated, so every request can borrow entries for `'static` without
//! locking. Adding a city means adding a row to [`builtin`].

mod builtin;

use serde::Serialize;

/// Everything the pipeline knows about one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationDescriptor {
    /// Normalised lowercase identifier used by [`LocationCatalog::lookup`].
    pub key: &'static str,
    /// Display name, e.g. `"Mumbai"`.
    pub primary_name: &'static str,
    /// State, province or constituent country.
    pub region: Option<&'static str>,
    pub country: &'static str,
    /// Other names the place goes by (lowercase).
    pub aliases: &'static [&'static str],
    /// Neighbourhoods, landmarks and local institutions (lowercase), most telling first.
    pub local_keywords: &'static [&'static str],
    /// Surrounding towns, closest first.
    pub nearby_place_names: &'static [&'static str],
    /// Local outlets whose coverage is presumed on-topic.
    pub preferred_source_domains: &'static [&'static str],
}

impl LocationDescriptor {
    /// Human-readable `"Name, Region, Country"` label.
    pub fn label(&self) -> String {
        match self.region {
            Some(region) => format!("{}, {region}, {}", self.primary_name, self.country),
            None => format!("{}, {}", self.primary_name, self.country),
        }
    }
}

/// Read-only lookup table of [`LocationDescriptor`]s.
#[derive(Debug, Clone, Copy)]
pub struct LocationCatalog {
    entries: &'static [LocationDescriptor],
}

static BUILTIN: LocationCatalog = LocationCatalog::new(builtin::ENTRIES);

impl LocationCatalog {
    /// Wrap a static slice of entries. Iteration order is the slice order.
    pub const fn new(entries: &'static [LocationDescriptor]) -> Self {
        Self { entries }
    }

    /// The process-wide catalog shipped with the crate.
    pub fn builtin() -> &'static LocationCatalog {
        &BUILTIN
    }

    /// Find the entry whose key matches `key` after trimming and lowercasing.
    pub fn lookup(&self, key: &str) -> Option<&'static LocationDescriptor> {
        let key = key.trim().to_lowercase();
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &'static [LocationDescriptor] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Editorial outlets searched for locations in `country`.
///
/// Only India, the USA and the UK have curated lists; other countries
/// return an empty slice.
pub fn editorial_domains(country: &str) -> &'static [&'static str] {
    match country {
        "India" => builtin::INDIA_DOMAINS,
        "USA" => builtin::USA_DOMAINS,
        "UK" => builtin::UK_DOMAINS,
        _ => &[],
    }
}
