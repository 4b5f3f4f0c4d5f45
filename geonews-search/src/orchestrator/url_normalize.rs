//! Canonical article URLs for deduplication.
//!
//! The same story often comes back from several strategies with cosmetic
//! differences: a `www.` prefix, campaign parameters, an AMP variant, a
//! fragment. [`canonical_url`] folds those together.

use url::Url;

/// Query parameters that never identify an article.
const TRACKING_PARAMS: &[&str] = &[
    "fbclid",
    "gclid",
    "ocid",
    "cmpid",
    "smid",
    "taid",
    "ito",
    "mc_cid",
    "mc_eid",
    "at_medium",
    "at_campaign",
    "guccounter",
    "ref",
    "amp",
    "outputtype",
];

/// Canonical form of an article URL.
///
/// 1. Scheme and host are lowercased (the `url` crate does this on parse);
///    a leading `www.` is dropped.
/// 2. Default ports and the fragment are removed.
/// 3. `utm_*` and known tracking or AMP parameters are removed; the rest
///    are sorted by key then value.
/// 4. A trailing `/amp` segment and a trailing slash are removed, except
///    for the root path.
///
/// Unparseable input is returned trimmed but otherwise unchanged.
///
/// # Examples
///
/// ```
/// use geonews_search::orchestrator::url_normalize::canonical_url;
///
/// let a = canonical_url("https://WWW.Example.com/story/amp/?utm_source=x&b=2&a=1#top");
/// let b = canonical_url("https://example.com/story?a=1&b=2");
/// assert_eq!(a, b);
/// ```
pub fn canonical_url(raw: &str) -> String {
    let raw = raw.trim();
    let Ok(mut parsed) = Url::parse(raw) else {
        return raw.to_owned();
    };

    parsed.set_fragment(None);

    if matches!(
        (parsed.scheme(), parsed.port()),
        ("http", Some(80)) | ("https", Some(443))
    ) {
        let _ = parsed.set_port(None);
    }

    let bare_host = parsed
        .host_str()
        .and_then(|h| h.strip_prefix("www."))
        .map(str::to_owned);
    if let Some(host) = bare_host {
        let _ = parsed.set_host(Some(&host));
    }

    let mut params: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !is_tracking_param(key))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    params.sort();

    if params.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(&params);
    }

    let mut path = parsed.path().trim_end_matches('/').to_owned();
    if let Some(stripped) = path.strip_suffix("/amp") {
        path = stripped.to_owned();
    }
    if path.is_empty() {
        path.push('/');
    }
    parsed.set_path(&path);

    parsed.to_string()
}

/// Host name without a leading `www.`, for display as the article source.
pub fn source_name(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw.trim()).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_owned())
}

fn is_tracking_param(key: &str) -> bool {
    let key = key.to_lowercase();
    key.starts_with("utm_") || TRACKING_PARAMS.contains(&key.as_str())
}
