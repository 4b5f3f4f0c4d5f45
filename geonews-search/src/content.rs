//! Article body extraction for results whose provider snippet is too thin.
//!
//! [`extract_content`] is pure: pick the most specific content container,
//! collect its visible text while skipping boilerplate subtrees, collapse
//! whitespace. [`PageFetcher`] adds the HTTP download in front of it.

use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::http;
use crate::types::PageContent;

/// Containers tried in order; the first with visible text wins.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "[itemprop=\"articleBody\"]",
    "main",
    "[role=\"main\"]",
    "body",
];

/// Elements whose text is never article content.
const BOILERPLATE_TAGS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "aside", "noscript", "svg", "iframe", "form",
    "button",
];

/// Extract readable text from raw HTML, keeping at most `max_chars` characters.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if no visible text is found.
pub fn extract_content(html: &str, url: &str, max_chars: usize) -> Result<PageContent> {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let text = CONTENT_SELECTORS
        .iter()
        .filter_map(|selector| Selector::parse(selector).ok())
        .find_map(|selector| {
            document
                .select(&selector)
                .map(visible_text)
                .find(|text| !text.is_empty())
        })
        .ok_or_else(|| SearchError::Parse("no extractable content found".into()))?;

    let text = truncate_chars(&text, max_chars);
    let word_count = text.split_whitespace().count();

    Ok(PageContent {
        url: url.to_owned(),
        title,
        text,
        word_count,
    })
}

/// Downloads article pages and extracts their main text.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
    max_chars: usize,
}

impl PageFetcher {
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_page_client(config)?,
            max_chars: config.max_text_chars,
        })
    }

    /// Fetch `url` and extract its article text.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] or [`SearchError::Timeout`] if the page
    /// cannot be fetched, or [`SearchError::Parse`] if it has no text.
    pub async fn fetch(&self, url: &str) -> Result<PageContent> {
        tracing::trace!(url, "fetching article page");

        let html = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest("page request failed", &e))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("page HTTP error: {e}")))?
            .text()
            .await
            .map_err(|e| SearchError::from_reqwest("page read failed", &e))?;

        extract_content(&html, url, self.max_chars)
    }
}

fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default()
}

/// Text under `root`, excluding anything inside a boilerplate element.
fn visible_text(root: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in root.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let in_boilerplate = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|el| BOILERPLATE_TAGS.contains(&el.value().name()));
        if !in_boilerplate {
            out.push_str(text);
            out.push(' ');
        }
    }
    collapse_whitespace(&out)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max_chars` characters of `text`.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_owned(),
        None => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/story";

    #[test]
    fn extracts_title() {
        let html = "<html><head><title> Rain  in Mumbai </title></head><body>Body</body></html>";
        let page = extract_content(html, URL, 1000).expect("extract");
        assert_eq!(page.title, "Rain in Mumbai");
        assert_eq!(page.url, URL);
    }

    #[test]
    fn missing_title_is_empty() {
        let page =
            extract_content("<html><body>Content</body></html>", URL, 1000).expect("extract");
        assert!(page.title.is_empty());
    }

    #[test]
    fn prefers_article_over_body() {
        let html = r#"<html><body>
            <nav>Sections</nav>
            <div>Trending elsewhere</div>
            <article><p>Water levels rose overnight.</p></article>
            <footer>Copyright</footer>
        </body></html>"#;
        let page = extract_content(html, URL, 1000).expect("extract");
        assert_eq!(page.text, "Water levels rose overnight.");
    }

    #[test]
    fn article_body_itemprop_is_a_container() {
        let html = r#"<html><body>
            <div>Ad slot</div>
            <div itemprop="articleBody"><p>Council approved the budget.</p></div>
        </body></html>"#;
        let page = extract_content(html, URL, 1000).expect("extract");
        assert_eq!(page.text, "Council approved the budget.");
    }

    #[test]
    fn boilerplate_inside_container_is_skipped() {
        let html = r#"<html><body><article>
            <header>Share this</header>
            <p>Trains resumed.</p>
            <script>var tracker = 1;</script>
            <style>.x { color: red; }</style>
            <aside>Related stories</aside>
            <p>Delays expected.</p>
        </article></body></html>"#;
        let page = extract_content(html, URL, 1000).expect("extract");
        assert_eq!(page.text, "Trains resumed. Delays expected.");
    }

    #[test]
    fn empty_article_falls_through_to_next_container() {
        let html = r#"<html><body>
            <article><script>only();</script></article>
            <main>Main text</main>
        </body></html>"#;
        let page = extract_content(html, URL, 1000).expect("extract");
        assert_eq!(page.text, "Main text");
    }

    #[test]
    fn word_count_matches_text() {
        let page = extract_content("<html><body>One two three four five</body></html>", URL, 1000)
            .expect("extract");
        assert_eq!(page.word_count, 5);
    }

    #[test]
    fn truncates_on_char_boundary() {
        let html = "<html><body>नमस्ते मुंबई</body></html>";
        let page = extract_content(html, URL, 3).expect("extract");
        assert_eq!(page.text.chars().count(), 3);
    }

    #[test]
    fn page_without_text_is_parse_error() {
        let err = extract_content("<html><body><script>x()</script></body></html>", URL, 1000)
            .unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn fetcher_builds_from_default_config() {
        assert!(PageFetcher::new(&SearchConfig::default()).is_ok());
    }
}
