//! Short article descriptions from an OpenAI-compatible chat model.
//!
//! Works against any server implementing `POST /v1/chat/completions`
//! (OpenAI, Ollama, vLLM, llama.cpp server). When the model is unavailable
//! [`Summarizer::describe_or_fallback`] degrades to a truncated excerpt.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::http;

/// Characters kept by the excerpt fallback, before the ellipsis.
pub const FALLBACK_DESCRIPTION_CHARS: usize = 200;

/// Model input is capped so one long article cannot blow the context.
const MAX_PROMPT_CONTENT_CHARS: usize = 4000;

const MAX_DESCRIPTION_TOKENS: u32 = 120;

/// Client for a chat-completions summarisation endpoint.
#[derive(Debug, Clone)]
pub struct Summarizer {
    client: reqwest::Client,
    api_url: String,
    api_model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl Summarizer {
    /// Create a summariser. An empty `api_key` sends no `Authorization` header,
    /// which suits local servers.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an empty URL or model, or
    /// [`SearchError::Http`] if the client cannot be built.
    pub fn new(
        api_url: impl Into<String>,
        api_model: impl Into<String>,
        api_key: impl Into<String>,
        timeout_seconds: u64,
    ) -> Result<Self> {
        let api_url: String = api_url.into();
        let api_model: String = api_model.into();
        if api_url.trim().is_empty() {
            return Err(SearchError::Config("summarizer api_url is empty".into()));
        }
        if api_model.trim().is_empty() {
            return Err(SearchError::Config("summarizer api_model is empty".into()));
        }

        Ok(Self {
            client: http::build_api_client(timeout_seconds)?,
            api_url: normalize_base(&api_url),
            api_model,
            api_key: api_key.into(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_model(&self) -> &str {
        &self.api_model
    }

    /// Ask the model for a one or two sentence description of an article.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`]/[`SearchError::Timeout`] on transport
    /// failure, [`SearchError::Parse`] for an undecodable reply, or
    /// [`SearchError::Summarize`] when the reply has no text.
    pub async fn describe(
        &self,
        title: &str,
        content: &str,
        location_label: Option<&str>,
    ) -> Result<String> {
        let system = system_prompt(location_label);
        let user = format!(
            "Title: {title}\n\n{}",
            truncate_chars(content, MAX_PROMPT_CONTENT_CHARS)
        );
        let request = ChatRequest {
            model: &self.api_model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: &user,
                },
            ],
            temperature: 0.2,
            max_tokens: MAX_DESCRIPTION_TOKENS,
        };

        let url = format!("{}/v1/chat/completions", self.api_url);
        let mut builder = self.client.post(&url).json(&request);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest("summarizer request failed", &e))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("summarizer HTTP error: {e}")))?;

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(format!("summarizer response: {e}")))?;

        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| SearchError::Summarize("model returned no content".into()))
    }

    /// [`Self::describe`], falling back to [`excerpt`] on any error.
    pub async fn describe_or_fallback(
        &self,
        title: &str,
        content: &str,
        location_label: Option<&str>,
    ) -> String {
        match self.describe(title, content, location_label).await {
            Ok(description) => description,
            Err(e) => {
                tracing::warn!(error = %e, "summarizer failed, using excerpt");
                excerpt(content)
            }
        }
    }
}

/// The fallback description: `text` cut to [`FALLBACK_DESCRIPTION_CHARS`]
/// on a word boundary, with `…` appended when anything was cut.
pub fn excerpt(text: &str) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= FALLBACK_DESCRIPTION_CHARS {
        return text;
    }

    let head = truncate_chars(&text, FALLBACK_DESCRIPTION_CHARS);
    let cut = match head.rfind(' ') {
        Some(space) if space > 0 => &head[..space],
        _ => head,
    };
    format!("{}…", cut.trim_end_matches([',', ';', ':', '.', ' ']))
}

fn system_prompt(location_label: Option<&str>) -> String {
    let mut prompt = String::from(
        "You write short news descriptions. Summarise the article in at most two \
         plain sentences. No preamble, no markdown.",
    );
    if let Some(label) = location_label {
        prompt.push_str(&format!(" Readers are interested in {label}; mention it when relevant."));
    }
    prompt
}

/// Accepts `http://host`, `http://host/` or `http://host/v1`.
fn normalize_base(api_url: &str) -> String {
    let trimmed = api_url.trim().trim_end_matches('/');
    trimmed
        .strip_suffix("/v1")
        .unwrap_or(trimmed)
        .to_owned()
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
