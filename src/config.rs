//! Service configuration.
//!
//! Loaded from TOML; every section and field has a default, so an empty or
//! missing file is a valid configuration. Secrets are references resolved
//! at startup, never plain fields.

use std::path::{Path, PathBuf};

use geonews_search::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "GEONEWS_CONFIG";

/// Top-level configuration for the news service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Search provider and ranking.
    pub search: SearchApiConfig,
    /// Article descriptions from a chat model.
    pub summarizer: SummarizerConfig,
    /// Article page fetching for thin snippets.
    pub extraction: ExtractionConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Port (0 = auto-assign).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
        }
    }
}

/// Search provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchApiConfig {
    /// Provider base URL.
    pub api_url: String,
    /// Provider API key.
    pub api_key: SecretRef,
    /// Results per request when the caller gives no limit.
    pub max_results: usize,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// Publish-date window in days.
    pub lookback_days: u32,
    /// Snippets shorter than this are replaced by page text when extraction is on.
    pub min_snippet_chars: usize,
}

impl Default for SearchApiConfig {
    fn default() -> Self {
        let defaults = SearchConfig::default();
        Self {
            api_url: geonews_search::providers::exa::DEFAULT_BASE_URL.to_owned(),
            api_key: SecretRef::Env {
                var: "EXA_API_KEY".to_owned(),
            },
            max_results: defaults.max_results,
            timeout_seconds: defaults.timeout_seconds,
            lookback_days: defaults.lookback_days,
            min_snippet_chars: defaults.min_snippet_chars,
        }
    }
}

/// Chat-model summariser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Whether descriptions are requested from a model at all.
    pub enabled: bool,
    /// OpenAI-compatible base URL (with or without `/v1`).
    pub api_url: String,
    /// Model identifier.
    pub api_model: String,
    /// API key; `none` for local servers.
    pub api_key: SecretRef,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: "https://api.openai.com/v1".to_owned(),
            api_model: "gpt-4o-mini".to_owned(),
            api_key: SecretRef::Env {
                var: "OPENAI_API_KEY".to_owned(),
            },
            timeout_seconds: 10,
        }
    }
}

/// Article page extraction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub enabled: bool,
    /// Page fetch timeout in seconds.
    pub timeout_seconds: u64,
    /// Characters of article text kept (and requested from the provider).
    pub max_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_seconds: 5,
            max_chars: SearchConfig::default().max_text_chars,
        }
    }
}

/// Where a secret comes from.
///
/// ```toml
/// api_key = { type = "env", var = "EXA_API_KEY" }
/// api_key = { type = "literal", value = "..." }
/// api_key = { type = "none" }
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SecretRef {
    /// No secret.
    #[default]
    None,
    /// Inline value (discouraged; prefer `env`).
    Literal { value: String },
    /// Read from an environment variable at startup.
    Env { var: String },
}

impl SecretRef {
    /// Resolve to the secret value; `Ok(None)` for [`SecretRef::None`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the environment variable is missing or
    /// empty, or a literal is empty.
    pub fn resolve(&self) -> Result<Option<String>> {
        match self {
            Self::None => Ok(None),
            Self::Literal { value } => {
                if value.trim().is_empty() {
                    return Err(AppError::Config("literal secret is empty".to_owned()));
                }
                Ok(Some(value.clone()))
            }
            Self::Env { var } => {
                let value = std::env::var(var)
                    .map_err(|_| AppError::Config(format!("secret env var is missing: {var}")))?;
                if value.trim().is_empty() {
                    return Err(AppError::Config(format!("secret env var is empty: {var}")));
                }
                Ok(Some(value))
            }
        }
    }
}

impl std::fmt::Debug for SecretRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Literal { .. } => f.write_str("Literal { value: \"<redacted>\" }"),
            Self::Env { var } => f.debug_struct("Env").field("var", var).finish(),
        }
    }
}

impl AppConfig {
    /// The pipeline settings derived from this configuration.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_results: self.search.max_results,
            timeout_seconds: self.search.timeout_seconds,
            lookback_days: self.search.lookback_days,
            min_snippet_chars: self.search.min_snippet_chars,
            max_text_chars: self.extraction.max_chars,
            user_agent: None,
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Like [`Self::load_from_file`], but a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `$GEONEWS_CONFIG` if set, else `~/.config/geonews/config.toml`.
    pub fn config_path() -> PathBuf {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => Self::default_config_path(),
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("geonews")
            .join("config.toml")
    }
}
