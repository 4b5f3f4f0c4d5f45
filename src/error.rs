//! Error types for the geonews service.

use geonews_search::SearchError;

/// Top-level error type for the news service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// News search pipeline error.
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// HTTP server error (bind, serve).
    #[error("server error: {0}")]
    Server(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
