//! # geonews
//!
//! HTTP service for location-aware news search.
//!
//! The pipeline itself lives in the `geonews-search` crate; this crate adds
//! configuration loading, the axum API and static fallback data.

pub mod config;
pub mod error;
pub mod sample;
pub mod server;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use server::{AppState, NewsServer};
