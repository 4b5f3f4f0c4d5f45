//! News search provider implementations.
//!
//! Each module provides a struct implementing
//! [`crate::provider::NewsSearchProvider`] for one external API.

pub mod exa;

pub use exa::ExaProvider;
