//! # Seraph client library
//!
//! Typed access to the Seraph player-data platform. One [`SeraphApi`]
//! owns a self-refreshing bearer credential that every sub-service
//! attaches to its requests.
//!
//! Modules:
//! - `auth`: token class, refresh exchange, the shared `AuthService`
//! - `cache`: in-memory credential store
//! - `services`: player cache, clients, stash, mojang, reports, linking
//! - `config`: YAML configuration, defaults and validation

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod helpers;
pub mod models;
pub mod observability;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::api::SeraphApi;
pub use crate::auth::{AuthService, RefreshOutcome, TokenType};
pub use crate::error::{ApiError, ApiResult, ConfigError, RefreshError};
