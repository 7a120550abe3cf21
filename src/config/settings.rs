use serde::Deserialize;

use crate::auth::token_type::TokenType;
use crate::utils::constants::*;

/// ================================
/// Full client configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub auth: AuthConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub endpoints: Endpoints,
    pub logging: Option<LoggingConfig>,
}

/// ================================
/// Credentials
/// ================================
#[derive(Deserialize, Clone)]
pub struct AuthConfig {
    /// allowed: legacy, developer (case-insensitive)
    pub token_type: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_type", &self.token_type)
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// whole-request timeout, refresh calls included
    pub timeout_ms: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_ms: Some(DEFAULT_HTTP_TIMEOUT_MS), user_agent: None }
    }
}

/// ================================
/// Platform hosts
/// ================================
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Endpoints {
    pub legacy_refresh_url: String,
    pub developer_refresh_url: String,
    pub player_cache: String,
    pub client: String,
    pub stash: String,
    pub reports: String,
    pub linking: String,
}

impl Endpoints {
    pub fn refresh_url(&self, token_type: TokenType) -> &str {
        match token_type {
            TokenType::Legacy => &self.legacy_refresh_url,
            TokenType::Developer => &self.developer_refresh_url,
        }
    }

    /// Point every host at one base url, refresh paths keep their production shape.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            legacy_refresh_url: format!("{}/v1/refresh", base),
            developer_refresh_url: format!("{}/v2/refresh/developer", base),
            player_cache: base.to_owned(),
            client: base.to_owned(),
            stash: base.to_owned(),
            reports: base.to_owned(),
            linking: base.to_owned(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            legacy_refresh_url: LEGACY_REFRESH_URL.to_owned(),
            developer_refresh_url: DEVELOPER_REFRESH_URL.to_owned(),
            player_cache: PLAYER_CACHE_BASE_URL.to_owned(),
            client: CLIENT_BASE_URL.to_owned(),
            stash: STASH_BASE_URL.to_owned(),
            reports: REPORT_BASE_URL.to_owned(),
            linking: LINKING_BASE_URL.to_owned(),
        }
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), format: LogFormat::Compact }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}
