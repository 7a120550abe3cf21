//! Shared constants and invariants

pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

/// Platform-side guard checked whenever an `AuthService` is built.
pub const REFRESH_TOKEN_ENV: &str = "SERAPH_CLIENT_REFRESH_TOKEN";

pub const BEARER_PREFIX: &str = "Bearer ";
pub const API_KEY_HEADER: &str = "seraph-api-key";

// Default platform hosts
pub const LEGACY_REFRESH_URL: &str = "https://auth.seraph.si/v1/refresh";
pub const DEVELOPER_REFRESH_URL: &str = "https://auth.seraph.si/v2/refresh/developer";
pub const PLAYER_CACHE_BASE_URL: &str = "https://player-cache.seraph.si";
pub const CLIENT_BASE_URL: &str = "https://client.seraph.si";
pub const STASH_BASE_URL: &str = "https://stash.seraph.si";
pub const REPORT_BASE_URL: &str = "https://api.seraph.si";
pub const LINKING_BASE_URL: &str = "https://api.sussy.bot";
