// tests/common/mod.rs
use chrono::{Duration, Utc};
use httpmock::Method::POST;
use httpmock::{Mock, MockServer};
use reqwest::Client;
use serde_json::json;

use crate::auth::service::AuthService;
use crate::auth::token_type::TokenType;
use crate::config::settings::{Endpoints, HttpConfig};
use crate::utils::constants::REFRESH_TOKEN_ENV;
use crate::SeraphApi;

pub const TEST_SECRET: &str = "client-refresh-secret";
pub const DEVELOPER_REFRESH_PATH: &str = "/v2/refresh/developer";
pub const LEGACY_REFRESH_PATH: &str = "/v1/refresh";

/// Platform-side guard must be present for any `AuthService` to be built.
/// Callers are `#[serial]` because this mutates the process environment.
pub fn set_env_guard() {
    std::env::set_var(REFRESH_TOKEN_ENV, "platform-refresh-secret");
}

pub fn future_iso(seconds: i64) -> String {
    (Utc::now() + Duration::seconds(seconds)).to_rfc3339()
}

pub fn past_iso(seconds: i64) -> String {
    (Utc::now() - Duration::seconds(seconds)).to_rfc3339()
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

pub fn endpoints(server: &MockServer) -> Endpoints {
    Endpoints::with_base_url(&server.base_url())
}

pub fn auth_service(server: &MockServer, token_type: TokenType) -> AuthService {
    AuthService::new(build_reqwest_client(), token_type, TEST_SECRET, &endpoints(server))
        .expect("auth service")
}

pub fn test_api(server: &MockServer) -> SeraphApi {
    SeraphApi::with_endpoints(
        TokenType::Developer,
        TEST_SECRET,
        endpoints(server),
        &HttpConfig { timeout_ms: Some(5000), user_agent: None },
    )
    .expect("seraph api")
}

/// Developer refresh endpoint answering `{token, expires_at}` for the test secret.
pub async fn mock_refresh<'a>(
    server: &'a MockServer,
    path: &str,
    token: &str,
    expires_at: &str,
) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path(path)
                .header("content-type", "application/json")
                .json_body(json!({ "token": TEST_SECRET }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "token": token, "expires_at": expires_at }));
        })
        .await
}
