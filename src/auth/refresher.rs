use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::auth::token_type::TokenType;
use crate::cache::credential::Credential;
use crate::cache::credential_store::CredentialStore;
use crate::error::RefreshError;
use crate::helpers::time::{get_instant, parse_iso_timestamp};
use crate::observability::metrics::get_metrics;

/// Long-lived secret exchanged for short-lived access tokens.
#[derive(Clone)]
pub struct RefreshSecret(String);

impl RefreshSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for RefreshSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RefreshSecret(<redacted>)")
    }
}

/// Result of `ensure_fresh`. Failure is a value, the caller decides what to do with it.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// cached credential was still valid, nothing was sent
    Fresh,
    Refreshed { expires_at: DateTime<Utc> },
    /// store left untouched, try again on the next call
    Failed(RefreshError),
}

impl RefreshOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, RefreshOutcome::Failed(_))
    }
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    token: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    token: String,
    expires_at: String,
}

/// Performs the refresh-secret → access-token exchange for one token class.
#[derive(Debug, Clone)]
pub struct TokenRefresher {
    client: Client,
    token_type: TokenType,
    url: String,
    secret: RefreshSecret,
}

impl TokenRefresher {
    pub fn new(client: Client, token_type: TokenType, url: String, secret: RefreshSecret) -> Self {
        Self { client, token_type, url, secret }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Exchange the secret and store the new credential on success.
    pub async fn refresh(&self, store: &CredentialStore) -> RefreshOutcome {
        let metrics = get_metrics().await;
        let token_type = self.token_type.as_str();
        let start = get_instant();
        metrics.refresh_requests.with_label_values(&[token_type]).inc();

        let result = self.request_credential().await;
        metrics
            .refresh_duration
            .with_label_values(&[token_type])
            .observe(start.elapsed().as_secs_f64());

        match result {
            Ok(credential) => {
                let expires_at = credential.expires_at;
                store.set(credential).await;
                info!(token_type, %expires_at, "token refreshed");
                RefreshOutcome::Refreshed { expires_at }
            }
            Err(err) => {
                metrics
                    .refresh_failures
                    .with_label_values(&[token_type, err.reason()])
                    .inc();
                warn!(token_type, error = %err, "token refresh failed, keeping previous credential");
                RefreshOutcome::Failed(err)
            }
        }
    }

    async fn request_credential(&self) -> Result<Credential, RefreshError> {
        debug!(url = %self.url, "requesting new token");
        let response = self
            .client
            .post(&self.url)
            .json(&RefreshRequest { token: self.secret.expose() })
            .send()
            .await
            .map_err(|e| RefreshError::Unreachable(Arc::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RefreshError::Rejected(status));
        }

        let body: RefreshResponse = response
            .json()
            .await
            .map_err(|e| RefreshError::InvalidBody(e.to_string()))?;

        if body.token.is_empty() {
            return Err(RefreshError::EmptyToken);
        }
        let expires_at = parse_iso_timestamp(&body.expires_at)
            .ok_or_else(|| RefreshError::InvalidExpiry(body.expires_at.clone()))?;

        Ok(Credential::new(body.token, expires_at))
    }
}
