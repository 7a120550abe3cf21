use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Client;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::auth::refresher::{RefreshOutcome, RefreshSecret, TokenRefresher};
use crate::auth::token_type::TokenType;
use crate::cache::credential::Credential;
use crate::cache::credential_store::CredentialStore;
use crate::config::settings::Endpoints;
use crate::error::{ConfigError, RefreshError};
use crate::utils::constants::{BEARER_PREFIX, REFRESH_TOKEN_ENV};

/// Owns the credential for one client session and refreshes it on demand.
///
/// Sub-services share one instance through `Arc` and call
/// [`AuthService::get_authorization_value`] before every request.
///
/// Concurrent callers that find the credential stale share a single in-flight
/// refresh: the first one performs the exchange, the others wait for it and
/// take its result, the new credential or the same failure. A caller arriving
/// after an attempt has finished starts a new one.
#[derive(Debug)]
pub struct AuthService {
    token_type: TokenType,
    refresher: TokenRefresher,
    store: CredentialStore,
    /// completed refresh attempts
    attempts: AtomicU64,
    /// held for the duration of a refresh, keeps the failure of the last attempt
    refresh_lock: Mutex<Option<RefreshError>>,
}

impl AuthService {
    /// Fails fast on an empty secret or a missing platform-side guard.
    /// No request is sent until the first credential is needed.
    pub fn new(
        client: Client,
        token_type: TokenType,
        refresh_secret: impl Into<String>,
        endpoints: &Endpoints,
    ) -> Result<Self, ConfigError> {
        let secret = RefreshSecret::new(refresh_secret);
        if secret.is_empty() {
            return Err(ConfigError::MissingRefreshToken);
        }
        check_env_guard()?;

        let url = endpoints.refresh_url(token_type).to_owned();
        Ok(Self {
            token_type,
            refresher: TokenRefresher::new(client, token_type, url, secret),
            store: CredentialStore::new(),
            attempts: AtomicU64::new(0),
            refresh_lock: Mutex::new(None),
        })
    }

    /// Same as [`AuthService::new`] with the token class given as text.
    ///
    /// The secret is checked before the token class, so an empty secret is
    /// reported as [`ConfigError::MissingRefreshToken`] whatever the class.
    pub fn from_str_type(
        client: Client,
        token_type: &str,
        refresh_secret: impl Into<String>,
        endpoints: &Endpoints,
    ) -> Result<Self, ConfigError> {
        let secret = RefreshSecret::new(refresh_secret);
        if secret.is_empty() {
            return Err(ConfigError::MissingRefreshToken);
        }
        let token_type: TokenType = token_type.parse()?;
        Self::new(client, token_type, secret.expose(), endpoints)
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Snapshot of the stored credential, if any refresh has succeeded.
    pub async fn credential(&self) -> Option<Credential> {
        self.store.get().await
    }

    /// Refresh when no credential exists or it is no longer strictly in the future.
    pub async fn ensure_fresh(&self) -> RefreshOutcome {
        let seen = self.attempts.load(Ordering::Acquire);
        if self.store.get_fresh().await.is_some() {
            return RefreshOutcome::Fresh;
        }

        let mut last_failure = self.refresh_lock.lock().await;
        // another caller may have refreshed while we waited
        if self.store.get_fresh().await.is_some() {
            debug!("credential refreshed by a concurrent caller");
            return RefreshOutcome::Fresh;
        }
        if self.attempts.load(Ordering::Acquire) != seen {
            if let Some(err) = last_failure.as_ref() {
                debug!(error = %err, "concurrent refresh failed, not retrying");
                return RefreshOutcome::Failed(err.clone());
            }
        }

        let outcome = self.refresher.refresh(&self.store).await;
        *last_failure = match &outcome {
            RefreshOutcome::Failed(err) => Some(err.clone()),
            _ => None,
        };
        self.attempts.fetch_add(1, Ordering::Release);
        outcome
    }

    /// Token ready to put in a header, optionally prefixed with `Bearer `.
    ///
    /// After a failed refresh this is the previous (possibly expired) token,
    /// or `None` when no refresh has ever succeeded.
    pub async fn get_authorization_value(&self, include_scheme: bool) -> Option<String> {
        if let RefreshOutcome::Failed(err) = self.ensure_fresh().await {
            debug!(error = %err, "serving credential after failed refresh");
        }

        let Some(credential) = self.store.get().await else {
            warn!(token_type = %self.token_type, "no credential available");
            return None;
        };

        if include_scheme {
            Some(format!("{}{}", BEARER_PREFIX, credential.value))
        } else {
            Some(credential.value)
        }
    }
}

fn check_env_guard() -> Result<(), ConfigError> {
    match std::env::var(REFRESH_TOKEN_ENV) {
        Ok(value) if !value.trim().is_empty() => Ok(()),
        _ => Err(ConfigError::MissingEnvGuard(REFRESH_TOKEN_ENV)),
    }
}
