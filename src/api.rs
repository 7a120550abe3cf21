use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::info;

use crate::auth::service::AuthService;
use crate::auth::token_type::TokenType;
use crate::config::settings::{ClientConfig, Endpoints, HttpConfig};
use crate::error::ConfigError;
use crate::services::{
    MojangService, PlayerCacheService, PlayerClientService, PlayerLinkingService,
    PlayerReportService, PlayerStashService,
};

/// Entry point: one credential, one HTTP client, every sub-service.
#[derive(Debug, Clone)]
pub struct SeraphApi {
    auth: Arc<AuthService>,
    player_cache: PlayerCacheService,
    client: PlayerClientService,
    stash: PlayerStashService,
    mojang: MojangService,
    reports: PlayerReportService,
    linking: PlayerLinkingService,
}

impl SeraphApi {
    /// Client against the production hosts.
    pub fn new(token_type: TokenType, refresh_token: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_endpoints(token_type, refresh_token, Endpoints::default(), &HttpConfig::default())
    }

    pub fn with_endpoints(
        token_type: TokenType,
        refresh_token: impl Into<String>,
        endpoints: Endpoints,
        http: &HttpConfig,
    ) -> Result<Self, ConfigError> {
        let client = build_http_client(http)?;
        let auth = Arc::new(AuthService::new(client.clone(), token_type, refresh_token, &endpoints)?);
        info!(token_type = %token_type, "seraph client ready");
        Ok(Self::compose(client, auth, &endpoints))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = build_http_client(&config.http)?;
        let auth = Arc::new(AuthService::from_str_type(
            client.clone(),
            &config.auth.token_type,
            config.auth.refresh_token.clone(),
            &config.endpoints,
        )?);
        info!(token_type = %auth.token_type(), "seraph client ready");
        Ok(Self::compose(client, auth, &config.endpoints))
    }

    fn compose(client: Client, auth: Arc<AuthService>, endpoints: &Endpoints) -> Self {
        Self {
            player_cache: PlayerCacheService::new(client.clone(), auth.clone(), &endpoints.player_cache),
            client: PlayerClientService::new(client.clone(), auth.clone(), &endpoints.client),
            stash: PlayerStashService::new(client.clone(), auth.clone(), &endpoints.stash),
            mojang: MojangService::new(client.clone(), &endpoints.stash),
            reports: PlayerReportService::new(client.clone(), auth.clone(), &endpoints.reports),
            linking: PlayerLinkingService::new(client, auth.clone(), &endpoints.linking),
            auth,
        }
    }

    pub fn auth(&self) -> &Arc<AuthService> {
        &self.auth
    }

    pub fn player_cache(&self) -> &PlayerCacheService {
        &self.player_cache
    }

    pub fn client(&self) -> &PlayerClientService {
        &self.client
    }

    pub fn stash(&self) -> &PlayerStashService {
        &self.stash
    }

    pub fn mojang(&self) -> &MojangService {
        &self.mojang
    }

    pub fn reports(&self) -> &PlayerReportService {
        &self.reports
    }

    pub fn linking(&self) -> &PlayerLinkingService {
        &self.linking
    }
}

fn build_http_client(http: &HttpConfig) -> Result<Client, ConfigError> {
    let mut builder = Client::builder();
    if let Some(timeout_ms) = http.timeout_ms {
        builder = builder.timeout(Duration::from_millis(timeout_ms));
    }
    if let Some(user_agent) = &http.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    Ok(builder.build()?)
}
