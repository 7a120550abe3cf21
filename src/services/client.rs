use std::sync::Arc;

use reqwest::Client;

use crate::auth::service::AuthService;
use crate::models::{ClientCosmetics, PlayerClient};
use crate::services::request::{AuthScheme, ServiceRequester};

const SERVICE: &str = "client";

/// Game clients a player was seen on and the cosmetics they own.
#[derive(Debug, Clone)]
pub struct PlayerClientService {
    requester: ServiceRequester,
}

impl PlayerClientService {
    pub fn new(client: Client, auth: Arc<AuthService>, base_url: &str) -> Self {
        Self {
            requester: ServiceRequester::new(SERVICE, client, Some(auth), base_url, AuthScheme::Bearer),
        }
    }

    pub async fn fetch_client(&self, player_id: &str) -> Option<Vec<PlayerClient>> {
        self.requester
            .get("fetch_client", &format!("/client/{}", player_id))
            .await
            .ok()
    }

    pub async fn fetch_client_cosmetics(&self, player_id: &str) -> Option<ClientCosmetics> {
        self.requester
            .get("fetch_client_cosmetics", &format!("/cosmetics/{}", player_id))
            .await
            .ok()
    }
}
