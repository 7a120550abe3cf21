use reqwest::Client;

use crate::models::MojangPlayer;
use crate::services::request::{AuthScheme, ServiceRequester};

const SERVICE: &str = "mojang";

/// Name ↔ UUID resolution. Public endpoint, no credential attached.
#[derive(Debug, Clone)]
pub struct MojangService {
    requester: ServiceRequester,
}

impl MojangService {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            requester: ServiceRequester::new(SERVICE, client, None, base_url, AuthScheme::None),
        }
    }

    pub async fn fetch_mojang(&self, name_or_id: &str) -> Option<MojangPlayer> {
        self.requester
            .get("fetch_mojang", &format!("/mojang/{}", name_or_id))
            .await
            .ok()
    }
}
