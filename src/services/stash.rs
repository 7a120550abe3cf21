use std::sync::Arc;

use http::Method;
use reqwest::Client;

use crate::auth::service::AuthService;
use crate::models::{PingDay, PingEnvelope, SearchRequest, SearchResult};
use crate::services::request::{AuthScheme, ServiceRequester};

const SERVICE: &str = "stash";

#[derive(Debug, Clone)]
pub struct PlayerStashService {
    requester: ServiceRequester,
}

impl PlayerStashService {
    pub fn new(client: Client, auth: Arc<AuthService>, base_url: &str) -> Self {
        Self {
            requester: ServiceRequester::new(SERVICE, client, Some(auth), base_url, AuthScheme::Bearer),
        }
    }

    /// Listing endpoint: failures and a `null` body both yield an empty list.
    pub async fn fetch_search(&self, query: &str) -> Vec<SearchResult> {
        self.requester
            .send::<Option<Vec<SearchResult>>, _>("fetch_search", Method::POST, "/search", Some(&SearchRequest { query }))
            .await
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Daily ping statistics, `None` when unknown or on failure.
    pub async fn fetch_ping(&self, player_id: &str) -> Option<Vec<PingDay>> {
        self.requester
            .get::<PingEnvelope>("fetch_ping", &format!("/ping/{}", player_id))
            .await
            .ok()
            .and_then(|envelope| envelope.data)
    }
}
