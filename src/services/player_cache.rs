use std::sync::Arc;

use http::Method;
use reqwest::Client;

use crate::auth::service::AuthService;
use crate::models::{HistoryByTimestampRequest, HistoryEnvelope, PlayerHistoryEntry, PlayerHistoryTimestamp};
use crate::services::request::{AuthScheme, ServiceRequester};

const SERVICE: &str = "player_cache";

/// Historical snapshots of player data.
#[derive(Debug, Clone)]
pub struct PlayerCacheService {
    requester: ServiceRequester,
}

impl PlayerCacheService {
    pub fn new(client: Client, auth: Arc<AuthService>, base_url: &str) -> Self {
        Self {
            requester: ServiceRequester::new(SERVICE, client, Some(auth), base_url, AuthScheme::Bearer),
        }
    }

    /// Entries where the player's data changed.
    pub async fn fetch_player_changes(&self, player_id: &str) -> Option<Vec<PlayerHistoryEntry>> {
        self.requester
            .get::<HistoryEnvelope<PlayerHistoryEntry>>("fetch_player_changes", &format!("/player/changes/{}", player_id))
            .await
            .ok()
            .map(|envelope| envelope.history)
    }

    pub async fn fetch_player_timestamps(&self, player_id: &str) -> Option<Vec<PlayerHistoryTimestamp>> {
        self.requester
            .get::<HistoryEnvelope<PlayerHistoryTimestamp>>("fetch_player_timestamps", &format!("/player/timestamps/{}", player_id))
            .await
            .ok()
            .map(|envelope| envelope.history)
    }

    pub async fn fetch_player_history(&self, player_id: &str) -> Option<Vec<PlayerHistoryEntry>> {
        self.requester
            .get::<HistoryEnvelope<PlayerHistoryEntry>>("fetch_player_history", &format!("/player/{}", player_id))
            .await
            .ok()
            .map(|envelope| envelope.history)
    }

    /// History as it was at `timestamp` (the platform's own timestamp format).
    pub async fn fetch_player_history_by_timestamp(
        &self,
        player_id: &str,
        timestamp: &str,
    ) -> Option<Vec<PlayerHistoryEntry>> {
        let body = HistoryByTimestampRequest { timestamp, player_uuid: player_id };
        self.requester
            .send::<HistoryEnvelope<PlayerHistoryEntry>, _>("fetch_player_history_by_timestamp", Method::POST, "/player", Some(&body))
            .await
            .ok()
            .map(|envelope| envelope.history)
    }
}
