//! Wire payloads of the platform sub-services.
//!
//! Player data and report details are loosely shaped upstream, those parts stay
//! as `serde_json::Value` instead of guessing a schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// ================================
/// Player cache
/// ================================
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerHistoryTimestamp {
    pub cached_at: String,
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerHistoryEntry {
    #[serde(default)]
    pub data: Value,
    pub last_fetched_at: String,
    pub cached_at: String,
    pub uuid: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct HistoryEnvelope<T> {
    pub history: Vec<T>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct HistoryByTimestampRequest<'a> {
    pub timestamp: &'a str,
    pub player_uuid: &'a str,
}

/// ================================
/// Clients & cosmetics
/// ================================
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientType {
    Labymod,
    Essential,
    Badlion,
    Feather,
    Lunar,
    LunarClient,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerClient {
    #[serde(rename = "clientId")]
    pub client_id: String,
    pub client: ClientType,
    /// client specific model, cosmetics shape differs per client
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LunarAsset {
    pub uuid_player: Option<String>,
    pub cosmetic_id: Option<i64>,
    pub cosmetic_name: Option<String>,
    pub cosmetic_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EssentialAsset {
    pub player_uuid: Option<String>,
    pub cosmetic_type: Option<String>,
    pub cosmetic_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BadlionAsset {
    pub uuid_player: Option<String>,
    pub cosmetic_id: Option<i64>,
    pub cosmetic_name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClientCosmetics {
    #[serde(default)]
    pub essential: Vec<EssentialAsset>,
    #[serde(default)]
    pub lunar: Vec<LunarAsset>,
    #[serde(default)]
    pub badlion: Vec<BadlionAsset>,
}

/// ================================
/// Stash: search, ping, mojang
/// ================================
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PingDay {
    pub date: String,
    pub max: f64,
    pub min: f64,
    pub avg: f64,
    #[serde(default)]
    pub history: Vec<f64>,
    pub last_ping: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PingEnvelope {
    pub data: Option<Vec<PingDay>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MojangPlayer {
    pub id: String,
    pub name: String,
}

/// ================================
/// Reports
/// ================================
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReportEnvelope {
    #[serde(default)]
    pub data: Option<Value>,
}

/// Blacklist lookup result. `data` is `None` when the host answered with an error status.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlayerReport {
    pub status: u16,
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AddReportPayload<'a> {
    pub uuid: &'a str,
    pub report_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMode {
    Add,
    Set,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayScore {
    pub value: f64,
    pub mode: Option<ScoreMode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OverlayTag {
    pub icon: Option<String>,
    pub text: Option<String>,
    pub tooltip: Option<String>,
    pub color: Option<i64>,
    #[serde(rename = "textColor")]
    pub text_color: Option<i64>,
}

/// Overlay-friendly report representation shared by several tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StandardOverlayFormat {
    pub score: Option<OverlayScore>,
    pub tags: Option<Vec<OverlayTag>>,
}

/// ================================
/// Account linking
/// ================================
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkedAccount {
    pub snowflake: String,
    pub id: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub snowflake: String,
    pub locale: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchedUserProfile {
    pub user_profile: UserProfile,
    pub linked_accounts: Option<Vec<LinkedAccount>>,
    pub lng: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerVerification {
    pub is_valid: bool,
    pub success: bool,
    pub message: String,
    pub minecraft_uuid: Option<String>,
}
