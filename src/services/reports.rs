use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use http::Method;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::service::AuthService;
use crate::error::{ApiError, ApiResult, ConfigError};
use crate::models::{AddReportPayload, PlayerReport, ReportEnvelope, StandardOverlayFormat};
use crate::services::request::{AuthScheme, ServiceRequester};
use crate::utils::constants::API_KEY_HEADER;

const SERVICE: &str = "reports";

/// Moderation report categories.
///
/// Targeting-based (legacy) categories are still accepted, the cheating ones are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Sniping,
    CheatingBlatant,
    CheatingCloset,
    SnipingLegit,
    SnipingPotential,
    Alt,
    AnnoyList,
    Bot,
    Caution,
}

impl ReportType {
    pub const ALL: [ReportType; 9] = [
        ReportType::Sniping,
        ReportType::CheatingBlatant,
        ReportType::CheatingCloset,
        ReportType::SnipingLegit,
        ReportType::SnipingPotential,
        ReportType::Alt,
        ReportType::AnnoyList,
        ReportType::Bot,
        ReportType::Caution,
    ];

    /// Name used on the wire.
    pub fn seraph_name(&self) -> &'static str {
        match self {
            ReportType::Sniping => "sniping",
            ReportType::CheatingBlatant => "cheating_blatant",
            ReportType::CheatingCloset => "cheating_closet",
            ReportType::SnipingLegit => "sniping_legit",
            ReportType::SnipingPotential => "sniping_potential",
            ReportType::Alt => "alt",
            ReportType::AnnoyList => "annoy_list",
            ReportType::Bot => "bot",
            ReportType::Caution => "caution",
        }
    }

    pub fn clean_name(&self) -> &'static str {
        match self {
            ReportType::Sniping => "Sniping",
            ReportType::CheatingBlatant => "Blatant Cheater",
            ReportType::CheatingCloset => "Closet Cheater",
            ReportType::SnipingLegit => "Legit Sniper",
            ReportType::SnipingPotential => "Possible Sniper",
            ReportType::Alt => "Alt",
            ReportType::AnnoyList => "Annoy List",
            ReportType::Bot => "Botting",
            ReportType::Caution => "Caution",
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(
            self,
            ReportType::Sniping
                | ReportType::SnipingLegit
                | ReportType::SnipingPotential
                | ReportType::AnnoyList
                | ReportType::Bot
        )
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.seraph_name())
    }
}

impl FromStr for ReportType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportType::ALL
            .into_iter()
            .find(|t| t.seraph_name() == s)
            .ok_or_else(|| ConfigError::InvalidReportType(s.to_owned()))
    }
}

/// Catalogue entry as exposed to callers.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportTypeInfo {
    pub seraph_name: &'static str,
    pub clean_name: &'static str,
    pub legacy: bool,
}

/// Blacklist lookups and report submission.
///
/// The credential travels in the `seraph-api-key` header without the bearer prefix.
#[derive(Debug, Clone)]
pub struct PlayerReportService {
    requester: ServiceRequester,
}

impl PlayerReportService {
    pub fn new(client: Client, auth: Arc<AuthService>, base_url: &str) -> Self {
        Self {
            requester: ServiceRequester::new(
                SERVICE,
                client,
                Some(auth),
                base_url,
                AuthScheme::Header(API_KEY_HEADER),
            ),
        }
    }

    /// Raw blacklist record of a player with the response status.
    ///
    /// An error status yields a report without data, `None` means no usable response.
    pub async fn fetch_player_report(&self, player_id: &str) -> Option<PlayerReport> {
        let path = format!("/blacklist/{}", player_id);
        match self
            .requester
            .get_with_status::<ReportEnvelope>("fetch_player_report", &path)
            .await
        {
            Ok((status, envelope)) => Some(PlayerReport {
                status: status.as_u16(),
                data: envelope.data,
            }),
            Err(ApiError::Status { status, .. }) => Some(PlayerReport {
                status: status.as_u16(),
                data: None,
            }),
            Err(_) => None,
        }
    }

    pub async fn fetch_formatted_player_report(&self, player_id: &str) -> Option<StandardOverlayFormat> {
        self.requester
            .get("fetch_formatted_player_report", &format!("/cubelify/blacklist/{}", player_id))
            .await
            .ok()
    }

    /// Submit a report. A rejected submission comes back as an error holding the response body.
    pub async fn report_player(
        &self,
        player_id: &str,
        report_type: ReportType,
        reason: Option<&str>,
    ) -> ApiResult<()> {
        let payload = AddReportPayload {
            uuid: player_id,
            report_type: report_type.seraph_name(),
            reason,
        };
        self.requester
            .send_raw("report_player", Method::POST, "/report", Some(&payload))
            .await?;
        info!(report_type = %report_type, "report submitted");
        Ok(())
    }

    pub fn report_types(&self) -> Vec<ReportTypeInfo> {
        ReportType::ALL
            .iter()
            .map(|t| ReportTypeInfo {
                seraph_name: t.seraph_name(),
                clean_name: t.clean_name(),
                legacy: t.is_legacy(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ReportType;
    use std::str::FromStr;

    #[test]
    fn wire_names_match_serde_names() {
        for report_type in ReportType::ALL {
            let json = serde_json::to_value(report_type).unwrap();
            assert_eq!(json, report_type.seraph_name());
            assert_eq!(ReportType::from_str(report_type.seraph_name()).unwrap(), report_type);
        }
    }

    #[test]
    fn unknown_report_type_is_rejected() {
        assert!("cheating".parse::<ReportType>().is_err());
        assert!("Blatant Cheater".parse::<ReportType>().is_err());
    }

    #[test]
    fn legacy_flags() {
        let legacy: Vec<_> = ReportType::ALL.into_iter().filter(|t| t.is_legacy()).collect();
        assert_eq!(legacy.len(), 5);
        assert!(!ReportType::CheatingBlatant.is_legacy());
        assert!(ReportType::AnnoyList.is_legacy());
    }
}
