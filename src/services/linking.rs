use std::sync::Arc;

use http::Method;
use reqwest::Client;

use crate::auth::service::AuthService;
use crate::error::ApiResult;
use crate::models::{FetchedUserProfile, LinkedAccount, ServerVerification, UserProfile, UserProfilePatch};
use crate::services::request::{AuthScheme, ServiceRequester};

const SERVICE: &str = "linking";

/// Discord ↔ Minecraft account linking.
///
/// Every operation, reads included, reports a non-success response as an
/// error carrying the response body.
#[derive(Debug, Clone)]
pub struct PlayerLinkingService {
    requester: ServiceRequester,
}

impl PlayerLinkingService {
    pub fn new(client: Client, auth: Arc<AuthService>, base_url: &str) -> Self {
        Self {
            requester: ServiceRequester::new(SERVICE, client, Some(auth), base_url, AuthScheme::Bearer),
        }
    }

    pub async fn send_link_request(&self, account: &LinkedAccount) -> ApiResult<LinkedAccount> {
        let path = format!("/v1/user/{}/link", account.snowflake);
        self.requester
            .send("send_link_request", Method::PUT, &path, Some(account))
            .await
    }

    pub async fn fetch_linked_accounts(&self, snowflake: &str) -> ApiResult<Vec<LinkedAccount>> {
        self.requester
            .get("fetch_linked_accounts", &format!("/v1/user/{}", snowflake))
            .await
    }

    pub async fn fetch_user_profile(&self, snowflake: &str) -> ApiResult<FetchedUserProfile> {
        self.requester
            .get("fetch_user_profile", &format!("/v1/user/{}/profile", snowflake))
            .await
    }

    pub async fn update_user_profile(
        &self,
        snowflake: &str,
        patch: &UserProfilePatch,
    ) -> ApiResult<UserProfile> {
        let path = format!("/v1/user/{}/profile", snowflake);
        self.requester
            .send("update_user_profile", Method::PATCH, &path, Some(patch))
            .await
    }

    pub async fn fetch_server_verification_by_code(&self, code: &str) -> ApiResult<ServerVerification> {
        self.requester
            .get("fetch_server_verification_by_code", &format!("/v1/verification/code/{}", code))
            .await
    }

    /// Trigger a prefix resync for a Minecraft UUID or Discord snowflake.
    pub async fn update_user_prefix_by_id(&self, uuid_or_snowflake: &str) -> ApiResult<()> {
        let path = format!("/v1/sync/rotational/prefix/{}", uuid_or_snowflake);
        self.requester
            .send_raw("update_user_prefix_by_id", Method::PATCH, &path, None::<&()>)
            .await
            .map(|_| ())
    }
}
