use crate::{GuildId, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the bot backend.
///
/// Authentication is a bearer token the OAuth flow leaves with the
/// client; requests made without one are rejected by the backend with
/// 401.
pub struct APIClient {
    pub address: String,
    pub token: Option<String>,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            token: None,
            inner_client: reqwest::Client::new(),
        }
    }

    pub fn with_token(
        address: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            token: Some(token.into()),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    /// The identity verification flow is mounted outside the /api scope.
    fn format_root_url(&self, path: &str) -> String {
        format!("{}/{path}", &self.address)
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self
            .authorize(self.inner_client.post(self.format_url(path)))
            .json(body);
        request.send().await
    }

    async fn post_root(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ReqwestResult {
        let request = self
            .authorize(self.inner_client.post(self.format_root_url(path)))
            .json(body);
        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request =
            self.authorize(self.inner_client.get(self.format_url(path)));
        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Check that the API is responsive.
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    /// Get the authenticated user.
    pub async fn current_user(
        &self,
    ) -> Result<responses::CurrentUser, ClientError> {
        let response = self.empty_get("auth/user").await?;
        ok_body(response).await
    }

    /// Get the authenticated user's guild list, annotated with bot
    /// presence and manageability.
    pub async fn user_guilds(
        &self,
    ) -> Result<Vec<responses::GuildSummary>, ClientError> {
        let response = self.empty_get("auth/guilds").await?;
        ok_body(response).await
    }

    /// Get the cross-guild profile the bot network keeps for the user.
    pub async fn profile_details(
        &self,
    ) -> Result<responses::ProfileDetails, ClientError> {
        let response = self.empty_get("profile/details").await?;
        ok_body(response).await
    }

    /// Get the guild, its roles and channels, and any saved settings.
    pub async fn guild_details(
        &self,
        guild_id: &GuildId,
    ) -> Result<responses::GuildDetails, ClientError> {
        let response =
            self.empty_get(&format!("guild/{guild_id}/details")).await?;
        ok_body(response).await
    }

    pub async fn save_verification_settings(
        &self,
        details: &requests::SaveVerificationSettings,
    ) -> Result<(), ClientError> {
        let response = self.post("settings/verification", details).await?;
        ok_empty(response).await
    }

    pub async fn save_moderation_settings(
        &self,
        details: &requests::SaveModerationSettings,
    ) -> Result<(), ClientError> {
        let response = self.post("settings/moderation", details).await?;
        ok_empty(response).await
    }

    pub async fn save_logging_settings(
        &self,
        details: &requests::SaveLoggingSettings,
    ) -> Result<(), ClientError> {
        let response = self.post("settings/logging", details).await?;
        ok_empty(response).await
    }

    pub async fn save_auto_role_settings(
        &self,
        details: &requests::SaveAutoRoleSettings,
    ) -> Result<(), ClientError> {
        let response = self.post("settings/autorole", details).await?;
        ok_empty(response).await
    }

    pub async fn save_staff_settings(
        &self,
        details: &requests::SaveStaffSettings,
    ) -> Result<(), ClientError> {
        let response = self.post("settings/staff", details).await?;
        ok_empty(response).await
    }

    /// Post or refresh the verification embed in the guild's configured
    /// verification channel. Fails when no channel is configured.
    pub async fn post_verification_embed(
        &self,
        details: &requests::PostVerificationEmbed,
    ) -> Result<(), ClientError> {
        let response =
            self.post("settings/verification/embed", details).await?;
        ok_empty(response).await
    }

    /// Create a hosted identity-verification session for the user.
    pub async fn create_verification_session(
        &self,
        details: &requests::CreateVerificationSession,
    ) -> Result<responses::VerificationSession, ClientError> {
        let response = self
            .post_root("stripe/create-verification-session", details)
            .await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
