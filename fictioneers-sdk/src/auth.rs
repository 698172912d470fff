use reqwest::Method;
use serde::Serialize;
use web_time::SystemTime;

use crate::{
    Fictioneers, Result, cross_log,
    errors::AuthError,
    session::token::{AccessToken, AccessTokenGrant},
    util::error_message,
};

/// Token exchange endpoint, relative to the versioned API base.
pub(crate) const TOKEN_PATH: &str = "/auth/token";

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    user_id: &'a str,
}

impl Fictioneers {
    /// Exchange the API key for a fresh access token for the current user and
    /// cache it.
    ///
    /// A token minted for a user id that was replaced while the exchange was in
    /// flight is dropped instead of cached.
    pub(crate) async fn refresh_access_token(&self) -> Result<()> {
        let user_id = self.credentials.user_id();
        let grant = self.exchange_token(&user_id).await?;
        let token = AccessToken::from_grant(grant, SystemTime::now());

        if !self.credentials.store_token(&user_id, token) {
            cross_log!(debug, "Discarded access token minted for a replaced user id");
        }
        Ok(())
    }

    /// `POST /auth/token` with key-mode headers.
    ///
    /// Non-2xx answers become [`AuthError::Rejected`]; nothing is retried.
    async fn exchange_token(&self, user_id: &str) -> Result<AccessTokenGrant> {
        let url = self.client.endpoint(TOKEN_PATH)?;
        cross_log!(debug, "Exchanging API key for an access token");

        let response = self
            .client
            .request(Method::POST, url)
            .headers(self.key_headers()?)
            .json(&TokenRequest { user_id })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response).await;
            cross_log!(warn, "Access token exchange rejected: {status}");
            return Err(AuthError::Rejected { status, message }.into());
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
