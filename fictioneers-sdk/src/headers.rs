use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use web_time::SystemTime;

use crate::{
    Fictioneers, Result,
    errors::Error,
    session::credentials::ApiKey,
};

/// Names the acting user when a secret key calls a per-user endpoint.
pub const USER_ID_HEADER: HeaderName = HeaderName::from_static("x-fictioneers-user-id");

/// How a request proves who is calling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthMode {
    /// Raw API key in `Authorization`. Timeline management; needs a secret key.
    Key,
    /// Acting as the session user: secret keys add [`USER_ID_HEADER`], public
    /// keys send a cached or freshly exchanged bearer token.
    Bearer,
}

fn common_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

fn header_value(value: &str, what: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::InvalidArgument(format!("{what} is not a valid header value: {e}")))
}

impl Fictioneers {
    /// JSON headers plus the raw API key.
    pub(crate) fn key_headers(&self) -> Result<HeaderMap> {
        let mut headers = common_headers();
        let mut key = header_value(self.api_key().as_str(), "API key")?;
        key.set_sensitive(true);
        headers.insert(AUTHORIZATION, key);
        Ok(headers)
    }

    /// Headers for a request in the given auth mode.
    ///
    /// Only bearer mode with a public key can touch the network, and only when
    /// no valid token is cached.
    pub(crate) async fn compose_headers(&self, mode: AuthMode) -> Result<HeaderMap> {
        match (mode, self.api_key()) {
            (AuthMode::Key, _) => self.key_headers(),
            (AuthMode::Bearer, ApiKey::Secret(_)) => {
                let mut headers = self.key_headers()?;
                headers.insert(USER_ID_HEADER, header_value(&self.user_id(), "user id")?);
                Ok(headers)
            }
            (AuthMode::Bearer, ApiKey::Public(_)) => {
                let token = self.bearer_token().await?;
                let mut headers = common_headers();
                let mut bearer = header_value(&format!("Bearer {token}"), "access token")?;
                bearer.set_sensitive(true);
                headers.insert(AUTHORIZATION, bearer);
                Ok(headers)
            }
        }
    }

    /// A valid cached token, exchanging a new one when absent or expired.
    async fn bearer_token(&self) -> Result<String> {
        if let Some(token) = self.credentials.valid_token_at(SystemTime::now()) {
            return Ok(token);
        }
        self.refresh_access_token().await?;

        self.credentials
            .access_token()
            .map(|token| token.as_str().to_string())
            .ok_or_else(|| Error::Internal("no access token available after refresh".into()))
    }
}
