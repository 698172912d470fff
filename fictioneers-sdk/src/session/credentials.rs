use std::fmt;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use web_time::SystemTime;

use super::token::AccessToken;
use crate::errors::{Error, Result};

/// Prefix carried by server-side secret keys.
pub const SECRET_KEY_PREFIX: &str = "s_";

/// A Fictioneers API key, classified once when parsed.
///
/// Secret keys (`s_…`) prove server-side trust and may act for any user by
/// naming them in a header. Every other key is public and must be exchanged
/// for a per-user bearer token.
#[derive(Clone, PartialEq, Eq)]
pub enum ApiKey {
    /// Server-side key, sent verbatim.
    Secret(String),
    /// Client key, exchanged for short-lived bearer tokens.
    Public(String),
}

impl ApiKey {
    /// Classify a raw key. Fails with [`Error::InvalidArgument`] when blank.
    pub fn parse<S: Into<String>>(raw: S) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(Error::InvalidArgument("API key must not be empty".into()));
        }
        Ok(if raw.starts_with(SECRET_KEY_PREFIX) {
            ApiKey::Secret(raw)
        } else {
            ApiKey::Public(raw)
        })
    }

    /// The raw key, as sent in the `Authorization` header.
    pub fn as_str(&self) -> &str {
        match self {
            ApiKey::Secret(key) | ApiKey::Public(key) => key,
        }
    }

    /// True for `s_…` keys.
    pub fn is_secret(&self) -> bool {
        matches!(self, ApiKey::Secret(_))
    }
}

impl FromStr for ApiKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_secret() { "Secret" } else { "Public" };
        let prefix: String = self.as_str().chars().take(4).collect();
        write!(f, "ApiKey::{kind}(\"{prefix}…\")")
    }
}

#[derive(Debug)]
struct SessionState {
    user_id: String,
    access_token: Option<AccessToken>,
}

/// Holds the API key, the acting user and the cached access token.
///
/// The lock is only ever taken for short synchronous sections, never across a
/// network call.
#[derive(Debug)]
pub(crate) struct CredentialStore {
    api_key: ApiKey,
    state: RwLock<SessionState>,
}

impl CredentialStore {
    pub(crate) fn new(api_key: ApiKey, user_id: String) -> Self {
        Self {
            api_key,
            state: RwLock::new(SessionState {
                user_id,
                access_token: None,
            }),
        }
    }

    pub(crate) fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub(crate) fn user_id(&self) -> String {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user_id
            .clone()
    }

    /// Swap the acting user and drop the cached token.
    ///
    /// Returns `false`, leaving everything untouched, when `new_id` is already
    /// the current user.
    pub(crate) fn replace_user_id(&self, new_id: &str) -> Result<bool> {
        if new_id.is_empty() {
            return Err(Error::InvalidArgument("user id must not be empty".into()));
        }
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.user_id == new_id {
            return Ok(false);
        }
        state.user_id = new_id.to_string();
        state.access_token = None;
        Ok(true)
    }

    /// The cached token, if any, regardless of expiry.
    pub(crate) fn access_token(&self) -> Option<AccessToken> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .access_token
            .clone()
    }

    /// The cached token value if it is still valid at `now`.
    pub(crate) fn valid_token_at(&self, now: SystemTime) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .access_token
            .as_ref()
            .filter(|token| token.is_valid_at(now))
            .map(|token| token.as_str().to_string())
    }

    /// Cache a token exchanged for `for_user`.
    ///
    /// Tokens minted for a user that is no longer current are discarded and
    /// `false` is returned.
    pub(crate) fn store_token(&self, for_user: &str, token: AccessToken) -> bool {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.user_id != for_user {
            return false;
        }
        state.access_token = Some(token);
        true
    }
}
