//! High-level façade for the Fictioneers crate.
//!
//! ## Mental model
//! - `Fictioneers` - your handle to the API for one API key acting as one user.
//!   Owns a `FictioneersHttpClient` and the credentials (key, user id, cached token).
//! - Timeline management calls (`list_timelines`, `get_timeline_user`, ...) need a
//!   secret (`s_…`) key and are authenticated with the key itself.
//! - Per-user calls (`get_user`, `progress_user_step`, ...) work with either key kind.
//!   Secret keys name the user in a header; public keys are exchanged for a
//!   bearer token that is cached and refreshed on demand.
//!
//! ## Quick start
//! ```no_run
//! use fictioneers::{Fictioneers, NewUser};
//!
//! # async fn run() -> fictioneers::Result<()> {
//! let sdk = Fictioneers::builder("p_live_abc").user_id("player-42").build()?;
//!
//! let state = sdk
//!     .initialise_and_progress_user(&NewUser::new("timeline-id").max_steps(1))
//!     .await?;
//! println!("{} events", state.user_timeline_events.data().map_or(0, Vec::len));
//! # Ok(()) }
//! ```

use std::fmt;
use std::sync::Arc;

use crate::{
    FictioneersHttpClient, Result, cross_log,
    errors::Error,
    global::global_client,
    identity::random_user_id,
    session::{
        credentials::{ApiKey, CredentialStore},
        token::AccessToken,
    },
};

/// Configures a [`Fictioneers`] session before construction.
#[derive(Clone)]
#[must_use]
pub struct FictioneersBuilder {
    api_key: String,
    user_id: Option<String>,
    client: Option<FictioneersHttpClient>,
}

impl fmt::Debug for FictioneersBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FictioneersBuilder")
            .field("api_key", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("client", &self.client)
            .finish()
    }
}

impl FictioneersBuilder {
    /// Act as this user. Defaults to a random v4 UUID.
    pub fn user_id<S: Into<String>>(mut self, user_id: S) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Use an explicit transport instead of the process-wide [`global_client`].
    pub fn client(mut self, client: FictioneersHttpClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the session.
    ///
    /// Fails with [`Error::InvalidArgument`] for an empty API key or user id.
    pub fn build(self) -> Result<Fictioneers> {
        let api_key = ApiKey::parse(self.api_key)?;
        let user_id = match self.user_id {
            Some(id) if id.is_empty() => {
                return Err(Error::InvalidArgument("user id must not be empty".into()));
            }
            Some(id) => id,
            None => random_user_id(),
        };
        let client = match self.client {
            Some(client) => client,
            None => global_client()?,
        };

        Ok(Fictioneers {
            client,
            credentials: Arc::new(CredentialStore::new(api_key, user_id)),
        })
    }
}

/// A Fictioneers API session: one API key acting as one user.
///
/// Clones are cheap and share the same credentials, so a user id change or a
/// token refresh on one clone is seen by all of them. Separate sessions built
/// from the builder never share state.
///
/// Concurrent calls needing a fresh token may each perform their own token
/// exchange; whichever finishes last is cached.
#[derive(Clone, Debug)]
pub struct Fictioneers {
    pub(crate) client: FictioneersHttpClient,
    pub(crate) credentials: Arc<CredentialStore>,
}

impl Fictioneers {
    /// Session for `api_key` on the global transport, acting as `user_id` or,
    /// when `None`, a freshly generated user id.
    pub fn new<S: Into<String>>(api_key: S, user_id: Option<&str>) -> Result<Self> {
        let builder = Self::builder(api_key);
        match user_id {
            Some(id) => builder.user_id(id),
            None => builder,
        }
        .build()
    }

    /// Start configuring a session for `api_key`.
    pub fn builder<S: Into<String>>(api_key: S) -> FictioneersBuilder {
        FictioneersBuilder {
            api_key: api_key.into(),
            user_id: None,
            client: None,
        }
    }

    /// The user this session acts as.
    pub fn user_id(&self) -> String {
        self.credentials.user_id()
    }

    /// Act as another user from now on.
    ///
    /// Setting the current id again does nothing. Otherwise the cached access
    /// token is dropped and, for public keys, a token for the new user is
    /// fetched right away; an exchange failure is returned but the new id stays
    /// in effect and the next bearer call retries the exchange.
    pub async fn set_user_id(&self, user_id: &str) -> Result<()> {
        if !self.credentials.replace_user_id(user_id)? {
            return Ok(());
        }
        cross_log!(debug, "Switched Fictioneers session user");

        if !self.credentials.api_key().is_secret() {
            self.refresh_access_token().await?;
        }
        Ok(())
    }

    /// The API key this session authenticates with.
    pub fn api_key(&self) -> &ApiKey {
        self.credentials.api_key()
    }

    /// The cached access token, if one has been exchanged (it may have expired).
    pub fn access_token(&self) -> Option<AccessToken> {
        self.credentials.access_token()
    }

    /// Access the underlying transport (advanced use).
    #[inline]
    pub fn client(&self) -> &FictioneersHttpClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn client_for(server: &MockServer) -> FictioneersHttpClient {
        FictioneersHttpClient::builder()
            .base_url(server.base_url())
            .build()
            .unwrap()
    }

    #[test]
    fn default_user_id_is_uuid_v4() {
        let sdk = Fictioneers::builder("p_key")
            .client(FictioneersHttpClient::new().unwrap())
            .build()
            .unwrap();
        let id = uuid::Uuid::parse_str(&sdk.user_id()).unwrap();
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn rejects_empty_inputs() {
        assert!(matches!(
            Fictioneers::builder("").build(),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Fictioneers::builder("s_key").user_id("").build(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn new_uses_given_or_random_user_id() {
        let named = Fictioneers::new("s_key", Some("player-7")).unwrap();
        assert_eq!(named.user_id(), "player-7");

        let random = Fictioneers::new("p_key", None).unwrap();
        assert!(uuid::Uuid::parse_str(&random.user_id()).is_ok());

        assert!(matches!(
            Fictioneers::new("p_key", Some("")),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn clones_share_credentials() {
        let sdk = Fictioneers::builder("s_key")
            .user_id("u1")
            .client(FictioneersHttpClient::new().unwrap())
            .build()
            .unwrap();
        let other = sdk.clone();
        assert!(sdk.credentials.replace_user_id("u2").unwrap());
        assert_eq!(other.user_id(), "u2");
    }

    #[tokio::test]
    async fn set_same_user_id_is_a_no_op() {
        let server = MockServer::start_async().await;
        let exchange = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/auth/token");
                then.status(200)
                    .json_body(json!({"access_token": "t1", "expires_in": 3600}));
            })
            .await;

        let sdk = Fictioneers::builder("p_key")
            .user_id("u1")
            .client(client_for(&server))
            .build()
            .unwrap();
        sdk.refresh_access_token().await.unwrap();
        let before = sdk.access_token().unwrap();

        sdk.set_user_id("u1").await.unwrap();

        assert_eq!(sdk.user_id(), "u1");
        assert_eq!(sdk.access_token(), Some(before));
        exchange.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn set_user_id_refreshes_eagerly_for_public_keys() {
        let server = MockServer::start_async().await;
        let first = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/auth/token")
                    .json_body(json!({"user_id": "u1"}));
                then.status(200)
                    .json_body(json!({"access_token": "for-u1", "expires_in": 3600}));
            })
            .await;
        let second = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/auth/token")
                    .json_body(json!({"user_id": "u2"}));
                then.status(200)
                    .json_body(json!({"access_token": "for-u2", "expires_in": 3600}));
            })
            .await;

        let sdk = Fictioneers::builder("p_key")
            .user_id("u1")
            .client(client_for(&server))
            .build()
            .unwrap();
        sdk.refresh_access_token().await.unwrap();

        sdk.set_user_id("u2").await.unwrap();

        assert_eq!(sdk.user_id(), "u2");
        assert_eq!(sdk.access_token().unwrap().as_str(), "for-u2");
        first.assert_hits_async(1).await;
        second.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn failed_eager_refresh_keeps_new_user_id() {
        let server = MockServer::start_async().await;
        let exchange = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/auth/token")
                    .json_body(json!({"user_id": "u2"}));
                then.status(401).body("unknown key");
            })
            .await;

        let sdk = Fictioneers::builder("p_key")
            .user_id("u1")
            .client(client_for(&server))
            .build()
            .unwrap();

        let err = sdk.set_user_id("u2").await.unwrap_err();

        assert!(matches!(err, Error::Authentication(_)));
        assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
        assert_eq!(sdk.user_id(), "u2");
        assert!(sdk.access_token().is_none());
        exchange.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn set_user_id_with_secret_key_skips_exchange() {
        let server = MockServer::start_async().await;
        let exchange = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/auth/token");
                then.status(200)
                    .json_body(json!({"access_token": "t", "expires_in": 3600}));
            })
            .await;

        let sdk = Fictioneers::builder("s_key")
            .user_id("u1")
            .client(client_for(&server))
            .build()
            .unwrap();
        sdk.set_user_id("u2").await.unwrap();

        assert_eq!(sdk.user_id(), "u2");
        assert!(sdk.access_token().is_none());
        exchange.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn empty_user_id_is_rejected() {
        let sdk = Fictioneers::builder("p_key")
            .user_id("u1")
            .client(FictioneersHttpClient::new().unwrap())
            .build()
            .unwrap();
        assert!(matches!(
            sdk.set_user_id("").await,
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(sdk.user_id(), "u1");
    }
}
