use std::time::Duration;

use url::Url;

use crate::errors::BuildError;

const DEFAULT_USER_AGENT: &str = concat!("fictioneers-sdk", "@", env!("CARGO_PKG_VERSION"),);

/// Production Fictioneers API host. Requests go to `<base>/v<api_version>/...`.
pub const DEFAULT_BASE_URL: &str = "https://api.fictioneers.co.uk";

/// API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "1";

#[derive(Debug, Clone)]
#[must_use]
/// Configures a [`FictioneersHttpClient`] before construction.
///
/// Customize the API host and version, timeouts and user-agent.
/// Most code obtains this via [`FictioneersHttpClient::builder()`], which simply returns
/// `FictioneersHttpClientBuilder::default()`.
///
/// # Defaults
/// - Base URL: [`DEFAULT_BASE_URL`]
/// - API version: [`DEFAULT_API_VERSION`]
/// - HTTP request timeout: reqwest default (no global timeout) unless set via
///   [`Self::request_timeout`]
/// - User-agent: `fictioneers-sdk@<crate-version>` plus any [`Self::user_agent_extra`]
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// # use fictioneers::FictioneersHttpClient;
/// let client = FictioneersHttpClient::builder()
///     .request_timeout(Duration::from_secs(10))
///     .user_agent_extra("myapp/1.2.3")
///     .build()?;
/// # Ok::<_, fictioneers::BuildError>(())
/// ```
#[derive(Default)]
pub struct FictioneersHttpClientBuilder {
    base_url: Option<String>,
    api_version: Option<String>,
    http_request_timeout: Option<Duration>,

    /// Optional user-agent segment appended to the default UA for app-level telemetry.
    user_agent_extra: Option<String>,
}

impl FictioneersHttpClientBuilder {
    /// Point the client at another API host, e.g. a staging deployment or a local mock.
    pub fn base_url<S: Into<String>>(&mut self, base_url: S) -> &mut Self {
        self.base_url = Some(base_url.into());

        self
    }

    /// Select the API version segment (`"1"` produces `/v1`).
    pub fn api_version<S: Into<String>>(&mut self, version: S) -> &mut Self {
        self.api_version = Some(version.into());

        self
    }

    /// Set HTTP requests timeout.
    pub fn request_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.http_request_timeout = Some(timeout);

        self
    }

    /// Append an extra user-agent segment after the default `fictioneers-sdk@<version>`.
    /// Example: `.user_agent_extra("myapp/1.2.3")`
    pub fn user_agent_extra<S: Into<String>>(&mut self, extra: S) -> &mut Self {
        self.user_agent_extra = Some(extra.into());
        self
    }

    /// Build [`FictioneersHttpClient`]
    pub fn build(&self) -> Result<FictioneersHttpClient, BuildError> {
        let base = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        let version = self
            .api_version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_VERSION);
        let api_base = Url::parse(&format!(
            "{}/v{version}",
            base.as_str().trim_end_matches('/')
        ))?;

        // Compose user agent with optional extra part.
        let user_agent = match &self.user_agent_extra {
            Some(extra) if !extra.trim().is_empty() => {
                &format!("{DEFAULT_USER_AGENT} {}", extra.trim())
            }
            _ => DEFAULT_USER_AGENT,
        };

        #[cfg(not(target_arch = "wasm32"))]
        let mut http_builder = reqwest::Client::builder().user_agent(user_agent);

        #[cfg(target_arch = "wasm32")]
        let http_builder = reqwest::Client::builder().user_agent(user_agent);

        // reqwest has no per-client timeout on wasm; the browser owns it there.
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.http_request_timeout {
            http_builder = http_builder.timeout(timeout);
        }

        Ok(FictioneersHttpClient {
            http: http_builder.build()?,
            api_base,
        })
    }
}

/// Transport client for the Fictioneers REST API.
///
/// `FictioneersHttpClient` is the low-level, stateless engine the
/// [`crate::Fictioneers`] session is built on. It owns a reqwest client and the
/// versioned API base URL. It is **not** identity aware: no API key, no tokens.
/// Authentication headers are attached by the session.
///
/// Clones are cheap and share the underlying connection pool.
///
/// ### Examples
/// ```no_run
/// # use fictioneers::FictioneersHttpClient;
/// let client = FictioneersHttpClient::new()?;
/// assert_eq!(client.api_base().as_str(), "https://api.fictioneers.co.uk/v1");
/// # Ok::<_, fictioneers::BuildError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FictioneersHttpClient {
    pub(crate) http: reqwest::Client,
    pub(crate) api_base: Url,
}

impl FictioneersHttpClient {
    /// Creates a client for the production API with default settings.
    pub fn new() -> Result<FictioneersHttpClient, BuildError> {
        Self::builder().build()
    }

    /// Returns a builder to edit settings before creating [`FictioneersHttpClient`].
    pub fn builder() -> FictioneersHttpClientBuilder {
        FictioneersHttpClientBuilder::default()
    }

    // === Getters ===

    /// The versioned API base, e.g. `https://api.fictioneers.co.uk/v1`.
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_api_base() {
        let client = FictioneersHttpClient::new().unwrap();
        assert_eq!(
            client.api_base().as_str(),
            "https://api.fictioneers.co.uk/v1"
        );
    }

    #[test]
    fn custom_base_and_version() {
        let client = FictioneersHttpClient::builder()
            .base_url("http://127.0.0.1:8080/")
            .api_version("2")
            .build()
            .unwrap();
        assert_eq!(client.api_base().as_str(), "http://127.0.0.1:8080/v2");
    }

    #[test]
    fn blank_version_falls_back_to_default() {
        let client = FictioneersHttpClient::builder()
            .api_version("  ")
            .build()
            .unwrap();
        assert!(client.api_base().as_str().ends_with("/v1"));
    }

    #[test]
    fn invalid_base_url() {
        let err = FictioneersHttpClient::builder()
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::BaseUrl(_)));
    }
}
