//! Unified error types for the `fictioneers` crate.
//!
//! This module centralizes all failures that can occur while using the SDK and
//! provides a single top-level [`Error`] enum plus the convenient [`Result`] alias.
//! Errors from lower layers (`reqwest`, `serde_json`, URL parsing) are mapped
//! into structured variants so callers can handle them precisely.

use thiserror::Error;

// --- Build-Time Error ---

/// Errors that can occur while building a [`crate::FictioneersHttpClient`].
#[derive(Debug, Error)]
pub enum BuildError {
    /// Failed to build the HTTP client (reqwest configuration).
    #[error("Failed to build the HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL is not a valid absolute URL.
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

// --- The Main Operational Error Enum ---

/// The crate’s top-level error type.
///
/// It groups failures into high-level categories:
/// - [`Error::InvalidArgument`]: caller supplied an empty or malformed value
/// - [`Error::Authentication`]: the access token exchange was rejected
/// - [`Error::Internal`]: no bearer token could be obtained after a refresh
/// - [`Error::Request`]: a network failure (transport error, non-2xx status or bad JSON)
/// - [`Error::Parse`]: URL composition failed
/// - [`Error::Build`]: construction of the transport failed
///
/// Most lower-level errors automatically convert into this enum via `From`.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied an empty or invalid argument (user id, API key, header text).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Exchanging the API key for an access token failed.
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthError),

    /// Bearer-mode headers could not be assembled because no token was available.
    #[error("Internal error: {0}")]
    Internal(String),

    /// HTTP request/response failed (transport, server status, JSON).
    #[error("Request failed: {0}")]
    Request(#[from] RequestError),

    /// URL parsing failed while preparing a request.
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] url::ParseError),

    /// Building the transport failed.
    #[error("Client build failed: {0}")]
    Build(#[from] BuildError),
}

impl Error {
    /// Returns true for the network failure family: transport errors,
    /// unexpected non-2xx statuses and undecodable response bodies.
    pub fn is_network_failure(&self) -> bool {
        matches!(self, Error::Request(_))
    }

    /// The HTTP status attached to this error, if the remote service answered.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Request(RequestError::Server { status, .. })
            | Error::Authentication(AuthError::Rejected { status, .. }) => Some(*status),
            Error::Request(RequestError::Transport(e)) => e.status(),
            _ => None,
        }
    }
}

// --- Authentication Error ---

/// Errors originating from the access token exchange.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint refused to issue a token for this key and user.
    #[error("Token exchange rejected: {status} - {message}")]
    Rejected {
        /// The HTTP status code returned by the token endpoint.
        status: reqwest::StatusCode,
        /// The response body, or the canonical status reason when it was unreadable.
        message: String,
    },
}

// --- Consolidated Request Error ---

/// Transport and server-side HTTP errors.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Network/protocol failure from reqwest (timeouts, TLS, I/O, etc.).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server returned a non-success status. Includes status and body message.
    #[error("Server responded with an error: {status} - {message}")]
    Server {
        /// The HTTP status code returned by the server.
        status: reqwest::StatusCode,
        /// Short description or the server response body captured for context.
        message: String,
    },

    /// JSON decoding failed when parsing a server response.
    #[error("JSON decode error: {message}")]
    DecodeJson {
        /// Error message from the JSON deserializer.
        message: String,
    },
}

/// A specialized `Result` type for `fictioneers` operations.
pub type Result<T> = std::result::Result<T, Error>;

// A macro to reduce boilerplate for converting base errors into the top-level Error.
macro_rules! impl_from_for_error {
    ($from_type:ty, $to_variant:path) => {
        impl From<$from_type> for Error {
            fn from(err: $from_type) -> Self {
                $to_variant(err.into())
            }
        }
    };
}

impl_from_for_error!(reqwest::Error, Error::Request);

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::DecodeJson {
            message: err.to_string(),
        }
    }
}

impl_from_for_error!(serde_json::Error, Error::Request);
