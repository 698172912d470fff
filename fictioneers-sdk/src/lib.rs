#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod auth;
mod client;
mod dispatch;
mod endpoints;
pub mod errors;
mod global;
mod headers;
mod identity;
mod macros;
pub mod models;
mod response;
mod sdk;
mod session;
mod util;
mod workflow;

pub mod prelude;

// --- PUBLIC API EXPORTS ---
// Transport
pub use client::core::{
    DEFAULT_API_VERSION, DEFAULT_BASE_URL, FictioneersHttpClient, FictioneersHttpClientBuilder,
};
// Session
pub use sdk::{Fictioneers, FictioneersBuilder};
pub use session::credentials::{ApiKey, SECRET_KEY_PREFIX};
pub use session::token::{AccessToken, AccessTokenGrant, EXPIRY_SAFETY_MARGIN};
pub use headers::USER_ID_HEADER;

// Requests and responses
pub use dispatch::DEPRECATION_NOTICE;
pub use endpoints::{DEFAULT_TIMEZONE, NewUser, ProgressStep, UserUpdate};
pub use response::{ApiResponse, DeleteResponse, Envelope};
pub use workflow::InitialisedUser;

// Error and global client
pub use errors::{BuildError, Error, Result};
pub use global::{drop_global_client, global_client, set_global_client};

// Re-exports
pub use reqwest::{Method, StatusCode};

// Logging backends used by `cross_log!` from downstream crates.
#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub use log as __log;
#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
pub use tracing as __tracing;
