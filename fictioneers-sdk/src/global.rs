//! Global, resettable `FictioneersHttpClient` shared by SDK sessions.
//!
//! Most applications create one [`crate::Fictioneers`] session per API key and
//! user, and want them all to reuse a single transport stack (connection pool,
//! TLS state) without threading a client through their code. This module
//! provides a process-wide, lazily initialized, resettable client that
//! [`crate::Fictioneers::new`] picks up.
//!
//! - **Reads are lock-free**; `global_client()` does a single atomic load and
//!   returns a cheap clone of the current client.
//! - **Reset is safe**; `set_global_client`/`drop_global_client` publish a new
//!   instance (or `None`). Sessions built earlier keep their own clone.
//! - **Init is fallible** and returns `BuildError` instead of panicking.
//! - **Init is first-writer-wins**; threads racing on an empty slot may each
//!   build a client, but only the first one published is kept and every racer
//!   returns that one.
//!
//! # Examples
//! Point every new session at a staging host:
//! ```
//! # use fictioneers::{FictioneersHttpClient, global_client, set_global_client};
//! let staging = FictioneersHttpClient::builder()
//!     .base_url("https://staging.example.com")
//!     .build()?;
//! set_global_client(staging);
//! assert!(global_client()?.api_base().as_str().starts_with("https://staging"));
//! # Ok::<(), fictioneers::BuildError>(())
//! ```

use arc_swap::ArcSwapOption;
use std::sync::{Arc, OnceLock};

use crate::{BuildError, FictioneersHttpClient, cross_log};

static DEFAULT_CLIENT: OnceLock<ArcSwapOption<FictioneersHttpClient>> = OnceLock::new();

fn default_slot() -> &'static ArcSwapOption<FictioneersHttpClient> {
    DEFAULT_CLIENT.get_or_init(|| ArcSwapOption::from(None))
}

/// Publish `built` unless the slot already holds a client; returns the one kept.
fn install_if_empty(
    slot: &ArcSwapOption<FictioneersHttpClient>,
    built: Arc<FictioneersHttpClient>,
) -> Arc<FictioneersHttpClient> {
    let empty: Option<Arc<FictioneersHttpClient>> = None;
    let previous = slot.compare_and_swap(&empty, Some(Arc::clone(&built)));
    match &*previous {
        Some(winner) => Arc::clone(winner),
        None => {
            cross_log!(debug, "Initialized default Fictioneers transport");
            built
        }
    }
}

/// The process-wide default transport, built with
/// [`FictioneersHttpClient::new`] the first time it is needed.
pub fn global_client() -> Result<FictioneersHttpClient, BuildError> {
    let slot = default_slot();
    if let Some(current) = slot.load_full() {
        return Ok(FictioneersHttpClient::clone(&current));
    }

    let built = Arc::new(FictioneersHttpClient::new()?);
    Ok(FictioneersHttpClient::clone(&install_if_empty(slot, built)))
}

/// Make `client` the default for sessions built from now on.
pub fn set_global_client(client: FictioneersHttpClient) {
    default_slot().store(Some(Arc::new(client)));
}

/// Forget the default transport; the next [`global_client`] call builds a new one.
pub fn drop_global_client() {
    default_slot().store(None);
}
