//! Common imports for quick starts.

// Common
pub use crate::{BuildError, Error, Result};

// Transport
pub use crate::{FictioneersHttpClient, FictioneersHttpClientBuilder};

// Session
pub use crate::{ApiKey, Fictioneers, FictioneersBuilder};

// Request settings and responses
pub use crate::{ApiResponse, DeleteResponse, Envelope, InitialisedUser, NewUser, ProgressStep};

// Resource models
pub use crate::models::{
    EventState, EventStateChange, Timeline, TimelineEvent, TimelineUser, User, UserInteractable,
    UserTimelineEvent,
};
