//! Resource payloads returned inside response envelopes.
//!
//! Each model names the fields the SDK relies on and keeps every other field
//! in `extra`, so new API fields survive a round-trip through the SDK.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields of a resource that have no dedicated struct member.
pub type Extra = Map<String, Value>;

/// A published narrative sequence users can be attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Timeline identifier.
    pub id: String,
    /// Display name.
    pub name: Option<String>,
    /// All other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A node in a timeline's event graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Timeline event identifier.
    pub id: String,
    /// Display title.
    pub title: Option<String>,
    /// All other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A user attached to a timeline, as seen through the management endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineUser {
    /// User identifier.
    pub id: String,
    /// Timeline the user progresses through.
    pub published_timeline_id: Option<String>,
    /// All other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// The session user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: String,
    /// Timeline the user progresses through.
    pub published_timeline_id: Option<String>,
    /// IANA timezone used for time guards.
    pub timezone: Option<String>,
    /// Whether time based progression rules are ignored.
    pub disable_time_guards: Option<bool>,
    /// Whether automatic progression halts at beats.
    pub pause_at_beats: Option<bool>,
    /// All other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Progress of a user through one timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventState {
    /// Not reached yet.
    Available,
    /// Currently in progress.
    Active,
    /// Already passed.
    Visited,
    /// Finished.
    Completed,
    /// A state this SDK version does not know.
    #[serde(other)]
    Unknown,
}

/// A per-user instance of a timeline event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTimelineEvent {
    /// User timeline event identifier.
    pub id: String,
    /// The timeline event this instance belongs to.
    pub timeline_event_id: Option<String>,
    /// Where the user is with this event.
    pub state: Option<EventState>,
    /// All other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A user-facing object whose state is independent of timeline position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInteractable {
    /// User interactable identifier.
    pub id: String,
    /// The interactable this instance belongs to.
    pub interactable_id: Option<String>,
    /// Arbitrary state set through [`crate::Fictioneers::update_user_interactable`].
    pub state: Option<Value>,
    /// All other fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A recorded transition of a user timeline event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStateChange {
    /// The timeline event that changed.
    pub timeline_event_id: Option<String>,
    /// The state it changed to.
    pub state: Option<EventState>,
    /// All other fields.
    #[serde(flatten)]
    pub extra: Extra,
}
