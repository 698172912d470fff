//! One method per remote operation. Each declares its verb, path, auth mode
//! and body, and leaves the rest to the dispatcher.

mod interactables;
mod timelines;
mod user_timeline_events;
mod users;

pub use users::{DEFAULT_TIMEZONE, NewUser, ProgressStep, UserUpdate};
