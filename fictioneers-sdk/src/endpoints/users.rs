use serde::Serialize;

use crate::{
    Fictioneers, Result,
    dispatch::Endpoint,
    headers::AuthMode,
    models::User,
    response::{ApiResponse, DeleteResponse},
};

/// Timezone every user is created in.
pub const DEFAULT_TIMEZONE: &str = "Europe/London";

/// Settings for a user created on a timeline.
///
/// ```
/// # use fictioneers::NewUser;
/// let user = NewUser::new("timeline-1").disable_time_guards(true).max_steps(3);
/// assert!(user.pause_at_beats);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct NewUser {
    /// Timeline to attach the user to.
    pub timeline_id: String,
    /// Ignore time based progression rules. Defaults to `false`.
    pub disable_time_guards: bool,
    /// Halt automatic progression at beats. Defaults to `true`.
    pub pause_at_beats: bool,
    /// Upper bound on steps progressed on creation; `None` lets the API decide.
    pub max_steps: Option<u32>,
}

impl NewUser {
    /// A user on `timeline_id` with default settings.
    pub fn new<S: Into<String>>(timeline_id: S) -> Self {
        Self {
            timeline_id: timeline_id.into(),
            disable_time_guards: false,
            pause_at_beats: true,
            max_steps: None,
        }
    }

    /// Set the `disable_time_guards` field.
    pub fn disable_time_guards(mut self, disable: bool) -> Self {
        self.disable_time_guards = disable;
        self
    }

    /// Set the `pause_at_beats` field.
    pub fn pause_at_beats(mut self, pause: bool) -> Self {
        self.pause_at_beats = pause;
        self
    }

    /// Set the `max_steps` field.
    pub fn max_steps(mut self, steps: u32) -> Self {
        self.max_steps = Some(steps);
        self
    }
}

#[derive(Debug, Serialize)]
struct CreateUserBody<'a> {
    published_timeline_id: &'a str,
    timezone: &'a str,
    disable_time_guards: bool,
    pause_at_beats: bool,
    max_steps: Option<u32>,
}

impl<'a> From<&'a NewUser> for CreateUserBody<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            published_timeline_id: &user.timeline_id,
            timezone: DEFAULT_TIMEZONE,
            disable_time_guards: user.disable_time_guards,
            pause_at_beats: user.pause_at_beats,
            max_steps: user.max_steps,
        }
    }
}

/// Body of `POST /users/me/progress-step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressStep {
    /// Upper bound on steps to progress; `None` lets the API decide.
    pub max_steps: Option<u32>,
    /// Halt at the next beat.
    pub pause_at_beats: bool,
}

impl Default for ProgressStep {
    fn default() -> Self {
        Self {
            max_steps: None,
            pause_at_beats: true,
        }
    }
}

/// Partial update of the session user; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    /// New value for `disable_time_guards`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_time_guards: Option<bool>,
    /// New value for `pause_at_beats`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_at_beats: Option<bool>,
}

/// The session user. These calls act as [`Fictioneers::user_id`].
impl Fictioneers {
    /// `GET /users/me`. `data` is `None` when the user does not exist yet.
    pub async fn get_user(&self) -> Result<ApiResponse<User>> {
        self.call(Endpoint::get("/users/me", AuthMode::Bearer), None)
            .await
    }

    /// `POST /users`: create the session user on a timeline, in [`DEFAULT_TIMEZONE`].
    pub async fn create_user(&self, user: &NewUser) -> Result<ApiResponse<User>> {
        let body = serde_json::to_value(CreateUserBody::from(user))?;
        self.call(Endpoint::post("/users", AuthMode::Bearer), Some(body))
            .await
    }

    /// `PATCH /users/me`
    pub async fn update_user(&self, update: &UserUpdate) -> Result<ApiResponse<User>> {
        let body = serde_json::to_value(update)?;
        self.call(Endpoint::patch("/users/me", AuthMode::Bearer), Some(body))
            .await
    }

    /// `DELETE /users/me`
    pub async fn delete_user(&self) -> Result<DeleteResponse> {
        self.call_delete(Endpoint::delete("/users/me", AuthMode::Bearer))
            .await
    }

    /// `POST /users/me/progress-step`: advance the user along their timeline.
    pub async fn progress_user_step(
        &self,
        step: ProgressStep,
    ) -> Result<ApiResponse<serde_json::Value>> {
        let body = serde_json::to_value(step)?;
        self.call(
            Endpoint::post("/users/me/progress-step", AuthMode::Bearer),
            Some(body),
        )
        .await
    }
}
