use crate::{
    Fictioneers, NewUser, Result, cross_log,
    models::{User, UserTimelineEvent},
    response::ApiResponse,
};

/// Result of [`Fictioneers::initialise_and_progress_user`].
#[derive(Debug, Clone, PartialEq)]
pub struct InitialisedUser {
    /// The session user: freshly created, or the one that already existed.
    pub user: Option<User>,
    /// The user's timeline events after initialisation.
    pub user_timeline_events: ApiResponse<Vec<UserTimelineEvent>>,
}

impl Fictioneers {
    /// Make sure the session user exists on a timeline and load their events.
    ///
    /// Fetches the current user and creates it with `settings` when the API
    /// reports none, then loads the user's timeline events. An existing user is
    /// returned as fetched; `settings` only apply on creation.
    ///
    /// Any failing step aborts the whole call.
    pub async fn initialise_and_progress_user(&self, settings: &NewUser) -> Result<InitialisedUser> {
        let user = match self.get_user().await?.into_data() {
            Some(existing) => Some(existing),
            None => {
                cross_log!(debug, "Creating user on timeline {}", settings.timeline_id);
                self.create_user(settings).await?.into_data()
            }
        };

        let user_timeline_events = self.get_user_timeline_events().await?;

        Ok(InitialisedUser {
            user,
            user_timeline_events,
        })
    }
}
