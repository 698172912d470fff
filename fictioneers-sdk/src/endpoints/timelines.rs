use crate::{
    Fictioneers, Result,
    dispatch::Endpoint,
    headers::AuthMode,
    models::{EventStateChange, Timeline, TimelineEvent, TimelineUser},
    response::{ApiResponse, DeleteResponse},
    util::encode_segment,
};

fn timeline_path(timeline_id: &str) -> Result<String> {
    Ok(format!("/timelines/{}", encode_segment(timeline_id)?))
}

/// Timeline management. These calls authenticate with the raw API key and
/// need a secret key.
impl Fictioneers {
    /// `GET /timelines`
    pub async fn list_timelines(&self) -> Result<ApiResponse<Vec<Timeline>>> {
        self.call(Endpoint::get("/timelines", AuthMode::Key), None)
            .await
    }

    /// `GET /timelines/{id}`
    pub async fn get_timeline(&self, timeline_id: &str) -> Result<ApiResponse<Timeline>> {
        self.call(Endpoint::get(timeline_path(timeline_id)?, AuthMode::Key), None)
            .await
    }

    /// `GET /timelines/{id}/timeline-events`
    pub async fn get_timeline_events(
        &self,
        timeline_id: &str,
    ) -> Result<ApiResponse<Vec<TimelineEvent>>> {
        let path = format!("{}/timeline-events", timeline_path(timeline_id)?);
        self.call(Endpoint::get(path, AuthMode::Key), None).await
    }

    /// `GET /timelines/{id}/users`
    pub async fn list_timeline_users(
        &self,
        timeline_id: &str,
    ) -> Result<ApiResponse<Vec<TimelineUser>>> {
        let path = format!("{}/users", timeline_path(timeline_id)?);
        self.call(Endpoint::get(path, AuthMode::Key), None).await
    }

    /// `DELETE /timelines/{id}/users`: remove every user from a timeline.
    pub async fn delete_timeline_users(&self, timeline_id: &str) -> Result<DeleteResponse> {
        let path = format!("{}/users", timeline_path(timeline_id)?);
        self.call_delete(Endpoint::delete(path, AuthMode::Key)).await
    }

    /// `GET /timelines/{id}/users/{user_id}`
    pub async fn get_timeline_user(
        &self,
        timeline_id: &str,
        user_id: &str,
    ) -> Result<ApiResponse<TimelineUser>> {
        let path = format!(
            "{}/users/{}",
            timeline_path(timeline_id)?,
            encode_segment(user_id)?
        );
        self.call(Endpoint::get(path, AuthMode::Key), None).await
    }

    /// `DELETE /timelines/{id}/users/{user_id}`
    pub async fn delete_timeline_user(
        &self,
        timeline_id: &str,
        user_id: &str,
    ) -> Result<DeleteResponse> {
        let path = format!(
            "{}/users/{}",
            timeline_path(timeline_id)?,
            encode_segment(user_id)?
        );
        self.call_delete(Endpoint::delete(path, AuthMode::Key)).await
    }

    /// `GET /timelines/{id}/event-state-changes/`
    ///
    /// Deprecated upstream: object responses carry a deprecation notice in `error`.
    pub async fn get_event_state_changes(
        &self,
        timeline_id: &str,
    ) -> Result<ApiResponse<Vec<EventStateChange>>> {
        let path = format!("{}/event-state-changes/", timeline_path(timeline_id)?);
        self.call(Endpoint::get(path, AuthMode::Key).deprecated(), None)
            .await
    }
}
