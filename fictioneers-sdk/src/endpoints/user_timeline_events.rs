use serde::Serialize;
use serde_json::Value;

use crate::{
    Fictioneers, Result,
    dispatch::Endpoint,
    headers::AuthMode,
    models::UserTimelineEvent,
    response::ApiResponse,
    util::encode_segment,
};

#[derive(Debug, Serialize)]
struct FollowLinkBody<'a> {
    link_id: &'a str,
}

impl Fictioneers {
    /// `GET /user-timeline-events`: the session user's events.
    pub async fn get_user_timeline_events(&self) -> Result<ApiResponse<Vec<UserTimelineEvent>>> {
        self.call(
            Endpoint::get("/user-timeline-events", AuthMode::Bearer),
            None,
        )
        .await
    }

    /// `GET /user-timeline-events/{id}`
    pub async fn get_user_timeline_event(
        &self,
        event_id: &str,
    ) -> Result<ApiResponse<UserTimelineEvent>> {
        let path = format!("/user-timeline-events/{}", encode_segment(event_id)?);
        self.call(Endpoint::get(path, AuthMode::Bearer), None).await
    }

    /// `POST /user-timeline-events/{id}/follow-link`: take `link_id` out of an event.
    pub async fn follow_link(&self, event_id: &str, link_id: &str) -> Result<ApiResponse<Value>> {
        let path = format!(
            "/user-timeline-events/{}/follow-link",
            encode_segment(event_id)?
        );
        let body = serde_json::to_value(FollowLinkBody { link_id })?;
        self.call(Endpoint::post(path, AuthMode::Bearer), Some(body))
            .await
    }
}
