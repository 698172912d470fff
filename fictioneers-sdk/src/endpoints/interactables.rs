use serde_json::{Value, json};

use crate::{
    Fictioneers, Result,
    dispatch::Endpoint,
    headers::AuthMode,
    models::UserInteractable,
    response::ApiResponse,
    util::encode_segment,
};

fn interactable_path(id: &str) -> Result<String> {
    Ok(format!("/user-interactables/{}", encode_segment(id)?))
}

impl Fictioneers {
    /// `GET /user-interactables`
    pub async fn get_user_interactables(&self) -> Result<ApiResponse<Vec<UserInteractable>>> {
        self.call(Endpoint::get("/user-interactables", AuthMode::Bearer), None)
            .await
    }

    /// `GET /user-interactables/{id}`
    pub async fn get_user_interactable(
        &self,
        interactable_id: &str,
    ) -> Result<ApiResponse<UserInteractable>> {
        self.call(
            Endpoint::get(interactable_path(interactable_id)?, AuthMode::Bearer),
            None,
        )
        .await
    }

    /// `PATCH /user-interactables/{id}` with `{ "state": state }`.
    pub async fn update_user_interactable(
        &self,
        interactable_id: &str,
        state: Value,
    ) -> Result<ApiResponse<UserInteractable>> {
        self.call(
            Endpoint::patch(interactable_path(interactable_id)?, AuthMode::Bearer),
            Some(json!({ "state": state })),
        )
        .await
    }
}
