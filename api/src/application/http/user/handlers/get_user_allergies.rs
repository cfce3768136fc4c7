use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealguard_core::domain::profile::ports::ProfileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUserAllergiesResponse {
    pub allergies: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/{user_id}/allergies",
    tag = "user",
    summary = "Get user allergies",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = GetUserAllergiesResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_allergies(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetUserAllergiesResponse>, ApiError> {
    let profile = state
        .service
        .get_profile(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUserAllergiesResponse {
        allergies: profile.allergies,
    }))
}
