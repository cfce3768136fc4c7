use axum::extract::{Path, State};
use uuid::Uuid;

use super::create_user::UserResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealguard_core::domain::profile::ports::ProfileService;

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "user",
    summary = "Get user",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<UserResponse>, ApiError> {
    let profile = state
        .service
        .get_profile(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserResponse::from(profile)))
}
