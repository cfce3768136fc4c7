use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use super::create_user::UserResponse;
use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user::validators::UpdateAllergiesValidator,
};
use mealguard_core::domain::profile::{ports::ProfileService, value_objects::SaveAllergiesInput};

#[utoipa::path(
    put,
    path = "/{user_id}/allergies",
    tag = "user",
    summary = "Replace user allergies",
    description = "Replace the stored allergy list wholesale",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body = UpdateAllergiesValidator,
    responses(
        (status = 200, body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user_allergies(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<UpdateAllergiesValidator>,
) -> Result<Response<UserResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let profile = state
        .service
        .save_allergies(SaveAllergiesInput {
            user_id,
            allergies: request.allergies,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserResponse::from(profile)))
}
