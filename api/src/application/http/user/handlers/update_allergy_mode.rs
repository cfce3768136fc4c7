use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use super::create_user::UserResponse;
use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user::validators::UpdateAllergyModeValidator,
};
use mealguard_core::domain::profile::{ports::ProfileService, value_objects::SetAllergyModeInput};

#[utoipa::path(
    put,
    path = "/{user_id}/allergy-mode",
    tag = "user",
    summary = "Toggle allergy mode",
    description = "Enable or disable allergy warnings for the user",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body = UpdateAllergyModeValidator,
    responses(
        (status = 200, body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_allergy_mode(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<UpdateAllergyModeValidator>,
) -> Result<Response<UserResponse>, ApiError> {
    let profile = state
        .service
        .set_allergy_mode(SetAllergyModeInput {
            user_id,
            enabled: request.enabled,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserResponse::from(profile)))
}
