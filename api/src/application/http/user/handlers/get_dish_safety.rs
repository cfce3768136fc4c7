use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::{
    dish::handlers::check_dish_safety::SafetyVerdictResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use mealguard_core::domain::profile::{
    ports::ProfileService, value_objects::CheckDishForUserInput,
};

#[utoipa::path(
    get,
    path = "/{user_id}/dishes/{dish_id}/safety",
    tag = "user",
    summary = "Check dish safety for user",
    description = "Evaluate a dish against the user's stored allergies; always safe when allergy mode is off",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("dish_id" = Uuid, Path, description = "Dish id"),
    ),
    responses(
        (status = 200, body = SafetyVerdictResponse),
        (status = 404, description = "User or dish not found")
    )
)]
pub async fn get_dish_safety(
    Path((user_id, dish_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<SafetyVerdictResponse>, ApiError> {
    let verdict = state
        .service
        .check_dish_for_user(CheckDishForUserInput { user_id, dish_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SafetyVerdictResponse::from(verdict)))
}
