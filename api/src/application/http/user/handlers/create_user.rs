use axum::{Json, extract::State};
use validator::Validate;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user::validators::CreateUserValidator,
};
use chrono::{DateTime, Utc};
use mealguard_core::domain::profile::{
    entities::UserProfile,
    ports::ProfileService,
    value_objects::RegisterProfileInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserResponse {
    pub id: uuid::Uuid,
    pub email: String,
    pub allergies: Vec<String>,
    pub allergy_mode: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            allergies: profile.allergies,
            allergy_mode: profile.allergy_mode,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[utoipa::path(
    post,
    path = "",
    tag = "user",
    summary = "Register user",
    request_body = CreateUserValidator,
    responses(
        (status = 201, body = UserResponse),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserValidator>,
) -> Result<Response<UserResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let profile = state
        .service
        .register_profile(RegisterProfileInput {
            email: request.email,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(UserResponse::from(profile)))
}
