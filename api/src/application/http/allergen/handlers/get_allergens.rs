use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealguard_core::domain::allergen::{entities::Allergen, helpers::format_allergen_name};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AllergenResponse {
    /// Canonical key, e.g. "tree_nut".
    pub key: String,
    /// Display label, e.g. "Tree Nut".
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAllergensResponse {
    pub items: Vec<AllergenResponse>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "allergen",
    summary = "List allergens",
    description = "List the allergens tracked on every dish profile",
    responses(
        (status = 200, body = GetAllergensResponse)
    )
)]
pub async fn get_allergens(
    State(_state): State<AppState>,
) -> Result<Response<GetAllergensResponse>, ApiError> {
    let items = Allergen::ALL
        .iter()
        .map(|allergen| AllergenResponse {
            key: allergen.key().to_string(),
            label: format_allergen_name(allergen.key()),
        })
        .collect();

    Ok(Response::OK(GetAllergensResponse { items }))
}
