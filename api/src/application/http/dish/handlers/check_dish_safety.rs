use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::{
    dish::validators::CheckDishSafetyValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use mealguard_core::domain::{
    allergen::{
        helpers::{format_allergen_name, format_probability},
        value_objects::{SafetyVerdict, UnsafeAllergen},
    },
    catalog::{ports::CatalogService, value_objects::CheckDishSafetyInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UnsafeAllergenResponse {
    pub name: String,
    pub probability: f64,
}

impl From<UnsafeAllergen> for UnsafeAllergenResponse {
    fn from(allergen: UnsafeAllergen) -> Self {
        Self {
            name: allergen.name,
            probability: allergen.probability,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SafetyVerdictResponse {
    pub is_safe: bool,
    pub unsafe_allergens: Vec<UnsafeAllergenResponse>,
    pub highest_risk: Option<UnsafeAllergenResponse>,
    /// Ready-to-display warning for the top risk, e.g.
    /// "95% chance of Milk". Absent when the dish is safe.
    pub warning: Option<String>,
}

impl From<SafetyVerdict> for SafetyVerdictResponse {
    fn from(verdict: SafetyVerdict) -> Self {
        let warning = verdict.highest_risk.as_ref().map(|risk| {
            format!(
                "{} chance of {}",
                format_probability(risk.probability),
                format_allergen_name(&risk.name)
            )
        });

        Self {
            is_safe: verdict.is_safe,
            unsafe_allergens: verdict
                .unsafe_allergens
                .into_iter()
                .map(UnsafeAllergenResponse::from)
                .collect(),
            highest_risk: verdict.highest_risk.map(UnsafeAllergenResponse::from),
            warning,
        }
    }
}

#[utoipa::path(
    post,
    path = "/{dish_id}/safety-check",
    tag = "dish",
    summary = "Check dish safety",
    description = "Evaluate a dish's allergen profile against an allergy list",
    params(
        ("dish_id" = Uuid, Path, description = "Dish id"),
    ),
    request_body = CheckDishSafetyValidator,
    responses(
        (status = 200, body = SafetyVerdictResponse),
        (status = 404, description = "Dish not found")
    )
)]
pub async fn check_dish_safety(
    Path(dish_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<CheckDishSafetyValidator>,
) -> Result<Response<SafetyVerdictResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let verdict = state
        .service
        .check_dish_safety(CheckDishSafetyInput {
            dish_id,
            allergies: request.allergies,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SafetyVerdictResponse::from(verdict)))
}
