use axum::extract::{Query, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealguard_core::domain::{
    allergen::entities::AllergenProfile,
    catalog::{entities::Dish, ports::CatalogService, value_objects::GetDishesFilter},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DishResponse {
    pub id: uuid::Uuid,
    pub restaurant_id: uuid::Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: Option<String>,
    pub allergen_profile: Option<AllergenProfile>,
}

impl From<Dish> for DishResponse {
    fn from(dish: Dish) -> Self {
        Self {
            id: dish.id,
            restaurant_id: dish.restaurant_id,
            name: dish.name,
            description: dish.description,
            price: dish.price,
            image_url: dish.image_url,
            allergen_profile: dish.allergen_profile,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDishesResponse {
    pub items: Vec<DishResponse>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetDishesQuery {
    /// Free-text search over dish name and description.
    pub q: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "dish",
    summary = "List dishes",
    description = "List dishes, optionally filtered by a search query",
    params(GetDishesQuery),
    responses(
        (status = 200, body = GetDishesResponse)
    )
)]
pub async fn get_dishes(
    Query(query): Query<GetDishesQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetDishesResponse>, ApiError> {
    let filter = GetDishesFilter {
        query: query.q,
        offset: Some(query.offset.unwrap_or(0)),
        limit: Some(query.limit.unwrap_or(20).clamp(1, 100)),
    };

    let dishes = state.service.get_dishes(filter).await.map_err(|e| {
        tracing::error!("Failed to list dishes: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(GetDishesResponse {
        items: dishes.into_iter().map(DishResponse::from).collect(),
    }))
}
