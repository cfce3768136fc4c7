use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealguard_core::domain::catalog::{entities::Restaurant, ports::CatalogService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RestaurantResponse {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: String,
    pub cuisine: String,
    pub rating: f64,
    pub delivery_time: String,
    pub image_url: Option<String>,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            description: restaurant.description,
            cuisine: restaurant.cuisine,
            rating: restaurant.rating,
            delivery_time: restaurant.delivery_time,
            image_url: restaurant.image_url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRestaurantsResponse {
    pub items: Vec<RestaurantResponse>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "restaurant",
    summary = "List restaurants",
    description = "List every restaurant in the catalog",
    responses(
        (status = 200, body = GetRestaurantsResponse)
    )
)]
pub async fn get_restaurants(
    State(state): State<AppState>,
) -> Result<Response<GetRestaurantsResponse>, ApiError> {
    let restaurants = state.service.get_restaurants().await.map_err(|e| {
        tracing::error!("Failed to list restaurants: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(GetRestaurantsResponse {
        items: restaurants.into_iter().map(RestaurantResponse::from).collect(),
    }))
}
