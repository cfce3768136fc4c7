use axum::extract::{Path, State};
use uuid::Uuid;

use super::get_restaurants::RestaurantResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealguard_core::domain::catalog::ports::CatalogService;

#[utoipa::path(
    get,
    path = "/{restaurant_id}",
    tag = "restaurant",
    summary = "Get restaurant",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant id"),
    ),
    responses(
        (status = 200, body = RestaurantResponse),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn get_restaurant(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<RestaurantResponse>, ApiError> {
    let restaurant = state
        .service
        .get_restaurant(restaurant_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RestaurantResponse::from(restaurant)))
}
