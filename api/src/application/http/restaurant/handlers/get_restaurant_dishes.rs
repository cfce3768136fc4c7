use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::{
    dish::handlers::get_dishes::{DishResponse, GetDishesResponse},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use mealguard_core::domain::catalog::{
    ports::CatalogService, value_objects::GetRestaurantDishesInput,
};

#[utoipa::path(
    get,
    path = "/{restaurant_id}/dishes",
    tag = "restaurant",
    summary = "List restaurant dishes",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant id"),
    ),
    responses(
        (status = 200, body = GetDishesResponse),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn get_restaurant_dishes(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetDishesResponse>, ApiError> {
    let dishes = state
        .service
        .get_restaurant_dishes(GetRestaurantDishesInput { restaurant_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDishesResponse {
        items: dishes.into_iter().map(DishResponse::from).collect(),
    }))
}
