use axum::extract::{Path, State};
use uuid::Uuid;

use super::get_dishes::DishResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealguard_core::domain::catalog::ports::CatalogService;

#[utoipa::path(
    get,
    path = "/{dish_id}",
    tag = "dish",
    summary = "Get dish",
    params(
        ("dish_id" = Uuid, Path, description = "Dish id"),
    ),
    responses(
        (status = 200, body = DishResponse),
        (status = 404, description = "Dish not found")
    )
)]
pub async fn get_dish(
    Path(dish_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DishResponse>, ApiError> {
    let dish = state
        .service
        .get_dish(dish_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DishResponse::from(dish)))
}
