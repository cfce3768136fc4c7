use axum::extract::{Path, State};
use uuid::Uuid;

use super::get_cart::CartResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealguard_core::domain::cart::{ports::CartService, value_objects::RemoveCartItemInput};

#[utoipa::path(
    delete,
    path = "/items/{dish_id}",
    tag = "cart",
    summary = "Remove cart item",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("dish_id" = Uuid, Path, description = "Dish id"),
    ),
    responses(
        (status = 200, body = CartResponse)
    )
)]
pub async fn remove_cart_item(
    Path((user_id, dish_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<CartResponse>, ApiError> {
    let cart = state
        .service
        .remove_cart_item(RemoveCartItemInput { user_id, dish_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CartResponse::from(cart)))
}
