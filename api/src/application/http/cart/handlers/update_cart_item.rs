use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use super::get_cart::CartResponse;
use crate::application::http::{
    cart::validators::UpdateCartItemValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use mealguard_core::domain::cart::{ports::CartService, value_objects::UpdateCartItemInput};

#[utoipa::path(
    put,
    path = "/items/{dish_id}",
    tag = "cart",
    summary = "Set cart item quantity",
    description = "Set the quantity for a cart line; zero removes it",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("dish_id" = Uuid, Path, description = "Dish id"),
    ),
    request_body = UpdateCartItemValidator,
    responses(
        (status = 200, body = CartResponse)
    )
)]
pub async fn update_cart_item(
    Path((user_id, dish_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    Json(request): Json<UpdateCartItemValidator>,
) -> Result<Response<CartResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let cart = state
        .service
        .update_cart_item(UpdateCartItemInput {
            user_id,
            dish_id,
            quantity: request.quantity,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CartResponse::from(cart)))
}
