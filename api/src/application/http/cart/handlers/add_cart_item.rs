use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use super::get_cart::CartResponse;
use crate::application::http::{
    cart::validators::AddCartItemValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use mealguard_core::domain::cart::{ports::CartService, value_objects::AddToCartInput};

#[utoipa::path(
    post,
    path = "/items",
    tag = "cart",
    summary = "Add dish to cart",
    description = "Add one unit of a dish; an existing line is incremented",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body = AddCartItemValidator,
    responses(
        (status = 201, body = CartResponse),
        (status = 404, description = "Dish not found")
    )
)]
pub async fn add_cart_item(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<AddCartItemValidator>,
) -> Result<Response<CartResponse>, ApiError> {
    let cart = state
        .service
        .add_to_cart(AddToCartInput {
            user_id,
            dish_id: request.dish_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CartResponse::from(cart)))
}
