use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealguard_core::domain::cart::{
    entities::{Cart, CartItem},
    ports::CartService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CartItemResponse {
    pub dish_id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: Option<String>,
    pub quantity: u32,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            dish_id: item.dish_id,
            restaurant_id: item.restaurant_id,
            name: item.name,
            description: item.description,
            price: item.price,
            image_url: item.image_url,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CartResponse {
    pub user_id: Uuid,
    pub items: Vec<CartItemResponse>,
    pub total_items: u32,
    pub total_price: i64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let total_items = cart.total_items();
        let total_price = cart.total_price();
        Self {
            user_id: cart.user_id,
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            total_items,
            total_price,
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "cart",
    summary = "Get cart",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = CartResponse)
    )
)]
pub async fn get_cart(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<CartResponse>, ApiError> {
    let cart = state
        .service
        .get_cart(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CartResponse::from(cart)))
}
