use axum::extract::{Path, State};
use uuid::Uuid;

use super::get_cart::CartResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealguard_core::domain::cart::ports::CartService;

#[utoipa::path(
    delete,
    path = "",
    tag = "cart",
    summary = "Clear cart",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = CartResponse)
    )
)]
pub async fn clear_cart(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<CartResponse>, ApiError> {
    let cart = state
        .service
        .clear_cart(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CartResponse::from(cart)))
}
