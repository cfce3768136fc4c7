use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    cart::{
        entities::Cart,
        value_objects::{AddToCartInput, RemoveCartItemInput, UpdateCartItemInput},
    },
    common::entities::app_errors::CoreError,
};

/// Repository trait for carts. One cart per user, loaded and saved
/// whole.
#[cfg_attr(test, mockall::automock)]
pub trait CartRepository: Send + Sync {
    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Cart>, CoreError>> + Send;

    fn save(&self, cart: Cart) -> impl Future<Output = Result<Cart, CoreError>> + Send;
}

/// Service trait for cart operations
pub trait CartService: Send + Sync {
    fn get_cart(&self, user_id: Uuid) -> impl Future<Output = Result<Cart, CoreError>> + Send;

    fn add_to_cart(
        &self,
        input: AddToCartInput,
    ) -> impl Future<Output = Result<Cart, CoreError>> + Send;

    fn update_cart_item(
        &self,
        input: UpdateCartItemInput,
    ) -> impl Future<Output = Result<Cart, CoreError>> + Send;

    fn remove_cart_item(
        &self,
        input: RemoveCartItemInput,
    ) -> impl Future<Output = Result<Cart, CoreError>> + Send;

    fn clear_cart(&self, user_id: Uuid) -> impl Future<Output = Result<Cart, CoreError>> + Send;
}
