use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    cart::{
        entities::Cart,
        ports::{CartRepository, CartService},
        value_objects::{AddToCartInput, RemoveCartItemInput, UpdateCartItemInput},
    },
    catalog::ports::{DishRepository, RestaurantRepository},
    common::{entities::app_errors::CoreError, services::Service},
    profile::ports::ProfileRepository,
};

impl<D, R, P, C> Service<D, R, P, C>
where
    C: CartRepository,
{
    async fn load_cart(&self, user_id: Uuid) -> Result<Cart, CoreError> {
        Ok(self
            .cart_repository
            .get_by_user(user_id)
            .await?
            .unwrap_or_else(|| Cart::empty(user_id)))
    }
}

impl<D, R, P, C> CartService for Service<D, R, P, C>
where
    D: DishRepository,
    R: RestaurantRepository,
    P: ProfileRepository,
    C: CartRepository,
{
    async fn get_cart(&self, user_id: Uuid) -> Result<Cart, CoreError> {
        self.load_cart(user_id).await
    }

    #[instrument(skip(self), fields(user_id = %input.user_id, dish_id = %input.dish_id))]
    async fn add_to_cart(&self, input: AddToCartInput) -> Result<Cart, CoreError> {
        let dish = self
            .dish_repository
            .get_by_id(input.dish_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let mut cart = self.load_cart(input.user_id).await?;
        cart.add_dish(&dish);

        self.cart_repository.save(cart).await
    }

    async fn update_cart_item(&self, input: UpdateCartItemInput) -> Result<Cart, CoreError> {
        let mut cart = self.load_cart(input.user_id).await?;
        cart.update_quantity(input.dish_id, input.quantity);

        self.cart_repository.save(cart).await
    }

    async fn remove_cart_item(&self, input: RemoveCartItemInput) -> Result<Cart, CoreError> {
        let mut cart = self.load_cart(input.user_id).await?;
        cart.remove_dish(input.dish_id);

        self.cart_repository.save(cart).await
    }

    async fn clear_cart(&self, user_id: Uuid) -> Result<Cart, CoreError> {
        let mut cart = self.load_cart(user_id).await?;
        cart.clear();

        self.cart_repository.save(cart).await
    }
}
