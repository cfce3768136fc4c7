use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    allergen::{services::check_dish_safety, value_objects::SafetyVerdict},
    cart::ports::CartRepository,
    catalog::{
        entities::{Dish, Restaurant},
        ports::{CatalogService, DishRepository, RestaurantRepository},
        value_objects::{CheckDishSafetyInput, GetDishesFilter, GetRestaurantDishesInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    profile::ports::ProfileRepository,
};

impl<D, R, P, C> CatalogService for Service<D, R, P, C>
where
    D: DishRepository,
    R: RestaurantRepository,
    P: ProfileRepository,
    C: CartRepository,
{
    async fn get_restaurants(&self) -> Result<Vec<Restaurant>, CoreError> {
        self.restaurant_repository.get_all().await
    }

    async fn get_restaurant(&self, restaurant_id: Uuid) -> Result<Restaurant, CoreError> {
        self.restaurant_repository
            .get_by_id(restaurant_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_restaurant_dishes(
        &self,
        input: GetRestaurantDishesInput,
    ) -> Result<Vec<Dish>, CoreError> {
        self.restaurant_repository
            .get_by_id(input.restaurant_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.dish_repository
            .get_by_restaurant(input.restaurant_id)
            .await
    }

    async fn get_dishes(&self, filter: GetDishesFilter) -> Result<Vec<Dish>, CoreError> {
        self.dish_repository.get_all(filter).await
    }

    async fn get_dish(&self, dish_id: Uuid) -> Result<Dish, CoreError> {
        self.dish_repository
            .get_by_id(dish_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self), fields(dish_id = %input.dish_id))]
    async fn check_dish_safety(
        &self,
        input: CheckDishSafetyInput,
    ) -> Result<SafetyVerdict, CoreError> {
        let dish = self
            .dish_repository
            .get_by_id(input.dish_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        Ok(check_dish_safety(
            dish.allergen_profile.as_ref(),
            &input.allergies,
        ))
    }
}
