use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    allergen::value_objects::SafetyVerdict,
    catalog::{
        entities::{Dish, Restaurant},
        value_objects::{CheckDishSafetyInput, GetDishesFilter, GetRestaurantDishesInput},
    },
    common::entities::app_errors::CoreError,
};

/// Repository trait for restaurants
#[cfg_attr(test, mockall::automock)]
pub trait RestaurantRepository: Send + Sync {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, CoreError>> + Send;

    fn get_by_id(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Option<Restaurant>, CoreError>> + Send;
}

/// Repository trait for dishes
#[cfg_attr(test, mockall::automock)]
pub trait DishRepository: Send + Sync {
    fn get_all(
        &self,
        filter: GetDishesFilter,
    ) -> impl Future<Output = Result<Vec<Dish>, CoreError>> + Send;

    fn get_by_id(
        &self,
        dish_id: Uuid,
    ) -> impl Future<Output = Result<Option<Dish>, CoreError>> + Send;

    fn get_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Dish>, CoreError>> + Send;
}

/// Service trait for browsing the catalog
pub trait CatalogService: Send + Sync {
    fn get_restaurants(&self) -> impl Future<Output = Result<Vec<Restaurant>, CoreError>> + Send;

    fn get_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Restaurant, CoreError>> + Send;

    fn get_restaurant_dishes(
        &self,
        input: GetRestaurantDishesInput,
    ) -> impl Future<Output = Result<Vec<Dish>, CoreError>> + Send;

    fn get_dishes(
        &self,
        filter: GetDishesFilter,
    ) -> impl Future<Output = Result<Vec<Dish>, CoreError>> + Send;

    fn get_dish(&self, dish_id: Uuid) -> impl Future<Output = Result<Dish, CoreError>> + Send;

    /// Evaluate one dish against an ad-hoc allergy list.
    fn check_dish_safety(
        &self,
        input: CheckDishSafetyInput,
    ) -> impl Future<Output = Result<SafetyVerdict, CoreError>> + Send;
}
