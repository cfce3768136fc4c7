use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    catalog::{
        entities::{Dish, Restaurant},
        ports::{DishRepository, RestaurantRepository},
        value_objects::GetDishesFilter,
    },
    common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone)]
pub struct InMemoryRestaurantRepository {
    restaurants: Arc<RwLock<Vec<Restaurant>>>,
}

impl InMemoryRestaurantRepository {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants: Arc::new(RwLock::new(restaurants)),
        }
    }
}

impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn get_all(&self) -> Result<Vec<Restaurant>, CoreError> {
        Ok(self.restaurants.read().await.clone())
    }

    async fn get_by_id(&self, restaurant_id: Uuid) -> Result<Option<Restaurant>, CoreError> {
        Ok(self
            .restaurants
            .read()
            .await
            .iter()
            .find(|r| r.id == restaurant_id)
            .cloned())
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryDishRepository {
    dishes: Arc<RwLock<Vec<Dish>>>,
}

impl InMemoryDishRepository {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self {
            dishes: Arc::new(RwLock::new(dishes)),
        }
    }
}

impl DishRepository for InMemoryDishRepository {
    async fn get_all(&self, filter: GetDishesFilter) -> Result<Vec<Dish>, CoreError> {
        let dishes = self.dishes.read().await;

        let filtered = dishes.iter().filter(|dish| match &filter.query {
            Some(query) if !query.trim().is_empty() => dish.matches_query(query),
            _ => true,
        });

        let offset = filter.offset.unwrap_or(0) as usize;
        let limit = filter.limit.map(|l| l as usize).unwrap_or(usize::MAX);

        Ok(filtered.skip(offset).take(limit).cloned().collect())
    }

    async fn get_by_id(&self, dish_id: Uuid) -> Result<Option<Dish>, CoreError> {
        Ok(self
            .dishes
            .read()
            .await
            .iter()
            .find(|d| d.id == dish_id)
            .cloned())
    }

    async fn get_by_restaurant(&self, restaurant_id: Uuid) -> Result<Vec<Dish>, CoreError> {
        Ok(self
            .dishes
            .read()
            .await
            .iter()
            .filter(|d| d.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }
}
