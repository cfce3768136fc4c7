use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{allergen::entities::AllergenProfile, common::generate_timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub cuisine: String,
    pub rating: f64,
    pub delivery_time: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RestaurantConfig {
    pub name: String,
    pub description: String,
    pub cuisine: String,
    pub rating: f64,
    pub delivery_time: String,
    pub image_url: Option<String>,
}

impl Restaurant {
    pub fn new(config: RestaurantConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            description: config.description,
            cuisine: config.cuisine,
            rating: config.rating,
            delivery_time: config.delivery_time,
            image_url: config.image_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A dish on a restaurant's menu. `allergen_profile` is estimated
/// upstream and may be absent; it is never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: Option<String>,
    pub allergen_profile: Option<AllergenProfile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DishConfig {
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: Option<String>,
    pub allergen_profile: Option<AllergenProfile>,
}

impl Dish {
    pub fn new(config: DishConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            restaurant_id: config.restaurant_id,
            name: config.name,
            description: config.description,
            price: config.price,
            image_url: config.image_url,
            allergen_profile: config.allergen_profile,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive substring match over name and description,
    /// the same filter the search page applies.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(name: &str, description: &str) -> Dish {
        Dish::new(DishConfig {
            restaurant_id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            price: 100,
            image_url: None,
            allergen_profile: None,
        })
    }

    #[test]
    fn query_matches_name_or_description() {
        let momos = dish("Chicken Momos", "Steamed dumplings filled with spiced chicken");

        assert!(momos.matches_query("MOMO"));
        assert!(momos.matches_query("dumplings"));
        assert!(!momos.matches_query("paneer"));
    }
}
