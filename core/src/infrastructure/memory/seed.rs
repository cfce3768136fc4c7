//! Catalog seed data. Operators can point the server at a JSON seed
//! file; without one the built-in demo catalog is loaded.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::info;

use crate::domain::allergen::entities::AllergenProfile;
use crate::domain::catalog::entities::{Dish, DishConfig, Restaurant, RestaurantConfig};

#[derive(Debug, Clone)]
pub struct Catalog {
    pub restaurants: Vec<Restaurant>,
    pub dishes: Vec<Dish>,
}

/// On-disk seed format. Restaurants carry small numeric ids that
/// dishes reference; real ids are minted when the seed is loaded.
#[derive(Debug, Deserialize)]
pub struct SeedCatalog {
    pub restaurants: Vec<SeedRestaurant>,
    pub dishes: Vec<SeedDish>,
}

#[derive(Debug, Deserialize)]
pub struct SeedRestaurant {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub cuisine: String,
    pub rating: f64,
    pub delivery_time: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedDish {
    pub restaurant_id: u32,
    pub name: String,
    pub description: String,
    pub price: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub allergen_profile: Option<AllergenProfile>,
}

impl SeedCatalog {
    pub fn into_catalog(self) -> anyhow::Result<Catalog> {
        let mut restaurant_ids = HashMap::new();
        let mut restaurants = Vec::with_capacity(self.restaurants.len());

        for seed in self.restaurants {
            let restaurant = Restaurant::new(RestaurantConfig {
                name: seed.name,
                description: seed.description,
                cuisine: seed.cuisine,
                rating: seed.rating,
                delivery_time: seed.delivery_time,
                image_url: seed.image_url,
            });
            restaurant_ids.insert(seed.id, restaurant.id);
            restaurants.push(restaurant);
        }

        let mut dishes = Vec::with_capacity(self.dishes.len());
        for seed in self.dishes {
            let restaurant_id = restaurant_ids
                .get(&seed.restaurant_id)
                .copied()
                .with_context(|| {
                    format!(
                        "dish '{}' references unknown restaurant id {}",
                        seed.name, seed.restaurant_id
                    )
                })?;

            dishes.push(Dish::new(DishConfig {
                restaurant_id,
                name: seed.name,
                description: seed.description,
                price: seed.price,
                image_url: seed.image_url,
                allergen_profile: seed.allergen_profile,
            }));
        }

        Ok(Catalog {
            restaurants,
            dishes,
        })
    }
}

pub async fn load_seed_file(path: &Path) -> anyhow::Result<Catalog> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read catalog seed {}", path.display()))?;
    let seed: SeedCatalog = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse catalog seed {}", path.display()))?;

    let catalog = seed.into_catalog()?;
    info!(
        restaurants = catalog.restaurants.len(),
        dishes = catalog.dishes.len(),
        path = %path.display(),
        "catalog seeded from file"
    );

    Ok(catalog)
}

/// The bundled demo catalog: four restaurants and their menus, with
/// upstream-estimated allergen probabilities per dish.
pub fn default_catalog() -> Catalog {
    let spice_garden = Restaurant::new(RestaurantConfig {
        name: "Spice Garden".to_string(),
        description: "Authentic North Indian cuisine".to_string(),
        cuisine: "North Indian".to_string(),
        rating: 4.3,
        delivery_time: "30-40 min".to_string(),
        image_url: Some(
            "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=400&h=300&fit=crop"
                .to_string(),
        ),
    });
    let coastal_kitchen = Restaurant::new(RestaurantConfig {
        name: "Coastal Kitchen".to_string(),
        description: "Fresh seafood and coastal delicacies".to_string(),
        cuisine: "Coastal, Seafood".to_string(),
        rating: 4.5,
        delivery_time: "35-45 min".to_string(),
        image_url: Some(
            "https://images.unsplash.com/photo-1552566626-52f8b828add9?w=400&h=300&fit=crop"
                .to_string(),
        ),
    });
    let dragon_wok = Restaurant::new(RestaurantConfig {
        name: "Dragon Wok".to_string(),
        description: "Chinese and Asian fusion".to_string(),
        cuisine: "Chinese, Asian".to_string(),
        rating: 4.1,
        delivery_time: "25-35 min".to_string(),
        image_url: Some(
            "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=400&h=300&fit=crop"
                .to_string(),
        ),
    });
    let south_spice = Restaurant::new(RestaurantConfig {
        name: "South Spice".to_string(),
        description: "Traditional South Indian flavors".to_string(),
        cuisine: "South Indian".to_string(),
        rating: 4.4,
        delivery_time: "20-30 min".to_string(),
        image_url: Some(
            "https://images.unsplash.com/photo-1514933651103-005eec06c04b?w=400&h=300&fit=crop"
                .to_string(),
        ),
    });

    let dish = |restaurant: &Restaurant,
                name: &str,
                description: &str,
                price: i64,
                image: &str,
                profile: AllergenProfile| {
        Dish::new(DishConfig {
            restaurant_id: restaurant.id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            image_url: Some(image.to_string()),
            allergen_profile: Some(profile),
        })
    };

    let dishes = vec![
        dish(
            &spice_garden,
            "Butter Chicken",
            "Creamy tomato-based curry with tender chicken pieces",
            320,
            "https://images.unsplash.com/photo-1603894584373-5ac82b2ae398?w=400&h=300&fit=crop",
            AllergenProfile {
                milk: 0.95,
                wheat: 0.1,
                tree_nut: 0.15,
                ..Default::default()
            },
        ),
        dish(
            &spice_garden,
            "Paneer Tikka",
            "Grilled cottage cheese marinated in spices",
            280,
            "https://images.unsplash.com/photo-1567188040759-fb8a883dc6d8?w=400&h=300&fit=crop",
            AllergenProfile {
                milk: 0.98,
                sesame: 0.1,
                ..Default::default()
            },
        ),
        dish(
            &coastal_kitchen,
            "Vegetable Biryani",
            "Fragrant basmati rice with mixed vegetables and spices",
            250,
            "https://images.unsplash.com/photo-1563379091339-03b21ab4a4f8?w=400&h=300&fit=crop",
            AllergenProfile {
                milk: 0.2,
                tree_nut: 0.3,
                ..Default::default()
            },
        ),
        dish(
            &dragon_wok,
            "Chicken Momos",
            "Steamed dumplings filled with spiced chicken",
            180,
            "https://images.unsplash.com/photo-1534422298391-e4f8c172dddb?w=400&h=300&fit=crop",
            AllergenProfile {
                egg: 0.3,
                soy: 0.6,
                wheat: 0.95,
                sesame: 0.2,
                ..Default::default()
            },
        ),
        dish(
            &coastal_kitchen,
            "Fish Curry",
            "Traditional fish curry with coconut and spices",
            350,
            "https://images.unsplash.com/photo-1626776877210-23fba9f19ec0?w=400&h=300&fit=crop",
            AllergenProfile {
                fish: 0.99,
                milk: 0.1,
                ..Default::default()
            },
        ),
        dish(
            &dragon_wok,
            "Egg Fried Rice",
            "Wok-tossed rice with scrambled eggs and vegetables",
            200,
            "https://images.unsplash.com/photo-1603133872878-684f208fb84b?w=400&h=300&fit=crop",
            AllergenProfile {
                egg: 0.99,
                soy: 0.8,
                sesame: 0.3,
                ..Default::default()
            },
        ),
        dish(
            &spice_garden,
            "Naan Bread",
            "Soft leavened bread baked in tandoor",
            60,
            "https://images.unsplash.com/photo-1601050690597-df0568f70950?w=400&h=300&fit=crop",
            AllergenProfile {
                milk: 0.4,
                wheat: 0.99,
                ..Default::default()
            },
        ),
        dish(
            &coastal_kitchen,
            "Prawn Masala",
            "Succulent prawns in rich masala gravy",
            420,
            "https://images.unsplash.com/photo-1565557623262-b51c2513a641?w=400&h=300&fit=crop",
            AllergenProfile {
                milk: 0.3,
                shellfish: 0.99,
                ..Default::default()
            },
        ),
        dish(
            &south_spice,
            "Peanut Chutney Dosa",
            "Crispy dosa served with special peanut chutney",
            150,
            "https://images.unsplash.com/photo-1630383249896-424e482df921?w=400&h=300&fit=crop",
            AllergenProfile {
                peanut: 0.95,
                sesame: 0.4,
                ..Default::default()
            },
        ),
        dish(
            &spice_garden,
            "Almond Kheer",
            "Traditional rice pudding with almonds",
            120,
            "https://images.unsplash.com/photo-1488477181946-6428a0291777?w=400&h=300&fit=crop",
            AllergenProfile {
                milk: 0.99,
                tree_nut: 0.9,
                ..Default::default()
            },
        ),
        dish(
            &dragon_wok,
            "Sesame Chicken",
            "Crispy chicken tossed in sesame sauce",
            340,
            "https://images.unsplash.com/photo-1525755662778-989d0524087e?w=400&h=300&fit=crop",
            AllergenProfile {
                egg: 0.2,
                soy: 0.85,
                wheat: 0.6,
                sesame: 0.99,
                ..Default::default()
            },
        ),
        dish(
            &south_spice,
            "Plain Dosa",
            "Crispy South Indian crepe made from rice batter",
            100,
            "https://images.unsplash.com/photo-1668236543090-82eba5ee5976?w=400&h=300&fit=crop",
            AllergenProfile::default(),
        ),
    ];

    Catalog {
        restaurants: vec![spice_garden, coastal_kitchen, dragon_wok, south_spice],
        dishes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_consistent() {
        let catalog = default_catalog();

        assert_eq!(catalog.restaurants.len(), 4);
        assert_eq!(catalog.dishes.len(), 12);
        for dish in &catalog.dishes {
            assert!(
                catalog
                    .restaurants
                    .iter()
                    .any(|r| r.id == dish.restaurant_id),
                "dish '{}' points at a missing restaurant",
                dish.name
            );
        }
    }

    #[test]
    fn seed_catalog_resolves_restaurant_references() {
        let seed: SeedCatalog = serde_json::from_str(
            r#"{
                "restaurants": [
                    {
                        "id": 1,
                        "name": "Test Kitchen",
                        "description": "Test",
                        "cuisine": "Fusion",
                        "rating": 4.0,
                        "delivery_time": "10-20 min"
                    }
                ],
                "dishes": [
                    {
                        "restaurant_id": 1,
                        "name": "Test Dish",
                        "description": "A dish",
                        "price": 100,
                        "allergen_profile": {
                            "egg": 0.0, "soy": 0.0, "fish": 0.0,
                            "milk": 0.7, "wheat": 0.0, "peanut": 0.0,
                            "sesame": 0.0, "tree_nut": 0.0, "shellfish": 0.0
                        }
                    }
                ]
            }"#,
        )
        .unwrap();

        let catalog = seed.into_catalog().unwrap();
        assert_eq!(catalog.dishes[0].restaurant_id, catalog.restaurants[0].id);
        assert_eq!(catalog.dishes[0].allergen_profile.unwrap().milk, 0.7);
    }

    #[test]
    fn seed_catalog_rejects_dangling_restaurant_references() {
        let seed = SeedCatalog {
            restaurants: vec![],
            dishes: vec![SeedDish {
                restaurant_id: 7,
                name: "Orphan".to_string(),
                description: String::new(),
                price: 1,
                image_url: None,
                allergen_profile: None,
            }],
        };

        assert!(seed.into_catalog().is_err());
    }
}
