use tracing::info;

use crate::domain::common::{MealguardConfig, services::Service};
use crate::infrastructure::memory::{
    InMemoryCartRepository, InMemoryDishRepository, InMemoryProfileRepository,
    InMemoryRestaurantRepository, seed,
};

pub type MealguardService = Service<
    InMemoryDishRepository,
    InMemoryRestaurantRepository,
    InMemoryProfileRepository,
    InMemoryCartRepository,
>;

/// Seed the store and wire the repositories into a service.
pub async fn create_service(config: MealguardConfig) -> anyhow::Result<MealguardService> {
    let catalog = match &config.catalog.seed_path {
        Some(path) => seed::load_seed_file(path).await?,
        None => {
            let catalog = seed::default_catalog();
            info!(
                restaurants = catalog.restaurants.len(),
                dishes = catalog.dishes.len(),
                "catalog seeded from built-in demo data"
            );
            catalog
        }
    };

    let dish_repository = InMemoryDishRepository::new(catalog.dishes);
    let restaurant_repository = InMemoryRestaurantRepository::new(catalog.restaurants);
    let profile_repository = InMemoryProfileRepository::new();
    let cart_repository = InMemoryCartRepository::new();

    Ok(Service::new(
        dish_repository,
        restaurant_repository,
        profile_repository,
        cart_repository,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        cart::{ports::CartService, value_objects::AddToCartInput},
        catalog::{ports::CatalogService, value_objects::GetDishesFilter},
        profile::{
            ports::ProfileService,
            value_objects::{
                CheckDishForUserInput, RegisterProfileInput, SaveAllergiesInput,
                SetAllergyModeInput,
            },
        },
    };

    async fn service() -> MealguardService {
        create_service(MealguardConfig::default()).await.unwrap()
    }

    async fn find_dish(service: &MealguardService, name: &str) -> uuid::Uuid {
        service
            .get_dishes(GetDishesFilter::default())
            .await
            .unwrap()
            .into_iter()
            .find(|d| d.name == name)
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn verdict_follows_the_user_allergy_list() {
        let service = service().await;
        let butter_chicken = find_dish(&service, "Butter Chicken").await;

        let user = service
            .register_profile(RegisterProfileInput {
                email: "mira@example.com".to_string(),
            })
            .await
            .unwrap();
        service
            .save_allergies(SaveAllergiesInput {
                user_id: user.id,
                allergies: vec!["milk".to_string(), "fish".to_string()],
            })
            .await
            .unwrap();

        let verdict = service
            .check_dish_for_user(CheckDishForUserInput {
                user_id: user.id,
                dish_id: butter_chicken,
            })
            .await
            .unwrap();

        assert!(!verdict.is_safe);
        assert_eq!(verdict.highest_risk.unwrap().name, "milk");
    }

    #[tokio::test]
    async fn allergy_mode_off_suppresses_warnings() {
        let service = service().await;
        let butter_chicken = find_dish(&service, "Butter Chicken").await;

        let user = service
            .register_profile(RegisterProfileInput {
                email: "ravi@example.com".to_string(),
            })
            .await
            .unwrap();
        service
            .save_allergies(SaveAllergiesInput {
                user_id: user.id,
                allergies: vec!["milk".to_string()],
            })
            .await
            .unwrap();
        service
            .set_allergy_mode(SetAllergyModeInput {
                user_id: user.id,
                enabled: false,
            })
            .await
            .unwrap();

        let verdict = service
            .check_dish_for_user(CheckDishForUserInput {
                user_id: user.id,
                dish_id: butter_chicken,
            })
            .await
            .unwrap();

        assert!(verdict.is_safe);
        assert!(verdict.unsafe_allergens.is_empty());
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let service = service().await;

        service
            .register_profile(RegisterProfileInput {
                email: "dup@example.com".to_string(),
            })
            .await
            .unwrap();
        let err = service
            .register_profile(RegisterProfileInput {
                email: "dup@example.com".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            crate::domain::common::entities::app_errors::CoreError::AlreadyExists
        );
    }

    #[tokio::test]
    async fn cart_accumulates_dishes_from_the_catalog() {
        let service = service().await;
        let naan = find_dish(&service, "Naan Bread").await;

        let user = service
            .register_profile(RegisterProfileInput {
                email: "cart@example.com".to_string(),
            })
            .await
            .unwrap();

        service
            .add_to_cart(AddToCartInput {
                user_id: user.id,
                dish_id: naan,
            })
            .await
            .unwrap();
        let cart = service
            .add_to_cart(AddToCartInput {
                user_id: user.id,
                dish_id: naan,
            })
            .await
            .unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), 120);
    }
}
