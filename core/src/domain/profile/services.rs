use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    allergen::{services::check_dish_safety, value_objects::SafetyVerdict},
    cart::ports::CartRepository,
    catalog::ports::{DishRepository, RestaurantRepository},
    common::{entities::app_errors::CoreError, services::Service},
    profile::{
        entities::UserProfile,
        ports::{ProfileRepository, ProfileService},
        value_objects::{
            CheckDishForUserInput, RegisterProfileInput, SaveAllergiesInput, SetAllergyModeInput,
        },
    },
};

impl<D, R, P, C> ProfileService for Service<D, R, P, C>
where
    D: DishRepository,
    R: RestaurantRepository,
    P: ProfileRepository,
    C: CartRepository,
{
    #[instrument(skip(self), fields(email = %input.email))]
    async fn register_profile(&self, input: RegisterProfileInput) -> Result<UserProfile, CoreError> {
        if self
            .profile_repository
            .get_by_email(input.email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::AlreadyExists);
        }

        let profile = UserProfile::new(input.email);

        self.profile_repository.create(profile).await
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<UserProfile, CoreError> {
        self.profile_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn save_allergies(&self, input: SaveAllergiesInput) -> Result<UserProfile, CoreError> {
        let mut profile = self
            .profile_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        profile.replace_allergies(input.allergies);

        self.profile_repository.update(profile).await
    }

    async fn set_allergy_mode(&self, input: SetAllergyModeInput) -> Result<UserProfile, CoreError> {
        let mut profile = self
            .profile_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        profile.set_allergy_mode(input.enabled);

        self.profile_repository.update(profile).await
    }

    #[instrument(skip(self), fields(user_id = %input.user_id, dish_id = %input.dish_id))]
    async fn check_dish_for_user(
        &self,
        input: CheckDishForUserInput,
    ) -> Result<SafetyVerdict, CoreError> {
        let profile = self
            .profile_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let dish = self
            .dish_repository
            .get_by_id(input.dish_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        // warnings off means no evaluation at all
        if !profile.allergy_mode {
            return Ok(SafetyVerdict::safe());
        }

        Ok(check_dish_safety(
            dish.allergen_profile.as_ref(),
            &profile.allergies,
        ))
    }
}
