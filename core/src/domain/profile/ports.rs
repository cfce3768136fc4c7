use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    allergen::value_objects::SafetyVerdict,
    common::entities::app_errors::CoreError,
    profile::{
        entities::UserProfile,
        value_objects::{
            CheckDishForUserInput, RegisterProfileInput, SaveAllergiesInput, SetAllergyModeInput,
        },
    },
};

/// Repository trait for user profiles. Load and save are explicit:
/// nothing here touches ambient storage.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn create(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    fn update(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}

/// Service trait for profile and allergy management
pub trait ProfileService: Send + Sync {
    fn register_profile(
        &self,
        input: RegisterProfileInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_profile(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn save_allergies(
        &self,
        input: SaveAllergiesInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn set_allergy_mode(
        &self,
        input: SetAllergyModeInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    /// Per-user dish verdict. Honors the allergy-mode flag: when the
    /// user has warnings turned off the dish is reported safe.
    fn check_dish_for_user(
        &self,
        input: CheckDishForUserInput,
    ) -> impl Future<Output = Result<SafetyVerdict, CoreError>> + Send;
}
