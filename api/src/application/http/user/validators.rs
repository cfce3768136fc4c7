use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserValidator {
    #[validate(email(message = "email is invalid"))]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAllergiesValidator {
    /// Whole-list replacement; an empty list clears the profile.
    #[validate(length(max = 64, message = "too many allergies"))]
    pub allergies: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAllergyModeValidator {
    pub enabled: bool,
}
