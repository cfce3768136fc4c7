use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckDishSafetyValidator {
    /// Allergy names as the user typed them; unrecognized entries are
    /// ignored by the evaluator.
    #[validate(length(max = 64, message = "too many allergies"))]
    pub allergies: Vec<String>,
}
