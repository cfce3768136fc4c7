use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddCartItemValidator {
    pub dish_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCartItemValidator {
    /// Zero removes the line from the cart.
    #[validate(range(max = 99, message = "quantity is too large"))]
    pub quantity: u32,
}
