use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One allergen from the user's list that crossed the unsafe
/// threshold. `name` keeps the user's original spelling so the
/// presentation layer can echo it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UnsafeAllergen {
    pub name: String,
    pub probability: f64,
}

/// Transient result of evaluating one dish against one allergy list.
/// Never stored; recomputed on every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SafetyVerdict {
    pub is_safe: bool,
    pub unsafe_allergens: Vec<UnsafeAllergen>,
    pub highest_risk: Option<UnsafeAllergen>,
}

impl SafetyVerdict {
    pub fn safe() -> Self {
        Self {
            is_safe: true,
            unsafe_allergens: Vec::new(),
            highest_risk: None,
        }
    }
}
