use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RegisterProfileInput {
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct SaveAllergiesInput {
    pub user_id: Uuid,
    pub allergies: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SetAllergyModeInput {
    pub user_id: Uuid,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct CheckDishForUserInput {
    pub user_id: Uuid,
    pub dish_id: Uuid,
}
