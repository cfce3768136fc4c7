pub mod create_user;
pub mod get_dish_safety;
pub mod get_user;
pub mod get_user_allergies;
pub mod update_allergy_mode;
pub mod update_user_allergies;
