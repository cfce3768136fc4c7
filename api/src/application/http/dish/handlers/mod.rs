pub mod check_dish_safety;
pub mod get_dish;
pub mod get_dishes;
