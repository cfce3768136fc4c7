pub mod get_restaurant;
pub mod get_restaurant_dishes;
pub mod get_restaurants;
