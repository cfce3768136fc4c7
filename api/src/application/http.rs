pub mod allergen;
pub mod cart;
pub mod dish;
pub mod health;
pub mod restaurant;
pub mod server;
pub mod user;
