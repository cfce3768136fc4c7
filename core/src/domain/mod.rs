pub mod allergen;
pub mod cart;
pub mod catalog;
pub mod common;
pub mod profile;
