pub mod get_allergens;
