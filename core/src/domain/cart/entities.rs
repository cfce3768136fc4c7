use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{catalog::entities::Dish, common::generate_timestamp};

/// A line in the cart. Name, price and image are denormalized from the
/// dish at the moment it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub dish_id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: Option<String>,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    pub user_id: Uuid,
    pub items: Vec<CartItem>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn empty(user_id: Uuid) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            user_id,
            items: Vec::new(),
            updated_at: now,
        }
    }

    /// Add one serving of a dish. Adding a dish that is already in the
    /// cart bumps its quantity instead of creating a second line.
    pub fn add_dish(&mut self, dish: &Dish) {
        if let Some(item) = self.items.iter_mut().find(|item| item.dish_id == dish.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                dish_id: dish.id,
                restaurant_id: dish.restaurant_id,
                name: dish.name.clone(),
                description: dish.description.clone(),
                price: dish.price,
                image_url: dish.image_url.clone(),
                quantity: 1,
            });
        }
        self.touch();
    }

    /// Set a line's quantity. Zero removes the line; an unknown dish id
    /// is a no-op.
    pub fn update_quantity(&mut self, dish_id: Uuid, quantity: u32) {
        if quantity == 0 {
            self.remove_dish(dish_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.dish_id == dish_id) {
            item.quantity = quantity;
            self.touch();
        }
    }

    pub fn remove_dish(&mut self, dish_id: Uuid) {
        self.items.retain(|item| item.dish_id != dish_id);
        self.touch();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.touch();
    }

    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn total_price(&self) -> i64 {
        self.items
            .iter()
            .map(|item| item.price * i64::from(item.quantity))
            .sum()
    }

    fn touch(&mut self) {
        let (now, _) = generate_timestamp();
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::entities::DishConfig;

    fn dish(name: &str, price: i64) -> Dish {
        Dish::new(DishConfig {
            restaurant_id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            price,
            image_url: None,
            allergen_profile: None,
        })
    }

    #[test]
    fn adding_the_same_dish_twice_increments_quantity() {
        let naan = dish("Naan Bread", 60);
        let mut cart = Cart::empty(Uuid::new_v4());

        cart.add_dish(&naan);
        cart.add_dish(&naan);

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), 120);
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let naan = dish("Naan Bread", 60);
        let mut cart = Cart::empty(Uuid::new_v4());

        cart.add_dish(&naan);
        cart.update_quantity(naan.id, 0);

        assert!(cart.items.is_empty());
    }

    #[test]
    fn updating_an_unknown_dish_is_a_noop() {
        let naan = dish("Naan Bread", 60);
        let mut cart = Cart::empty(Uuid::new_v4());

        cart.add_dish(&naan);
        cart.update_quantity(Uuid::new_v4(), 5);

        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn totals_sum_across_lines() {
        let naan = dish("Naan Bread", 60);
        let curry = dish("Butter Chicken", 320);
        let mut cart = Cart::empty(Uuid::new_v4());

        cart.add_dish(&naan);
        cart.add_dish(&curry);
        cart.update_quantity(naan.id, 3);

        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), 3 * 60 + 320);
    }

    #[test]
    fn clear_empties_the_cart() {
        let naan = dish("Naan Bread", 60);
        let mut cart = Cart::empty(Uuid::new_v4());

        cart.add_dish(&naan);
        cart.clear();

        assert!(cart.items.is_empty());
        assert_eq!(cart.total_price(), 0);
    }
}
