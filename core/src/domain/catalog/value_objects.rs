use uuid::Uuid;

/// Filter for dish listings. `query` is a free-text search over dish
/// name and description; absent means no text filter.
#[derive(Debug, Clone, Default)]
pub struct GetDishesFilter {
    pub query: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct GetRestaurantDishesInput {
    pub restaurant_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct CheckDishSafetyInput {
    pub dish_id: Uuid,
    pub allergies: Vec<String>,
}
