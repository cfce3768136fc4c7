use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AddToCartInput {
    pub user_id: Uuid,
    pub dish_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct UpdateCartItemInput {
    pub user_id: Uuid,
    pub dish_id: Uuid,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct RemoveCartItemInput {
    pub user_id: Uuid,
    pub dish_id: Uuid,
}
