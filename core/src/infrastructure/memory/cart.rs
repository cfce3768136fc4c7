use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    cart::{entities::Cart, ports::CartRepository},
    common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryCartRepository {
    carts: Arc<RwLock<HashMap<Uuid, Cart>>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartRepository for InMemoryCartRepository {
    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<Cart>, CoreError> {
        Ok(self.carts.read().await.get(&user_id).cloned())
    }

    async fn save(&self, cart: Cart) -> Result<Cart, CoreError> {
        self.carts.write().await.insert(cart.user_id, cart.clone());

        Ok(cart)
    }
}
