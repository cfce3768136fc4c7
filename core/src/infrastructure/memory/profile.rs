use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::UserProfile, ports::ProfileRepository},
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<Uuid, UserProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    async fn create(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        let mut profiles = self.profiles.write().await;
        if profiles.contains_key(&profile.id) {
            return Err(CoreError::AlreadyExists);
        }
        profiles.insert(profile.id, profile.clone());

        Ok(profile)
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn get_by_email(&self, email: String) -> Result<Option<UserProfile>, CoreError> {
        Ok(self
            .profiles
            .read()
            .await
            .values()
            .find(|p| p.email == email)
            .cloned())
    }

    async fn update(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        let mut profiles = self.profiles.write().await;
        if !profiles.contains_key(&profile.id) {
            return Err(CoreError::NotFound);
        }
        profiles.insert(profile.id, profile.clone());

        Ok(profile)
    }
}
