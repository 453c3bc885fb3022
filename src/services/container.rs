//! Service Container - Wires stores and services together.
//!
//! Built once at process start; handlers receive the services through
//! [`crate::api::AppState`], never through globals.

use std::sync::Arc;

use super::{ResourceManager, ResourceService};
use crate::domain::{Item, User};
use crate::infra::{sample_items, sample_users, MemoryStore};

/// Concrete service container
#[derive(Clone)]
pub struct Services {
    item_service: Arc<dyn ResourceService<Item>>,
    user_service: Arc<dyn ResourceService<User>>,
}

impl Services {
    /// Create a container from already built services
    pub fn new(
        item_service: Arc<dyn ResourceService<Item>>,
        user_service: Arc<dyn ResourceService<User>>,
    ) -> Self {
        Self {
            item_service,
            user_service,
        }
    }

    /// Create a container whose stores hold the startup sample records
    pub fn seeded() -> Self {
        Self::from_stores(
            MemoryStore::with_records(sample_items()),
            MemoryStore::with_records(sample_users()),
        )
    }

    /// Create a container with empty collections
    pub fn empty() -> Self {
        Self::from_stores(MemoryStore::new(), MemoryStore::new())
    }

    fn from_stores(items: MemoryStore<Item>, users: MemoryStore<User>) -> Self {
        Self::new(
            Arc::new(ResourceManager::new(Arc::new(items))),
            Arc::new(ResourceManager::new(Arc::new(users))),
        )
    }

    /// Get item service
    pub fn items(&self) -> Arc<dyn ResourceService<Item>> {
        self.item_service.clone()
    }

    /// Get user service
    pub fn users(&self) -> Arc<dyn ResourceService<User>> {
        self.user_service.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_container_has_two_records_per_collection() {
        let services = Services::seeded();

        let items = services.items().list().await;
        let users = services.users().list().await;

        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), [1, 2]);
        assert_eq!(users[1].email, "user2@example.com");
    }

    #[tokio::test]
    async fn empty_container_starts_ids_at_one() {
        let services = Services::empty();
        assert!(services.users().list().await.is_empty());
    }
}
