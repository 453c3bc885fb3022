//! Resource service - CRUD use cases over one collection.
//!
//! The same implementation serves items and users; the entity type only
//! decides the payload shape and the name in error messages.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Resource;
use crate::errors::{AppError, AppResult};
use crate::infra::MemoryStore;

/// Resource service trait for dependency injection.
///
/// `list` and `create` cannot fail; the other operations report
/// [`AppError::NotFound`] when no record has the given id.
#[async_trait]
pub trait ResourceService<T: Resource>: Send + Sync {
    /// All records in insertion order
    async fn list(&self) -> Vec<T>;

    async fn get(&self, id: i64) -> AppResult<T>;

    /// Store a new record; id and timestamp are assigned here
    async fn create(&self, input: T::Input) -> T;

    /// Replace every field except id and creation timestamp
    async fn update(&self, id: i64, input: T::Input) -> AppResult<T>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ResourceService backed by a [`MemoryStore`].
pub struct ResourceManager<T: Resource> {
    store: Arc<MemoryStore<T>>,
}

impl<T: Resource> ResourceManager<T> {
    pub fn new(store: Arc<MemoryStore<T>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<T: Resource> ResourceService<T> for ResourceManager<T> {
    async fn list(&self) -> Vec<T> {
        self.store.list().await
    }

    async fn get(&self, id: i64) -> AppResult<T> {
        self.store.find(id).await.ok_or_else(|| not_found::<T>(id))
    }

    async fn create(&self, input: T::Input) -> T {
        let record = self.store.insert(input).await;
        tracing::info!(resource = T::NAME, id = record.id(), "record created");
        record
    }

    async fn update(&self, id: i64, input: T::Input) -> AppResult<T> {
        let record = self
            .store
            .replace(id, input)
            .await
            .ok_or_else(|| not_found::<T>(id))?;
        tracing::info!(resource = T::NAME, id, "record updated");
        Ok(record)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.store
            .remove(id)
            .await
            .ok_or_else(|| not_found::<T>(id))?;
        tracing::info!(resource = T::NAME, id, "record deleted");
        Ok(())
    }
}

fn not_found<T: Resource>(id: i64) -> AppError {
    tracing::debug!(resource = T::NAME, id, "record not found");
    AppError::NotFound(T::NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, ItemInput, User, UserInput};
    use crate::infra::{sample_items, sample_users};

    fn seeded_items() -> ResourceManager<Item> {
        ResourceManager::new(Arc::new(MemoryStore::with_records(sample_items())))
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_record() {
        let service = seeded_items();

        let created = service
            .create(ItemInput::new("x", Some("desc"), 5.0))
            .await;
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(created.id, 3);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn created_ids_strictly_increase() {
        let service = seeded_items();
        let mut last = 2;

        for n in 0..5 {
            let item = service
                .create(ItemInput::new(format!("item-{n}"), None, 1.0))
                .await;
            assert!(item.id > last);
            last = item.id;
        }
    }

    #[tokio::test]
    async fn update_preserves_id_and_created_at() {
        let service = seeded_items();
        let before = service.get(1).await.unwrap();

        let after = service
            .update(1, ItemInput::new("renamed", None, -3.0))
            .await
            .unwrap();

        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.name, "renamed");
        assert_eq!(after.description, None);
        assert_eq!(after.price, -3.0);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let service = seeded_items();

        service.delete(2).await.unwrap();

        assert!(matches!(service.get(2).await, Err(AppError::NotFound("Item"))));
        assert!(matches!(service.delete(2).await, Err(AppError::NotFound("Item"))));
    }

    #[tokio::test]
    async fn update_of_missing_user_leaves_collection_unchanged() {
        let service =
            ResourceManager::new(Arc::new(MemoryStore::with_records(sample_users())));
        let before = service.list().await;

        let result = service
            .update(999, UserInput::new("ghost", "ghost@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::NotFound("User"))));
        assert_eq!(service.list().await, before);
    }

    #[tokio::test]
    async fn list_reflects_creates_minus_deletes() {
        let service: ResourceManager<User> = ResourceManager::new(Arc::new(MemoryStore::new()));
        for n in 1..=5 {
            service
                .create(UserInput::new(format!("u{n}"), format!("u{n}@example.com")))
                .await;
        }
        service.delete(2).await.unwrap();
        service.delete(4).await.unwrap();

        let ids: Vec<i64> = service.list().await.iter().map(|u| u.id).collect();
        assert_eq!(ids, [1, 3, 5]);
    }
}
