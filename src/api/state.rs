//! Application state - Dependency injection container.
//!
//! Provides handlers with access to the resource services.

use std::sync::Arc;

use crate::domain::{Item, User};
use crate::services::{ResourceService, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Item collection service
    pub item_service: Arc<dyn ResourceService<Item>>,
    /// User collection service
    pub user_service: Arc<dyn ResourceService<User>>,
}

impl AppState {
    /// Create application state from the service container.
    pub fn from_services(services: &Services) -> Self {
        Self {
            item_service: services.items(),
            user_service: services.users(),
        }
    }

    /// Create application state backed by freshly seeded in-memory stores.
    pub fn seeded() -> Self {
        Self::from_services(&Services::seeded())
    }

    /// Create new application state with manually injected services.
    pub fn new(
        item_service: Arc<dyn ResourceService<Item>>,
        user_service: Arc<dyn ResourceService<User>>,
    ) -> Self {
        Self {
            item_service,
            user_service,
        }
    }
}
