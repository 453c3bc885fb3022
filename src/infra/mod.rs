//! Infrastructure layer - Storage
//!
//! Process-lifetime, in-memory collections and the sample data they are
//! seeded with.

pub mod seed;
pub mod store;

pub use seed::{sample_items, sample_users};
pub use store::MemoryStore;
