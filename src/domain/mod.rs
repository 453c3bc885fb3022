//! Domain layer - Core entities
//!
//! Record types held by the resource store and the payloads clients send
//! to create or replace them.

pub mod item;
pub mod resource;
pub mod user;

pub use item::{Item, ItemInput};
pub use resource::Resource;
pub use user::{User, UserInput};
