//! Application services layer - Use cases.
//!
//! Services sit between the HTTP handlers and the in-memory stores and
//! are injected as trait objects so handlers can be tested with mocks.

pub mod container;
mod resource_service;

pub use container::Services;
pub use resource_service::{ResourceManager, ResourceService};
