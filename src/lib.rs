//! Sample REST API - in-memory CRUD over items and users
//!
//! Two process-lifetime collections, each exposed as
//! list/get/create/update/delete over HTTP with JSON bodies.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Record types and the `Resource` contract
//! - **infra**: In-memory stores and seed data
//! - **services**: CRUD use cases behind injectable traits
//! - **api**: HTTP handlers, extractors, routes and OpenAPI docs
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 8000
//!
//! # Dump the OpenAPI document
//! cargo run -- openapi --pretty
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Item, ItemInput, Resource, User, UserInput};
pub use errors::{AppError, AppResult};
pub use infra::MemoryStore;
pub use services::{ResourceManager, ResourceService, Services};
