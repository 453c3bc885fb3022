//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `openapi` - Print the OpenAPI document

pub mod args;

pub use args::{Cli, Commands};
