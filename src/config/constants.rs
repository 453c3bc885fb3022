//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// API Metadata
// =============================================================================

/// Title reported by the OpenAPI document
pub const API_TITLE: &str = "Sample REST API";

/// Public API version
pub const API_VERSION: &str = "1.0.0";

/// Greeting returned by the root endpoint
pub const ROOT_MESSAGE: &str = "FastAPI REST API Sample";

/// Status reported by the health endpoint
pub const HEALTH_STATUS_HEALTHY: &str = "healthy";

// =============================================================================
// Routes
// =============================================================================

/// Base path of the item collection
pub const ITEMS_PATH: &str = "/api/items";

/// Base path of the user collection
pub const USERS_PATH: &str = "/api/users";

/// Health check path
pub const HEALTH_PATH: &str = "/api/health";

/// Swagger UI mount point
pub const DOCS_PATH: &str = "/docs";

/// Generated OpenAPI document path
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";
