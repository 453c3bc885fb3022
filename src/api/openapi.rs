//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{item_handler, user_handler};
use crate::api::routes;
use crate::domain::{Item, ItemInput, User, UserInput};
use crate::errors::ErrorResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the sample REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sample REST API",
        version = "1.0.0",
        description = "Sample REST API with in-memory items and users",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // Meta endpoints
        routes::root,
        routes::health,
        // Item endpoints
        item_handler::list_items,
        item_handler::get_item,
        item_handler::create_item,
        item_handler::update_item,
        item_handler::delete_item,
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            // Domain types
            Item,
            ItemInput,
            User,
            UserInput,
            // Shared response types
            MessageResponse,
            ErrorResponse,
            routes::RootResponse,
            routes::EndpointIndex,
            routes::HealthResponse,
        )
    ),
    tags(
        (name = "Meta", description = "API metadata and health"),
        (name = "Items", description = "Item collection operations"),
        (name = "Users", description = "User collection operations")
    )
)]
pub struct ApiDoc;
