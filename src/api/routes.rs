//! Application route configuration.

use axum::{response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{item_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{
    API_VERSION, DOCS_PATH, HEALTH_PATH, HEALTH_STATUS_HEALTHY, ITEMS_PATH, OPENAPI_JSON_PATH,
    ROOT_MESSAGE, USERS_PATH,
};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route(HEALTH_PATH, get(health))
        .nest(ITEMS_PATH, item_routes())
        .nest(USERS_PATH, user_routes())
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        // Any origin, method and header; credentials allowed
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API metadata returned by the root endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "FastAPI REST API Sample")]
    pub message: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    pub endpoints: EndpointIndex,
}

/// Entry points of the resource collections
#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointIndex {
    #[schema(example = "/api/items")]
    pub items: String,
    #[schema(example = "/api/users")]
    pub users: String,
    #[schema(example = "/api/health")]
    pub health: String,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Root endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "Meta",
    responses(
        (status = 200, description = "API metadata", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
        version: API_VERSION.to_string(),
        endpoints: EndpointIndex {
            items: ITEMS_PATH.to_string(),
            users: USERS_PATH.to_string(),
            health: HEALTH_PATH.to_string(),
        },
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Meta",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS_HEALTHY.to_string(),
        timestamp: Utc::now(),
    })
}
