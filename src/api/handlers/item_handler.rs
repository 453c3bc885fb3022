//! Item handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::{JsonBody, RecordId};
use crate::api::AppState;
use crate::domain::{Item, ItemInput, Resource};
use crate::errors::{AppResult, ErrorResponse};
use crate::types::{Created, MessageResponse};

/// Create item routes
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

/// List all items
#[utoipa::path(
    get,
    path = "/api/items",
    tag = "Items",
    responses(
        (status = 200, description = "All items in insertion order", body = Vec<Item>)
    )
)]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.item_service.list().await)
}

/// Get item by ID
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Item>> {
    Ok(Json(state.item_service.get(id).await?))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/api/items",
    tag = "Items",
    request_body = ItemInput,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 422, description = "Malformed request body", body = ErrorResponse)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ItemInput>,
) -> Created<Item> {
    Created(state.item_service.create(payload).await)
}

/// Replace an existing item
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = ItemInput,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse)
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(payload): JsonBody<ItemInput>,
) -> AppResult<Json<Item>> {
    Ok(Json(state.item_service.update(id, payload).await?))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<MessageResponse>> {
    state.item_service.delete(id).await?;
    Ok(Json(MessageResponse::deleted(Item::NAME)))
}
