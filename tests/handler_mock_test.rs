//! Handler tests against mocked resource services.
//!
//! These check how handlers translate service results into HTTP
//! responses, independent of the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use chrono::Utc;
use mockall::{mock, predicate::eq};
use serde_json::Value;
use tower::ServiceExt;

use sample_rest_api::domain::{Item, ItemInput, Resource, User, UserInput};
use sample_rest_api::errors::{AppError, AppResult};
use sample_rest_api::services::{ResourceService, Services};
use sample_rest_api::{create_router, AppState};

mock! {
    pub ItemService {}

    #[async_trait]
    impl ResourceService<Item> for ItemService {
        async fn list(&self) -> Vec<Item>;
        async fn get(&self, id: i64) -> AppResult<Item>;
        async fn create(&self, input: ItemInput) -> Item;
        async fn update(&self, id: i64, input: ItemInput) -> AppResult<Item>;
        async fn delete(&self, id: i64) -> AppResult<()>;
    }
}

mock! {
    pub UserService {}

    #[async_trait]
    impl ResourceService<User> for UserService {
        async fn list(&self) -> Vec<User>;
        async fn get(&self, id: i64) -> AppResult<User>;
        async fn create(&self, input: UserInput) -> User;
        async fn update(&self, id: i64, input: UserInput) -> AppResult<User>;
        async fn delete(&self, id: i64) -> AppResult<()>;
    }
}

fn state_with_items(items: MockItemService) -> AppState {
    AppState::new(Arc::new(items), Services::empty().users())
}

fn state_with_users(users: MockUserService) -> AppState {
    AppState::new(Services::empty().items(), Arc::new(users))
}

async fn call(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = create_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_get_item_not_found_maps_to_404() {
    let mut items = MockItemService::new();
    items
        .expect_get()
        .with(eq(7))
        .times(1)
        .returning(|_| Err(AppError::NotFound(Item::NAME)));

    let request = Request::get("/api/items/7").body(Body::empty()).unwrap();
    let (status, body) = call(state_with_items(items), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Item not found");
}

#[tokio::test]
async fn test_create_item_passes_payload_and_returns_201() {
    let mut items = MockItemService::new();
    items
        .expect_create()
        .with(eq(ItemInput::new("desk", Some("oak"), 250.0)))
        .times(1)
        .returning(|input| Item::build(10, Utc::now(), input));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/items")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"name": "desk", "description": "oak", "price": 250}"#,
        ))
        .unwrap();
    let (status, body) = call(state_with_items(items), request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 10);
    assert_eq!(body["description"], "oak");
}

#[tokio::test]
async fn test_malformed_body_never_reaches_service() {
    let mut users = MockUserService::new();
    users.expect_update().times(0);

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/users/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"username": 12}"#))
        .unwrap();
    let (status, body) = call(state_with_users(users), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_user_returns_confirmation() {
    let mut users = MockUserService::new();
    users
        .expect_delete()
        .with(eq(2))
        .times(1)
        .returning(|_| Ok(()));

    let request = Request::delete("/api/users/2").body(Body::empty()).unwrap();
    let (status, body) = call(state_with_users(users), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted successfully");
}

#[tokio::test]
async fn test_list_users_serializes_service_output() {
    let mut users = MockUserService::new();
    users.expect_list().times(1).returning(|| {
        vec![User::build(
            5,
            Utc::now(),
            UserInput::new("carol", "carol@example.com"),
        )]
    });

    let request = Request::get("/api/users").body(Body::empty()).unwrap();
    let (status, body) = call(state_with_users(users), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["username"], "carol");
    assert_eq!(body.as_array().unwrap().len(), 1);
}
