//! JSON body extractor with JSON error responses.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejections become `422` [`AppError::Validation`]
/// bodies instead of axum's plain-text responses.
///
/// # Example
///
/// ```rust,ignore
/// use sample_rest_api::api::extractors::JsonBody;
/// use sample_rest_api::domain::ItemInput;
///
/// async fn create_item(JsonBody(payload): JsonBody<ItemInput>) {
///     // payload has the expected field types
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
