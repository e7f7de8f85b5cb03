//! JSON object body extractor with the API's own error envelope.
//!
//! Unlike `axum::Json` it does not require a `Content-Type` header, and every
//! body that is not a JSON object answers 400 `Invalid JSON format`.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Clone, Debug)]
pub struct JsonObject<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonObject<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        decode_object(&bytes).map(JsonObject)
    }
}

/// Parse first, then require an object, then map onto `T`.
pub fn decode_object<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|_| AppError::invalid_json())?;
    if !value.is_object() {
        return Err(AppError::invalid_json());
    }
    serde_json::from_value(value).map_err(|e| AppError::MalformedInput(e.to_string()))
}
