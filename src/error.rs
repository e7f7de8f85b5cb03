//! Typed errors and HTTP mapping.

use crate::response::{ErrorMessage, ViolationList};
use crate::validation::Violation;
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Message returned when a request body is not a JSON object.
pub const INVALID_JSON: &str = "Invalid JSON format";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    MalformedInput(String),
    #[error("validation failed: {}", summary(.0))]
    Validation(Vec<Violation>),
    #[error(transparent)]
    Body(#[from] BytesRejection),
    #[error("{0}")]
    Db(#[from] sqlx::Error),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_json() -> Self {
        AppError::MalformedInput(INVALID_JSON.to_string())
    }
}

fn summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::describe)
        .collect::<Vec<_>>()
        .join("; ")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::MalformedInput(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorMessage::new(message))).into_response()
            }
            AppError::Validation(violations) => {
                (StatusCode::BAD_REQUEST, Json(ViolationList::new(violations))).into_response()
            }
            AppError::Body(rejection) => rejection.into_response(),
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorMessage::new(e.to_string())))
                    .into_response()
            }
            AppError::Internal(message) => {
                tracing::error!(error = %message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorMessage::new(message))).into_response()
            }
        }
    }
}
