//! Response envelopes for error bodies.

use crate::validation::Violation;
use serde::Serialize;
use utoipa::ToSchema;

/// `{"error_message": "..."}`, used for malformed bodies and internal failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorMessage {
    pub error_message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorMessage {
            error_message: message.into(),
        }
    }
}

/// Validation failure body. Clients rely on `violations[0].title`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ViolationList {
    pub title: String,
    pub detail: String,
    pub violations: Vec<Violation>,
}

impl ViolationList {
    pub fn new(violations: Vec<Violation>) -> Self {
        let detail = violations
            .iter()
            .map(Violation::describe)
            .collect::<Vec<_>>()
            .join("\n");
        ViolationList {
            title: "Validation Failed".into(),
            detail,
            violations,
        }
    }
}
