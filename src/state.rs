//! Shared application state for all routes.

use crate::repository::SportRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn SportRepository>,
    /// When set, 500 responses carry a generic message instead of the cause.
    pub redact_internal_errors: bool,
}

impl AppState {
    pub fn new(repo: Arc<dyn SportRepository>) -> Self {
        AppState {
            repo,
            redact_internal_errors: false,
        }
    }
}
