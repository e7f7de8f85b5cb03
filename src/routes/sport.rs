//! Sport CRUD routes.

use crate::handlers::sport::{create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, routing::post, routing::put, Router};

pub fn sport_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/sports", get(list))
        .route("/api/sports/new", post(create))
        .route("/api/sports/:id", put(update).delete(delete_handler))
        .with_state(state)
}
