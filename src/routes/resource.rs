//! Resource CRUD routes. Paths are parameterized; handlers resolve the resource by name.

use crate::handlers::resource::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/:name", get(list).post(create))
        .route("/:name/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
