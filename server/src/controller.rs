//! Request handlers for `/todos`.
//!
//! Each handler takes the shared store, performs one store call under the
//! appropriate lock, and maps the outcome to a response. A non-integer path
//! id and body extraction failures of any kind (missing content type,
//! malformed JSON, `null`, wrong shape) are reported as 400.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use todo_core::{Todo, TodoId, TodoPayload};
use tracing::info;

use crate::{error::ApiError, SharedStore};

pub fn routes() -> Router<SharedStore> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    Json(store.read().await.get_all())
}

async fn get_todo(
    State(store): State<SharedStore>,
    path: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = path?;
    store
        .read()
        .await
        .find_by_id(id)
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

async fn create_todo(
    State(store): State<SharedStore>,
    body: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(payload) = body?;
    let todo = store.write().await.save(payload)?;
    info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(store): State<SharedStore>,
    path: Result<Path<TodoId>, PathRejection>,
    body: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = path?;
    let Json(payload) = body?;
    let todo = store.write().await.update(id, payload)?;
    info!(id, "updated todo");
    Ok(Json(todo))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    path: Result<Path<TodoId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    store.write().await.delete_by_id(id)?;
    info!(id, "deleted todo");
    Ok(StatusCode::OK)
}
