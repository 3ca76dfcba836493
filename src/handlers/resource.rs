//! Resource CRUD handlers: list, read, create, update, delete.

use crate::config::ResolvedResource;
use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::service::CrudService;
use crate::sql::key_value;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

fn lookup<'a>(state: &'a AppState, name: &str) -> Result<&'a ResolvedResource, AppError> {
    state
        .model
        .resource(name)
        .ok_or_else(|| AppError::NotFound(format!("resource {}", name)))
}

pub async fn list(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let resource = lookup(&state, &name)?;
    let rows = CrudService::list(&state.pool, resource).await?;
    Ok(Json(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, String)>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let resource = lookup(&state, &name)?;
    let rows = CrudService::read(&state.pool, resource, &key_value(&id)).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Path(name): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let resource = lookup(&state, &name)?;
    let result = CrudService::create(&state.pool, resource, &body).await?;
    tracing::info!(resource = %name, rowid = result.last_insert_rowid, "created row");
    Ok(Json(result))
}

pub async fn update(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, String)>,
    JsonObject(body): JsonObject,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let resource = lookup(&state, &name)?;
    let result = CrudService::update(&state.pool, resource, &key_value(&id), &body).await?;
    tracing::info!(resource = %name, id = %id, changes = result.changes, "updated row");
    Ok(Json(result))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, String)>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let resource = lookup(&state, &name)?;
    let result = CrudService::delete(&state.pool, resource, &key_value(&id)).await?;
    tracing::info!(resource = %name, id = %id, changes = result.changes, "deleted row");
    Ok(Json(result))
}
