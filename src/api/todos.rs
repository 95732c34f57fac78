use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::auth::CurrentUser;
use super::types::{
    CreateTodoRequest, SuccessResponse, TodoDto, TodoResponse, TodosResponse, UpdateTodoRequest,
};
use super::{ApiError, AppState};

/// GET /todos
pub async fn list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<TodosResponse>, ApiError> {
    let todos = state.store().todos_for(user.id).await;
    Ok(Json(TodosResponse {
        todos: todos.into_iter().map(TodoDto::from).collect(),
    }))
}

/// POST /todos
pub async fn create(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::validation("Title is required"));
    }

    let todo = state.store().create_todo(user.id, payload.title.trim()).await;

    Ok((
        StatusCode::CREATED,
        Json(TodoResponse {
            todo: TodoDto::from(todo),
        }),
    ))
}

/// PATCH /todos/{id}
pub async fn update(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = state
        .store()
        .set_todo_completed(user.id, id, payload.completed)
        .await
        .ok_or_else(|| ApiError::not_found("Todo", id))?;

    Ok(Json(TodoResponse {
        todo: TodoDto::from(todo),
    }))
}

/// DELETE /todos/{id}
pub async fn delete(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    if state.store().delete_todo(user.id, id).await {
        Ok(Json(SuccessResponse::OK))
    } else {
        Err(ApiError::not_found("Todo", id))
    }
}
