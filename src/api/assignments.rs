use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::auth::CurrentUser;
use super::types::{
    AssignmentDto, AssignmentResponse, AssignmentsResponse, CreateAssignmentRequest,
    SuccessResponse, UpdateAssignmentRequest,
};
use super::{ApiError, AppState};
use crate::models::NewAssignment;

/// GET /assignments
pub async fn list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<AssignmentsResponse>, ApiError> {
    let assignments = state.store().assignments_for(user.id).await;
    Ok(Json(AssignmentsResponse {
        assignments: assignments.into_iter().map(AssignmentDto::from).collect(),
    }))
}

/// POST /assignments
pub async fn create(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<AssignmentResponse>), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::validation("Title is required"));
    }

    let assignment = state
        .store()
        .create_assignment(
            user.id,
            NewAssignment {
                title: payload.title.trim().to_string(),
                due_date: payload.due_date,
                pdf_file: payload.pdf_file,
            },
        )
        .await;

    Ok((
        StatusCode::CREATED,
        Json(AssignmentResponse {
            assignment: AssignmentDto::from(assignment),
        }),
    ))
}

/// PATCH /assignments/{id}
pub async fn update(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAssignmentRequest>,
) -> Result<Json<AssignmentResponse>, ApiError> {
    let assignment = state
        .store()
        .set_assignment_status(user.id, id, payload.status)
        .await
        .ok_or_else(|| ApiError::not_found("Assignment", id))?;

    Ok(Json(AssignmentResponse {
        assignment: AssignmentDto::from(assignment),
    }))
}

/// DELETE /assignments/{id}
pub async fn delete(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    if state.store().delete_assignment(user.id, id).await {
        Ok(Json(SuccessResponse::OK))
    } else {
        Err(ApiError::not_found("Assignment", id))
    }
}
