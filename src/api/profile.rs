use axum::{Json, extract::State};
use std::sync::Arc;

use super::auth::CurrentUser;
use super::types::{ProfileResponse, ProfileUpdateResponse, UpdateProfileRequest};
use super::{ApiError, AppState};

/// GET /profile
pub async fn get_profile(CurrentUser(user): CurrentUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        profile: user.profile,
    })
}

/// PATCH /profile
/// Merges the provided fields into the caller's stored profile. Unlike the
/// resource tables this is a sub-resource of the user itself, so there is no
/// id to miss: the caller always patches their own row.
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileUpdateResponse>, ApiError> {
    let profile = state
        .store()
        .update_profile(user.id, payload)
        .await
        .ok_or(ApiError::Unauthenticated)?;

    Ok(Json(ProfileUpdateResponse {
        success: true,
        profile,
    }))
}
