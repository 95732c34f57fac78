use axum::{
    Json,
    extract::{FromRequestParts, State},
    http::request::Parts,
};
use std::sync::Arc;
use tower_sessions::Session;

use super::{ApiError, AppState};
use super::types::{LoginRequest, LoginResponse, MeResponse, SuccessResponse, UserDto};
use crate::models::{Role, User, user::is_valid_scholar_no};

const USER_ID_KEY: &str = "user_id";

/// The authenticated caller, resolved from the session cookie.
///
/// Extraction fails with 401 when the cookie is missing, the token is
/// unknown, or the session has expired; the three cases are intentionally
/// indistinguishable.
pub struct CurrentUser(pub User);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| ApiError::internal(format!("Session layer error: {msg}")))?;

        let user_id: i64 = session
            .get(USER_ID_KEY)
            .await
            .map_err(|e| ApiError::internal(format!("Session error: {e}")))?
            .ok_or(ApiError::Unauthenticated)?;

        let user = state
            .store()
            .get_user(user_id)
            .await
            .ok_or(ApiError::Unauthenticated)?;

        Ok(Self(user))
    }
}

/// An authenticated caller holding the admin role.
pub struct AdminUser(pub User);

impl FromRequestParts<Arc<AppState>> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        if user.is_admin() {
            Ok(Self(user))
        } else {
            Err(ApiError::Forbidden("Admin privileges required".to_string()))
        }
    }
}

/// POST /auth/login
/// Find-or-create the user by scholar number and open a session.
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::validation("Name is required"));
    }
    if !is_valid_scholar_no(&payload.scholar_no) {
        return Err(ApiError::validation(
            "Scholar number must be exactly 11 digits",
        ));
    }

    let role = if state
        .config()
        .auth
        .admin_scholar_nos
        .contains(&payload.scholar_no)
    {
        Role::Admin
    } else {
        Role::Student
    };

    let user = state
        .store()
        .login_user(payload.name.trim(), &payload.scholar_no, role)
        .await;

    // Rotate the session id so a pre-login cookie cannot be replayed.
    session
        .cycle_id()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to rotate session: {e}")))?;
    session
        .insert(USER_ID_KEY, user.id)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to create session: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        success: true,
        user: UserDto::from(user),
    }))
}

/// POST /auth/logout
/// Revoke the current session and clear the cookie. Revoking an unknown or
/// already-revoked token is a no-op, not an error.
pub async fn logout(session: Session) -> Result<Json<SuccessResponse>, ApiError> {
    session
        .flush()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to revoke session: {e}")))?;

    Ok(Json(SuccessResponse::OK))
}

/// GET /me
pub async fn me(CurrentUser(user): CurrentUser) -> Json<MeResponse> {
    Json(MeResponse {
        user: UserDto::from(user),
    })
}
