use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{Datelike, Local};
use std::sync::Arc;

use super::auth::AdminUser;
use super::types::{MenuQuery, MenuResponse, MenuUpdateResponse, UpdateMenuRequest};
use super::{ApiError, AppState};
use crate::models::{DaySelector, MessDay};

/// GET /mess-menu?day=D
/// `day` is a literal day name or the sentinel `today` (the default), which
/// resolves against the server's local calendar.
pub async fn get_menu(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<MenuResponse>, ApiError> {
    let raw = query.day.as_deref().unwrap_or("today");
    let selector = DaySelector::parse(raw)
        .ok_or_else(|| ApiError::validation(format!("Unknown day '{raw}'")))?;

    let day = selector.resolve(Local::now().weekday());
    let menu = state.store().menu_for(day).await;

    Ok(Json(MenuResponse { menu }))
}

/// PATCH /mess-menu/{day}
/// Admin only. Merges the provided fields into the seeded entry.
pub async fn update_menu(
    State(state): State<Arc<AppState>>,
    AdminUser(_admin): AdminUser,
    Path(day): Path<String>,
    Json(payload): Json<UpdateMenuRequest>,
) -> Result<Json<MenuUpdateResponse>, ApiError> {
    let day = MessDay::parse(&day).ok_or_else(|| ApiError::not_found("Menu for day", &day))?;

    let menu = state
        .store()
        .patch_menu(day, payload)
        .await
        .ok_or_else(|| ApiError::not_found("Menu for day", day))?;

    Ok(Json(MenuUpdateResponse {
        success: true,
        menu,
    }))
}
