//! Theme API routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::dto::ThemeDto;
use crate::infrastructure::state::AppState;

pub async fn get_theme(State(state): State<Arc<AppState>>) -> Json<ThemeDto> {
    Json(state.theme_service.current().await.into())
}

pub async fn toggle_theme(State(state): State<Arc<AppState>>) -> Json<ThemeDto> {
    Json(state.theme_service.toggle().await.into())
}
