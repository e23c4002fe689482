use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::UserSettings;
use crate::AppState;

pub async fn get_settings(State(state): State<AppState>) -> Json<UserSettings> {
    let settings = state.settings.read().await;
    Json(settings.clone())
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(update): Json<UserSettings>,
) -> Result<Json<UserSettings>, AppError> {
    if update.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".into()));
    }
    if !update.email.contains('@') {
        return Err(AppError::BadRequest("Email address is not valid".into()));
    }

    let mut settings = state.settings.write().await;
    *settings = update;

    tracing::info!(name = %settings.name, "Settings updated");
    Ok(Json(settings.clone()))
}
