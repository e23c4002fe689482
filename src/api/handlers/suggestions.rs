use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::errors::AppError;
use crate::flows::trade_suggestions::{self, TradeSuggestionsInput, TradeSuggestionsOutput};
use crate::models::TradeSuggestion;
use crate::AppState;

use super::ApiResponse;

pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<Vec<TradeSuggestion>>> {
    let suggestions = state.suggestions.read().await;
    Json(ApiResponse::ok(suggestions.clone()))
}

/// Regenerate the suggestion book. Any previous suggestions are replaced.
pub async fn generate(
    State(state): State<AppState>,
    body: Option<Json<TradeSuggestionsInput>>,
) -> Result<Json<TradeSuggestionsOutput>, AppError> {
    let input = body.map(|Json(i)| i).unwrap_or_default();
    let output = trade_suggestions::run(state.model.as_deref(), input).await?;

    let mut suggestions = state.suggestions.write().await;
    *suggestions = output.suggestions.clone();
    metrics::gauge!("open_suggestions").set(suggestions.len() as f64);

    Ok(Json(output))
}

/// Dismiss a single suggestion by id.
pub async fn dismiss(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut suggestions = state.suggestions.write().await;

    let idx = suggestions
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| AppError::NotFound(format!("No suggestion with id {id}")))?;

    let removed = suggestions.remove(idx);
    metrics::counter!("suggestions_dismissed_total").increment(1);
    metrics::gauge!("open_suggestions").set(suggestions.len() as f64);

    tracing::info!(asset = %removed.asset, %id, "Suggestion dismissed");

    Ok(Json(serde_json::json!({
        "success": true,
        "dismissed": removed.asset,
        "remaining": suggestions.len(),
    })))
}
