use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::flows::analyze_market::{self, AnalyzeMarketInput, AnalyzeMarketOutput};
use crate::AppState;

pub async fn analyze(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeMarketInput>,
) -> Result<Json<AnalyzeMarketOutput>, AppError> {
    let output = analyze_market::run(state.model.as_deref(), input).await?;
    Ok(Json(output))
}
