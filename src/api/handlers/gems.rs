use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::flows::identify_gems::{self, GemCriteria, IdentifyGemsInput, IdentifyGemsOutput};
use crate::AppState;

pub async fn discover(
    State(state): State<AppState>,
    Json(criteria): Json<GemCriteria>,
) -> Result<Json<IdentifyGemsOutput>, AppError> {
    criteria.validate()?;

    let input = IdentifyGemsInput {
        prompt: criteria.to_prompt(),
    };
    let output = identify_gems::run(state.model.as_deref(), input).await?;
    Ok(Json(output))
}
