use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::market::candles;
use crate::models::Candle;

const SERIES_POINTS: usize = 60;

#[derive(Serialize)]
pub struct CandleSeries {
    pub symbol: String,
    pub candles: Vec<Candle>,
}

pub async fn candles(Path(symbol): Path<String>) -> Result<Json<CandleSeries>, AppError> {
    let symbol = symbol.to_uppercase();
    if symbol.is_empty()
        || symbol.len() > 12
        || !symbol.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(AppError::BadRequest(format!("Invalid symbol '{symbol}'")));
    }

    Ok(Json(CandleSeries {
        candles: candles::initial_series(SERIES_POINTS),
        symbol,
    }))
}
