use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV bar of the simulated live chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Candle {
    pub time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}
