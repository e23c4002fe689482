use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeOutcome {
    Win,
    Loss,
    #[serde(rename = "N/A")]
    Pending,
}

/// One row of the trade history table: seeded demo trades plus every
/// simulated execution appended during the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Display id, e.g. `TRD-003`.
    pub id: String,
    pub asset: String,
    pub side: Side,
    pub status: TradeStatus,
    pub outcome: TradeOutcome,
    /// Realized PnL as displayed, e.g. `+$250.75`. `None` while open.
    pub pnl: Option<String>,
    pub executed_at: DateTime<Utc>,
}
