use serde::{Deserialize, Serialize};

use crate::models::Sentiment;

/// A discovered low-market-cap token with its per-gem analysis. Purely a
/// display artifact of the discovery flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gem {
    pub name: String,
    /// Projected growth as displayed, e.g. `+340%`.
    pub growth: String,
    pub success_rate: String,
    pub failure_rate: String,
    /// How long the current trend has held, e.g. `2 Weeks`.
    pub trend_duration: String,
    pub analysis: String,
    pub sentiment: Sentiment,
}
