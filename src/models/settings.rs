use serde::{Deserialize, Serialize};

/// User-adjustable application settings. Held in memory only; the
/// defaults match the settings page placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub name: String,
    pub email: String,
    /// Notify on new AI trade suggestions / executed trades.
    pub trade_alerts: bool,
    /// Weekly trading performance summary.
    pub weekly_summary: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            trade_alerts: true,
            weekly_summary: false,
        }
    }
}
