use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ChangeDirection;

/// A holding in one of the simulated accounts. Mutated in memory when a
/// trade is executed; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletAsset {
    /// Display name, e.g. `Bitcoin`.
    pub asset: String,
    pub ticker: String,
    pub icon: String,
    pub balance: Decimal,
    pub value_usd: Decimal,
    /// Share of the account's total value, in percent.
    pub allocation_pct: Decimal,
    /// 24h change as displayed, e.g. `+1.2%`.
    pub change_24h: String,
    pub change_type: ChangeDirection,
}

/// An external wallet provider the trading page can "connect" to.
/// Availability is fixed for the simulation.
#[derive(Debug, Clone, Serialize)]
pub struct WalletProvider {
    pub name: &'static str,
    pub download_url: &'static str,
    pub available: bool,
}
