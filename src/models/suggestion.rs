use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Signal;

/// A single AI-generated trade setup, as rendered on the trading page.
/// Prices are kept as display strings; `entry_price` parses the entry
/// for simulation arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSuggestion {
    pub id: Uuid,
    /// Asset pair, e.g. `GEM-X/USDT`.
    pub asset: String,
    pub icon_url: String,
    pub signal: Signal,
    /// Display percentage, e.g. `98%`.
    pub confidence: String,
    pub strategy: String,
    pub entry: String,
    pub stop_loss: String,
    pub take_profit: String,
    pub blockchain: String,
    pub timeframe: String,
}

impl TradeSuggestion {
    /// Ticker half of the asset pair (`GEM-X` for `GEM-X/USDT`).
    pub fn ticker(&self) -> &str {
        self.asset.split('/').next().unwrap_or(&self.asset)
    }

    /// Entry price parsed as a decimal, `None` when the string is not a
    /// usable number.
    pub fn entry_price(&self) -> Option<Decimal> {
        self.entry.trim().trim_start_matches('$').parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(asset: &str, entry: &str) -> TradeSuggestion {
        TradeSuggestion {
            id: Uuid::new_v4(),
            asset: asset.into(),
            icon_url: String::new(),
            signal: Signal::Buy,
            confidence: "95%".into(),
            strategy: "Breakout".into(),
            entry: entry.into(),
            stop_loss: "0.004".into(),
            take_profit: "0.50".into(),
            blockchain: "Solana".into(),
            timeframe: "1 Week".into(),
        }
    }

    #[test]
    fn test_ticker_splits_pair() {
        assert_eq!(suggestion("GEM-X/USDT", "0.005").ticker(), "GEM-X");
        assert_eq!(suggestion("BTC", "65000").ticker(), "BTC");
    }

    #[test]
    fn test_entry_price_parses_with_dollar_prefix() {
        assert_eq!(
            suggestion("GEM-X/USDT", "$0.005").entry_price(),
            Some(Decimal::new(5, 3))
        );
        assert_eq!(suggestion("GEM-X/USDT", "n/a").entry_price(), None);
    }
}
