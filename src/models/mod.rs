pub mod candle;
pub mod gem;
pub mod settings;
pub mod suggestion;
pub mod trade;
pub mod wallet;

pub use candle::Candle;
pub use gem::Gem;
pub use settings::UserSettings;
pub use suggestion::TradeSuggestion;
pub use trade::{TradeOutcome, TradeRecord, TradeStatus};
pub use wallet::{WalletAsset, WalletProvider};

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "Buy"),
            Side::Sell => write!(f, "Sell"),
        }
    }
}

// ---------------------------------------------------------------------------
// Signal — recommendation strength attached to a trade suggestion
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    Buy,
    Sell,
    #[serde(rename = "Strong Sell")]
    StrongSell,
}

impl Signal {
    /// Which side of the book an executed suggestion lands on.
    pub fn side(&self) -> Side {
        match self {
            Signal::StrongBuy | Signal::Buy => Side::Buy,
            Signal::Sell | Signal::StrongSell => Side::Sell,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::StrongBuy => write!(f, "Strong Buy"),
            Signal::Buy => write!(f, "Buy"),
            Signal::Sell => write!(f, "Sell"),
            Signal::StrongSell => write!(f, "Strong Sell"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sentiment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

// ---------------------------------------------------------------------------
// AccountType — the two simulated trading accounts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Demo,
    Real,
}

impl AccountType {
    pub fn from_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "demo" => Some(AccountType::Demo),
            "real" => Some(AccountType::Real),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Demo => write!(f, "demo"),
            AccountType::Real => write!(f, "real"),
        }
    }
}

// ---------------------------------------------------------------------------
// ChangeDirection — 24h movement indicator for display rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Increase,
    Decrease,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_serde_display_names() {
        let json = serde_json::to_string(&Signal::StrongBuy).unwrap();
        assert_eq!(json, "\"Strong Buy\"");
        let back: Signal = serde_json::from_str("\"Strong Sell\"").unwrap();
        assert_eq!(back, Signal::StrongSell);
    }

    #[test]
    fn test_signal_side() {
        assert_eq!(Signal::StrongBuy.side(), Side::Buy);
        assert_eq!(Signal::Buy.side(), Side::Buy);
        assert_eq!(Signal::Sell.side(), Side::Sell);
        assert_eq!(Signal::StrongSell.side(), Side::Sell);
    }

    #[test]
    fn test_account_type_from_param() {
        assert_eq!(AccountType::from_param("demo"), Some(AccountType::Demo));
        assert_eq!(AccountType::from_param("REAL"), Some(AccountType::Real));
        assert_eq!(AccountType::from_param("margin"), None);
    }
}
