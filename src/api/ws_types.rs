use serde::Serialize;

use crate::models::{AccountType, Candle, TradeRecord};

/// Messages broadcast to all connected WebSocket clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum WsMessage {
    #[serde(rename = "candle_update")]
    CandleUpdate(CandleUpdate),

    #[serde(rename = "trade_executed")]
    TradeExecuted(TradeRecord),

    #[serde(rename = "wallet_update")]
    WalletUpdate(WalletSnapshot),
}

#[derive(Debug, Clone, Serialize)]
pub struct CandleUpdate {
    pub symbol: String,
    pub candle: Candle,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletSnapshot {
    pub account: AccountType,
    pub total_value: String,
    pub asset_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_wallet_update_tags_type_and_data() {
        let msg = WsMessage::WalletUpdate(WalletSnapshot {
            account: AccountType::Demo,
            total_value: "10000".into(),
            asset_count: 4,
        });
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "wallet_update");
        assert_eq!(json["data"]["account"], "demo");
        assert_eq!(json["data"]["total_value"], "10000");
        assert_eq!(json["data"]["asset_count"], 4);
    }

    #[test]
    fn test_candle_update_tags_type_and_data() {
        let msg = WsMessage::CandleUpdate(CandleUpdate {
            symbol: "BTC".into(),
            candle: Candle {
                time: Utc::now(),
                open: 150.0,
                high: 151.0,
                low: 149.5,
                close: 150.5,
                volume: 900.0,
            },
        });
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "candle_update");
        assert_eq!(json["data"]["symbol"], "BTC");
        assert_eq!(json["data"]["candle"]["close"], 150.5);
    }
}
