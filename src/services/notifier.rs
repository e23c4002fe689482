use rust_decimal::Decimal;
use serde_json::json;

use crate::models::{AccountType, TradeSuggestion};

/// Telegram notification service. Failures are logged but never block the main flow.
#[derive(Debug, Clone)]
pub struct Notifier {
    http: reqwest::Client,
    bot_token: String,
    chat_id: String,
}

impl Notifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            bot_token,
            chat_id,
        }
    }

    /// Send a Telegram message. Failures are logged as warnings.
    pub async fn send(&self, message: &str) {
        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.bot_token
        );

        let body = json!({
            "chat_id": self.chat_id,
            "text": message,
            "parse_mode": "Markdown",
        });

        match self.http.post(&url).json(&body).send().await {
            Ok(resp) => {
                if !resp.status().is_success() {
                    tracing::warn!(
                        status = %resp.status(),
                        "Telegram sendMessage returned non-2xx"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to send Telegram notification");
            }
        }
    }
}

/// Format a trade alert message, sent when a suggestion is executed.
pub fn format_trade_alert(
    suggestion: &TradeSuggestion,
    account: AccountType,
    amount_usd: Decimal,
) -> String {
    format!(
        "*Trade Executed*\nAsset: {}\nSignal: {}\nAccount: {}\nAmount: ${}\nEntry: {}\nStop Loss: {}\nTake Profit: {}",
        suggestion.asset,
        suggestion.signal,
        account,
        amount_usd.round_dp(2),
        suggestion.entry,
        suggestion.stop_loss,
        suggestion.take_profit,
    )
}
