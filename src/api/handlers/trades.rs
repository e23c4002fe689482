use axum::extract::State;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::ws_types::{WalletSnapshot, WsMessage};
use crate::errors::AppError;
use crate::models::{AccountType, TradeRecord};
use crate::services::notifier;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ExecuteTradeRequest {
    pub suggestion_id: Uuid,
    pub account: AccountType,
    pub amount: Decimal,
}

/// Execute a trade suggestion against the simulated wallet.
///
/// The suggestion stays in the book after execution so it can be traded
/// again or dismissed separately.
pub async fn execute(
    State(state): State<AppState>,
    Json(req): Json<ExecuteTradeRequest>,
) -> Result<Json<TradeRecord>, AppError> {
    let suggestion = {
        let suggestions = state.suggestions.read().await;
        suggestions
            .iter()
            .find(|s| s.id == req.suggestion_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("No suggestion with id {}", req.suggestion_id))
            })?
    };

    let record = {
        let mut wallet = state.wallet.write().await;
        let record = wallet.execute_trade(req.account, &suggestion, req.amount)?;

        let _ = state.ws_tx.send(WsMessage::TradeExecuted(record.clone()));
        let _ = state.ws_tx.send(WsMessage::WalletUpdate(WalletSnapshot {
            account: req.account,
            total_value: wallet.total_balance(req.account).to_string(),
            asset_count: wallet.assets(req.account).len(),
        }));

        record
    };

    metrics::counter!("trades_executed_total").increment(1);

    // Fire-and-forget Telegram alert, gated on user preference
    if let Some(n) = state.notifier.clone() {
        let trade_alerts = state.settings.read().await.trade_alerts;
        if trade_alerts {
            let msg = notifier::format_trade_alert(&suggestion, req.account, req.amount);
            tokio::spawn(async move {
                n.send(&msg).await;
            });
        }
    }

    Ok(Json(record))
}
