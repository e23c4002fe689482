use axum::extract::{Path, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::data;
use crate::errors::AppError;
use crate::models::{AccountType, WalletAsset, WalletProvider};
use crate::AppState;

use super::ApiResponse;

#[derive(Serialize)]
pub struct WalletView {
    pub account: AccountType,
    pub total_balance: String,
    pub assets: Vec<WalletAsset>,
    pub connected_provider: Option<String>,
}

pub async fn assets(
    State(state): State<AppState>,
    Path(account): Path<String>,
) -> Result<Json<WalletView>, AppError> {
    let account = AccountType::from_param(&account)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown account type '{account}'")))?;

    let wallet = state.wallet.read().await;
    Ok(Json(WalletView {
        account,
        total_balance: wallet.total_balance(account).to_string(),
        assets: wallet.assets(account).to_vec(),
        connected_provider: wallet.connected_provider().map(str::to_string),
    }))
}

pub async fn providers() -> Json<ApiResponse<Vec<WalletProvider>>> {
    Json(ApiResponse::ok(data::wallet_providers()))
}

#[derive(Deserialize)]
pub struct ConnectRequest {
    pub provider: String,
}

pub async fn connect(
    State(state): State<AppState>,
    Json(req): Json<ConnectRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut wallet = state.wallet.write().await;
    wallet.connect(&req.provider)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "connected": wallet.connected_provider(),
    })))
}

pub async fn disconnect(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut wallet = state.wallet.write().await;
    let previous = wallet.disconnect();

    Json(serde_json::json!({
        "success": true,
        "disconnected": previous,
    }))
}

pub async fn receive_address() -> Json<serde_json::Value> {
    let qr_url = format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data={}",
        data::RECEIVE_ADDRESS
    );
    Json(serde_json::json!({
        "address": data::RECEIVE_ADDRESS,
        "qr_url": qr_url,
    }))
}

fn default_send_asset() -> String {
    "USDT".into()
}

#[derive(Deserialize)]
pub struct SendRequest {
    /// Ticker being sent; the receive dialog's USDT when omitted.
    #[serde(default = "default_send_asset")]
    pub asset: String,
    pub address: String,
    pub amount: Decimal,
}

/// Confirm a simulated send. Balances are never mutated — the demo wallet
/// only changes through trade execution.
pub async fn send(
    State(_state): State<AppState>,
    Json(req): Json<SendRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if req.address.trim().is_empty() {
        return Err(AppError::BadRequest("Recipient address is required".into()));
    }
    if req.amount <= Decimal::ZERO {
        return Err(AppError::BadRequest("Amount must be positive".into()));
    }

    tracing::info!(asset = %req.asset, amount = %req.amount, "Simulated send confirmed");

    Ok(Json(serde_json::json!({
        "success": true,
        "asset": req.asset,
        "amount": req.amount.to_string(),
        "address": req.address,
    })))
}
