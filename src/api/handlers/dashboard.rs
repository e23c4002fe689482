use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::data::{self, AssetSlice, PerformancePoint, StatCard};
use crate::models::TradeRecord;
use crate::AppState;

use super::ApiResponse;

#[derive(Serialize)]
pub struct DashboardSummary {
    pub stats: Vec<StatCard>,
    pub demo_wallet_value: String,
    pub real_wallet_value: String,
    pub open_suggestions: usize,
}

pub async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    let wallet = state.wallet.read().await;
    let suggestions = state.suggestions.read().await;

    Json(DashboardSummary {
        stats: data::dashboard_stats(),
        demo_wallet_value: wallet.total_balance(crate::models::AccountType::Demo).to_string(),
        real_wallet_value: wallet.total_balance(crate::models::AccountType::Real).to_string(),
        open_suggestions: suggestions.len(),
    })
}

pub async fn performance() -> Json<ApiResponse<Vec<PerformancePoint>>> {
    Json(ApiResponse::ok(data::performance_series()))
}

pub async fn distribution() -> Json<ApiResponse<Vec<AssetSlice>>> {
    Json(ApiResponse::ok(data::asset_distribution()))
}

pub async fn trade_history(State(state): State<AppState>) -> Json<ApiResponse<Vec<TradeRecord>>> {
    let wallet = state.wallet.read().await;
    Json(ApiResponse::ok(wallet.history().to_vec()))
}
