use tokio::sync::broadcast;
use tokio::time::{interval, Duration};

use crate::api::ws_types::{CandleUpdate, WsMessage};
use crate::market::candles;

/// Run the live chart ticker: every interval, extend the random walk by
/// one candle and broadcast it to connected dashboard clients. Send
/// errors only mean nobody is subscribed.
pub async fn run_candle_ticker(
    symbol: String,
    interval_secs: u64,
    ws_tx: broadcast::Sender<WsMessage>,
) {
    let mut ticker = interval(Duration::from_secs(interval_secs.max(1)));
    let mut last_close = candles::initial_series(1)
        .pop()
        .map(|c| c.close)
        .unwrap_or(150.0);

    tracing::info!(symbol = %symbol, interval_secs, "Candle ticker started");

    loop {
        ticker.tick().await;

        let candle = candles::next_candle(last_close);
        last_close = candle.close;

        tracing::debug!(symbol = %symbol, close = candle.close, "Candle tick");

        let _ = ws_tx.send(WsMessage::CandleUpdate(CandleUpdate {
            symbol: symbol.clone(),
            candle,
        }));
    }
}
