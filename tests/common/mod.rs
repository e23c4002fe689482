use tradesage::api::router::create_router;
use tradesage::api::ws_types::WsMessage;
use tradesage::config::AppConfig;
use tradesage::AppState;

/// Minimal config for tests: no model key, no Telegram, ephemeral port.
pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        genai_api_key: None,
        genai_api_url: "https://generativelanguage.googleapis.com/v1beta".into(),
        genai_model: "gemini-2.0-flash".into(),
        candle_symbol: "BTC".into(),
        candle_interval_secs: 5,
        telegram_bot_token: None,
        telegram_chat_id: None,
        notifications_enabled: false,
    }
}

pub fn test_state() -> AppState {
    let (ws_tx, _) = tokio::sync::broadcast::channel::<WsMessage>(16);
    let metrics_handle = tradesage::metrics::init_metrics();
    AppState::new(test_config(), ws_tx, metrics_handle)
}

pub fn build_test_app() -> (axum::Router, AppState) {
    let state = test_state();
    let router = create_router(state.clone());
    (router, state)
}
