use tokio::sync::broadcast;

use tradesage::api::router::create_router;
use tradesage::api::ws_types::WsMessage;
use tradesage::config::AppConfig;
use tradesage::market::ticker::run_candle_ticker;
use tradesage::metrics::init_metrics;
use tradesage::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    let metrics_handle = init_metrics();

    // --- WebSocket broadcast channel for dashboard ---
    let (ws_tx, _) = broadcast::channel::<WsMessage>(256);

    if config.has_genai() {
        tracing::info!(model = %config.genai_model, "Generative model configured — flows run live");
    } else {
        tracing::info!("No GENAI_API_KEY — flows run in simulated mode");
    }

    // --- Live chart feed ---
    {
        let symbol = config.candle_symbol.clone();
        let interval_secs = config.candle_interval_secs;
        let ticker_tx = ws_tx.clone();
        tokio::spawn(async move {
            run_candle_ticker(symbol, interval_secs, ticker_tx).await;
        });
    }

    let state = AppState::new(config, ws_tx, metrics_handle);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
