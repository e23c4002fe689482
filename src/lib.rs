pub mod api;
pub mod config;
pub mod data;
pub mod errors;
pub mod flows;
pub mod market;
pub mod metrics;
pub mod models;
pub mod services;
pub mod wallet;

use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::api::ws_types::WsMessage;
use crate::config::AppConfig;
use crate::flows::client::GenAiClient;
use crate::models::{TradeSuggestion, UserSettings};
use crate::services::notifier::Notifier;
use crate::wallet::WalletStore;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub wallet: Arc<RwLock<WalletStore>>,
    pub suggestions: Arc<RwLock<Vec<TradeSuggestion>>>,
    pub settings: Arc<RwLock<UserSettings>>,
    pub model: Option<Arc<GenAiClient>>,
    pub notifier: Option<Arc<Notifier>>,
    pub ws_tx: broadcast::Sender<WsMessage>,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        ws_tx: broadcast::Sender<WsMessage>,
        metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
    ) -> Self {
        let model = config.genai_api_key.clone().map(|key| {
            Arc::new(GenAiClient::new(
                config.genai_api_url.clone(),
                config.genai_model.clone(),
                key,
            ))
        });

        let notifier = if config.notifications_enabled && config.has_telegram() {
            Some(Arc::new(Notifier::new(
                config.telegram_bot_token.clone().unwrap(),
                config.telegram_chat_id.clone().unwrap(),
            )))
        } else {
            None
        };

        Self {
            config,
            wallet: Arc::new(RwLock::new(WalletStore::seeded())),
            suggestions: Arc::new(RwLock::new(Vec::new())),
            settings: Arc::new(RwLock::new(UserSettings::default())),
            model,
            notifier,
            ws_tx,
            metrics_handle,
        }
    }
}
