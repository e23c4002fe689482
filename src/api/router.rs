use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::auth::require_auth;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    // Public routes — no authentication required
    let public = Router::new()
        .route("/health", get(handlers::system::health_check))
        .route("/metrics", get(handlers::system::metrics));

    // Protected API routes — require Bearer token when API_TOKEN is set
    let protected = Router::new()
        // Dashboard
        .route("/api/dashboard/summary", get(handlers::dashboard::summary))
        .route("/api/dashboard/performance", get(handlers::dashboard::performance))
        .route("/api/dashboard/distribution", get(handlers::dashboard::distribution))
        .route("/api/dashboard/trades", get(handlers::dashboard::trade_history))
        // Flows
        .route("/api/analysis", post(handlers::analysis::analyze))
        .route("/api/gems/discover", post(handlers::gems::discover))
        // Trade suggestions
        .route("/api/suggestions", get(handlers::suggestions::list))
        .route("/api/suggestions/generate", post(handlers::suggestions::generate))
        .route("/api/suggestions/:id", delete(handlers::suggestions::dismiss))
        // Trade execution
        .route("/api/trades/execute", post(handlers::trades::execute))
        // Wallet — static routes before the account-typed one
        .route("/api/wallet/providers", get(handlers::wallet::providers))
        .route("/api/wallet/connect", post(handlers::wallet::connect))
        .route("/api/wallet/disconnect", post(handlers::wallet::disconnect))
        .route("/api/wallet/receive", get(handlers::wallet::receive_address))
        .route("/api/wallet/send", post(handlers::wallet::send))
        .route("/api/wallet/:account", get(handlers::wallet::assets))
        // Settings
        .route("/api/settings", get(handlers::settings::get_settings).put(handlers::settings::update_settings))
        // Market data
        .route("/api/market/:symbol/candles", get(handlers::market::candles))
        // WebSocket
        .route("/ws", get(handlers::ws::handler))
        .layer(middleware::from_fn(require_auth));

    // CORS: allow same-origin + common dashboard origins
    let cors = CorsLayer::new()
        .allow_origin(Any) // nginx proxies from same origin; direct API access needs token
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
