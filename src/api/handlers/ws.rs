use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;

use crate::api::ws_types::{WalletSnapshot, WsMessage};
use crate::models::AccountType;
use crate::AppState;

pub async fn handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| serve_client(socket, state))
}

/// One connected dashboard client: current wallet totals up front, then
/// the live feed (candles, executed trades, wallet updates) until the
/// client leaves.
async fn serve_client(mut socket: WebSocket, state: AppState) {
    tracing::info!(
        clients = state.ws_tx.receiver_count() + 1,
        "Trading client joined the live feed"
    );

    // Subscribe before the snapshots so nothing broadcast in between is lost.
    let mut rx = state.ws_tx.subscribe();

    for account in [AccountType::Demo, AccountType::Real] {
        let snapshot = {
            let wallet = state.wallet.read().await;
            WalletSnapshot {
                account,
                total_value: wallet.total_balance(account).to_string(),
                asset_count: wallet.assets(account).len(),
            }
        };
        if !send_message(&mut socket, &WsMessage::WalletUpdate(snapshot)).await {
            return;
        }
    }

    loop {
        tokio::select! {
            msg = rx.recv() => {
                match msg {
                    Ok(ws_msg) => {
                        if !send_message(&mut socket, &ws_msg).await {
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(skipped = n, "Slow trading client missed feed messages");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        break;
                    }
                }
            }
            client_msg = socket.recv() => {
                match client_msg {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(_)) => {} // the feed is one-way; ignore client payloads
                    Some(Err(_)) => break,
                }
            }
        }
    }

    tracing::info!("Trading client left the live feed");
}

/// Returns false when the socket is gone. Serialization failures are
/// logged and skipped; they must not tear down the connection.
async fn send_message(socket: &mut WebSocket, msg: &WsMessage) -> bool {
    match serde_json::to_string(msg) {
        Ok(json) => socket.send(Message::Text(json)).await.is_ok(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize feed message");
            true
        }
    }
}
