mod common;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(resp: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = common::build_test_app();

    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let (app, _state) = common::build_test_app();

    let resp = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("trades_executed_total"));
}

#[tokio::test]
async fn test_dashboard_summary() {
    let (app, _state) = common::build_test_app();

    let resp = app.oneshot(get("/api/dashboard/summary")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["stats"].as_array().unwrap().len(), 4);
    assert_eq!(json["demo_wallet_value"], "10000");
    assert_eq!(json["open_suggestions"], 0);
}

#[tokio::test]
async fn test_dashboard_performance_and_distribution() {
    let (app, _state) = common::build_test_app();

    let resp = app
        .clone()
        .oneshot(get("/api/dashboard/performance"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"].as_array().unwrap().len(), 12);

    let resp = app
        .oneshot(get("/api/dashboard/distribution"))
        .await
        .unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_dashboard_trade_history_seeded() {
    let (app, _state) = common::build_test_app();

    let resp = app.oneshot(get("/api/dashboard/trades")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    let trades = json["data"].as_array().unwrap();
    assert_eq!(trades.len(), 5);
    assert_eq!(trades[0]["id"], "TRD-001");
}

#[tokio::test]
async fn test_suggestions_lifecycle() {
    let (app, _state) = common::build_test_app();

    // Generate the default batch
    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/suggestions/generate", json!({})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    let generated = json["suggestions"].as_array().unwrap();
    assert_eq!(generated.len(), 3);

    // List reflects the new book
    let resp = app.clone().oneshot(get("/api/suggestions")).await.unwrap();
    let json = body_json(resp).await;
    let listed = json["data"].as_array().unwrap();
    assert_eq!(listed.len(), 3);

    // Dismiss one by id
    let id = listed[0]["id"].as_str().unwrap().to_string();
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/suggestions/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["remaining"], 2);

    // Unknown id → 404
    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/suggestions/{}", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_generate_targeted_suggestion() {
    let (app, _state) = common::build_test_app();

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/suggestions/generate",
            json!({"prompt": "Find me an entry for BONK today"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    let suggestions = json["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["asset"], "BONK/USDT");
    assert_eq!(suggestions[0]["signal"], "Strong Buy");
}

#[tokio::test]
async fn test_analysis_rejects_short_prompt() {
    let (app, _state) = common::build_test_app();

    let resp = app
        .oneshot(json_request(Method::POST, "/api/analysis", json!({"prompt": "BTC?"})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = body_json(resp).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_analysis_simulated() {
    let (app, _state) = common::build_test_app();

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/analysis",
            json!({"prompt": "What is the outlook for BTC and ETH this week?"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert!(json["analysis"].as_str().unwrap().contains("BTC"));
    assert!(!json["recommendation"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_gem_discovery() {
    let (app, _state) = common::build_test_app();

    let criteria = json!({
        "market_cap": [1_000, 5_000_000],
        "trading_volume": [10_000, 1_000_000],
        "inflow": [1_000, 500_000],
        "blockchains": ["solana", "base"],
    });
    let resp = app
        .oneshot(json_request(Method::POST, "/api/gems/discover", criteria))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    let gems = json["gems"].as_array().unwrap();
    assert!(gems.len() >= 2);
    assert!(!json["analysis"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_gem_discovery_rejects_empty_blockchains() {
    let (app, _state) = common::build_test_app();

    let criteria = json!({
        "market_cap": [1_000, 5_000_000],
        "trading_volume": [10_000, 1_000_000],
        "inflow": [1_000, 500_000],
        "blockchains": [],
    });
    let resp = app
        .oneshot(json_request(Method::POST, "/api/gems/discover", criteria))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wallet_demo_assets() {
    let (app, _state) = common::build_test_app();

    let resp = app.oneshot(get("/api/wallet/demo")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["account"], "demo");
    assert_eq!(json["total_balance"], "10000");
    assert_eq!(json["assets"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_wallet_unknown_account() {
    let (app, _state) = common::build_test_app();

    let resp = app.oneshot(get("/api/wallet/margin")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_execute_trade_demo() {
    let (app, _state) = common::build_test_app();

    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/suggestions/generate", json!({})))
        .await
        .unwrap();
    let json = body_json(resp).await;
    let id = json["suggestions"][0]["id"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/trades/execute",
            json!({"suggestion_id": id, "account": "demo", "amount": 100}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let record = body_json(resp).await;
    assert_eq!(record["id"], "TRD-006");
    assert_eq!(record["status"], "Open");

    // Wallet total went up by the invested amount
    let resp = app.oneshot(get("/api/wallet/demo")).await.unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["total_balance"], "10100");
    assert_eq!(json["assets"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_execute_trade_broadcasts_feed_events() {
    let (app, state) = common::build_test_app();
    let mut rx = state.ws_tx.subscribe();

    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/suggestions/generate", json!({})))
        .await
        .unwrap();
    let json = body_json(resp).await;
    let id = json["suggestions"][0]["id"].as_str().unwrap().to_string();
    let asset = json["suggestions"][0]["asset"].as_str().unwrap().to_string();

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/trades/execute",
            json!({"suggestion_id": id, "account": "demo", "amount": 100}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // The execution broadcasts the trade record first, then the wallet state.
    match rx.recv().await.unwrap() {
        tradesage::api::ws_types::WsMessage::TradeExecuted(record) => {
            assert_eq!(record.id, "TRD-006");
            assert_eq!(record.asset, asset);
        }
        other => panic!("expected trade_executed, got {other:?}"),
    }
    match rx.recv().await.unwrap() {
        tradesage::api::ws_types::WsMessage::WalletUpdate(snapshot) => {
            assert_eq!(snapshot.account, tradesage::models::AccountType::Demo);
            assert_eq!(snapshot.total_value, "10100");
            assert_eq!(snapshot.asset_count, 5);
        }
        other => panic!("expected wallet_update, got {other:?}"),
    }
}

#[tokio::test]
async fn test_execute_trade_unknown_suggestion() {
    let (app, _state) = common::build_test_app();

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/trades/execute",
            json!({"suggestion_id": uuid::Uuid::new_v4(), "account": "demo", "amount": 100}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_real_trade_requires_connected_wallet() {
    let (app, _state) = common::build_test_app();

    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/suggestions/generate", json!({})))
        .await
        .unwrap();
    let json = body_json(resp).await;
    let id = json["suggestions"][0]["id"].as_str().unwrap().to_string();

    // No provider connected yet
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/trades/execute",
            json!({"suggestion_id": id, "account": "real", "amount": 50}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Connect MetaMask, then the same trade goes through
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/wallet/connect",
            json!({"provider": "MetaMask"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/trades/execute",
            json!({"suggestion_id": id, "account": "real", "amount": 50}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_connect_unavailable_provider() {
    let (app, _state) = common::build_test_app();

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/wallet/connect",
            json!({"provider": "Ledger"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = body_json(resp).await;
    assert!(json["error"].as_str().unwrap().contains("Ledger"));
}

#[tokio::test]
async fn test_wallet_providers_and_receive() {
    let (app, _state) = common::build_test_app();

    let resp = app
        .clone()
        .oneshot(get("/api/wallet/providers"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    let providers = json["data"].as_array().unwrap();
    assert!(providers.iter().any(|p| p["name"] == "MetaMask" && p["available"] == true));

    let resp = app.oneshot(get("/api/wallet/receive")).await.unwrap();
    let json = body_json(resp).await;
    assert!(json["address"].as_str().unwrap().starts_with("0x"));
    assert!(json["qr_url"].as_str().unwrap().contains("qrserver.com"));
}

#[tokio::test]
async fn test_send_validates_and_does_not_mutate() {
    let (app, _state) = common::build_test_app();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/wallet/send",
            json!({"asset": "BTC", "address": "", "amount": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/wallet/send",
            json!({"asset": "BTC", "address": "0xabc", "amount": 0.01}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Asset is optional and defaults to USDT
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/wallet/send",
            json!({"address": "0xabc", "amount": 25}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["asset"], "USDT");

    // Send is simulated: balances are untouched
    let resp = app.oneshot(get("/api/wallet/demo")).await.unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["total_balance"], "10000");
}

#[tokio::test]
async fn test_settings_roundtrip() {
    let (app, _state) = common::build_test_app();

    let resp = app.clone().oneshot(get("/api/settings")).await.unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["name"], "John Doe");
    assert_eq!(json["trade_alerts"], true);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/api/settings",
            json!({"name": "Ada", "email": "ada@example.com", "trade_alerts": false, "weekly_summary": true}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get("/api/settings")).await.unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["weekly_summary"], true);
}

#[tokio::test]
async fn test_settings_reject_invalid_email() {
    let (app, _state) = common::build_test_app();

    let resp = app
        .oneshot(json_request(
            Method::PUT,
            "/api/settings",
            json!({"name": "Ada", "email": "not-an-email", "trade_alerts": true, "weekly_summary": false}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_market_candles() {
    let (app, _state) = common::build_test_app();

    let resp = app
        .clone()
        .oneshot(get("/api/market/sol/candles"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["symbol"], "SOL");
    assert_eq!(json["candles"].as_array().unwrap().len(), 60);

    let resp = app.oneshot(get("/api/market/b%40d/candles")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
