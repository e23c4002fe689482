//! Seed datasets for the demo: wallet holdings, dashboard cards and the
//! trade history the session starts with. All of it is fixture data; the
//! wallet store copies what it mutates.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{
    ChangeDirection, Side, TradeOutcome, TradeRecord, TradeStatus, WalletAsset, WalletProvider,
};

const ICON_BASE: &str =
    "https://cdn.jsdelivr.net/gh/atomiclabs/cryptocurrency-icons@1a63530be6e374711a8554f31b17e4cb92c258d5/svg/color";

/// Fixed USDT deposit address shown in the receive dialog (BSC network).
pub const RECEIVE_ADDRESS: &str = "0x1aB2c3d4e5f6A7B8C9d0E1F2a3B4c5D6e7F8g9H0";

/// Token icon URL on the shared cryptocurrency-icons CDN.
pub fn icon_url(ticker: &str) -> String {
    format!("{ICON_BASE}/{}.svg", ticker.to_lowercase())
}

fn asset(
    name: &str,
    ticker: &str,
    balance: Decimal,
    value_usd: Decimal,
    allocation_pct: Decimal,
    change_24h: &str,
    change_type: ChangeDirection,
) -> WalletAsset {
    WalletAsset {
        asset: name.into(),
        ticker: ticker.into(),
        icon: icon_url(ticker),
        balance,
        value_usd,
        allocation_pct,
        change_24h: change_24h.into(),
        change_type,
    }
}

pub fn demo_wallet_assets() -> Vec<WalletAsset> {
    vec![
        asset(
            "Bitcoin",
            "BTC",
            Decimal::new(57, 3),
            Decimal::from(4000),
            Decimal::from(40),
            "+1.2%",
            ChangeDirection::Increase,
        ),
        asset(
            "Ethereum",
            "ETH",
            Decimal::new(88, 2),
            Decimal::from(3000),
            Decimal::from(30),
            "-0.8%",
            ChangeDirection::Decrease,
        ),
        asset(
            "Solana",
            "SOL",
            Decimal::new(1212, 2),
            Decimal::from(2000),
            Decimal::from(20),
            "+3.5%",
            ChangeDirection::Increase,
        ),
        asset(
            "Cardano",
            "ADA",
            Decimal::from(1000),
            Decimal::from(1000),
            Decimal::from(10),
            "+0.5%",
            ChangeDirection::Increase,
        ),
    ]
}

pub fn real_wallet_assets() -> Vec<WalletAsset> {
    vec![
        asset(
            "Bitcoin",
            "BTC",
            Decimal::new(15, 2),
            Decimal::new(1040698, 2),
            Decimal::from(70),
            "+2.1%",
            ChangeDirection::Increase,
        ),
        asset(
            "Ethereum",
            "ETH",
            Decimal::new(125, 2),
            Decimal::new(425122, 2),
            Decimal::from(30),
            "-1.2%",
            ChangeDirection::Decrease,
        ),
    ]
}

// ---------------------------------------------------------------------------
// Dashboard fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub change_type: ChangeDirection,
}

pub fn dashboard_stats() -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Total Profit/Loss",
            value: "$4,805.00",
            change: "+2.5%",
            change_type: ChangeDirection::Increase,
        },
        StatCard {
            label: "Success Rate",
            value: "82.3%",
            change: "-1.2%",
            change_type: ChangeDirection::Decrease,
        },
        StatCard {
            label: "Win/Loss Ratio",
            value: "4.6 : 1",
            change: "+0.3",
            change_type: ChangeDirection::Increase,
        },
        StatCard {
            label: "Max Drawdown",
            value: "15.2%",
            change: "+3.1%",
            change_type: ChangeDirection::Decrease,
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformancePoint {
    pub date: &'static str,
    pub profit: i64,
}

pub fn performance_series() -> Vec<PerformancePoint> {
    [
        ("2024-01-01", 0),
        ("2024-01-08", 250),
        ("2024-01-15", 180),
        ("2024-01-22", 450),
        ("2024-01-29", 600),
        ("2024-02-05", 820),
        ("2024-02-12", 750),
        ("2024-02-19", 1100),
        ("2024-02-26", 980),
        ("2024-03-04", 1400),
        ("2024-03-11", 1650),
        ("2024-03-18", 1550),
    ]
    .into_iter()
    .map(|(date, profit)| PerformancePoint { date, profit })
    .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetSlice {
    pub name: &'static str,
    pub value: u8,
}

pub fn asset_distribution() -> Vec<AssetSlice> {
    vec![
        AssetSlice { name: "Bitcoin", value: 45 },
        AssetSlice { name: "Ethereum", value: 30 },
        AssetSlice { name: "Solana", value: 15 },
        AssetSlice { name: "Others", value: 10 },
    ]
}

/// The five historical trades the session opens with, newest first.
pub fn seed_trade_history() -> Vec<TradeRecord> {
    let now = Utc::now();
    let record = |id: &str,
                  asset: &str,
                  side: Side,
                  status: TradeStatus,
                  outcome: TradeOutcome,
                  pnl: Option<&str>,
                  hours_ago: i64| TradeRecord {
        id: id.into(),
        asset: asset.into(),
        side,
        status,
        outcome,
        pnl: pnl.map(Into::into),
        executed_at: now - Duration::hours(hours_ago),
    };

    vec![
        record("TRD-001", "BTC/USD", Side::Buy, TradeStatus::Closed, TradeOutcome::Win, Some("+$250.75"), 3),
        record("TRD-002", "ETH/USD", Side::Sell, TradeStatus::Closed, TradeOutcome::Loss, Some("-$85.20"), 5),
        record("TRD-003", "SOL/USD", Side::Buy, TradeStatus::Open, TradeOutcome::Pending, None, 18),
        record("TRD-004", "ADA/USD", Side::Buy, TradeStatus::Closed, TradeOutcome::Win, Some("+$120.00"), 23),
        record("TRD-005", "BTC/USD", Side::Sell, TradeStatus::Closed, TradeOutcome::Win, Some("+$310.50"), 51),
    ]
}

// ---------------------------------------------------------------------------
// Wallet providers
// ---------------------------------------------------------------------------

/// Providers offered by the connect dialog. Only MetaMask counts as
/// installed in the simulation; the rest fail with a download hint.
pub fn wallet_providers() -> Vec<WalletProvider> {
    vec![
        WalletProvider {
            name: "MetaMask",
            download_url: "https://metamask.io/download/",
            available: true,
        },
        WalletProvider {
            name: "Trust Wallet",
            download_url: "https://trustwallet.com/download",
            available: false,
        },
        WalletProvider {
            name: "WalletConnect",
            download_url: "https://walletconnect.com/explorer",
            available: false,
        },
        WalletProvider {
            name: "Coinbase Wallet",
            download_url: "https://www.coinbase.com/wallet/downloads",
            available: false,
        },
        WalletProvider {
            name: "Ledger",
            download_url: "https://www.ledger.com/ledger-live",
            available: false,
        },
    ]
}
