use chrono::Utc;
use rust_decimal::Decimal;

use crate::data;
use crate::errors::AppError;
use crate::models::{
    AccountType, ChangeDirection, TradeOutcome, TradeRecord, TradeStatus, TradeSuggestion,
    WalletAsset,
};

/// In-memory state for both simulated accounts plus the session trade
/// history. Nothing is persisted; balances reset on restart.
#[derive(Debug)]
pub struct WalletStore {
    demo: Vec<WalletAsset>,
    real: Vec<WalletAsset>,
    history: Vec<TradeRecord>,
    connected_provider: Option<String>,
    next_trade_seq: u32,
}

impl WalletStore {
    pub fn seeded() -> Self {
        let history = data::seed_trade_history();
        let next_trade_seq = history.len() as u32 + 1;
        Self {
            demo: data::demo_wallet_assets(),
            real: data::real_wallet_assets(),
            history,
            connected_provider: None,
            next_trade_seq,
        }
    }

    pub fn assets(&self, account: AccountType) -> &[WalletAsset] {
        match account {
            AccountType::Demo => &self.demo,
            AccountType::Real => &self.real,
        }
    }

    fn assets_mut(&mut self, account: AccountType) -> &mut Vec<WalletAsset> {
        match account {
            AccountType::Demo => &mut self.demo,
            AccountType::Real => &mut self.real,
        }
    }

    pub fn total_balance(&self, account: AccountType) -> Decimal {
        self.assets(account).iter().map(|a| a.value_usd).sum()
    }

    pub fn history(&self) -> &[TradeRecord] {
        &self.history
    }

    pub fn connected_provider(&self) -> Option<&str> {
        self.connected_provider.as_deref()
    }

    /// Connect a wallet provider. Unavailable providers fail with a
    /// download hint, mirroring the connect dialog.
    pub fn connect(&mut self, provider: &str) -> Result<(), AppError> {
        let provider = data::wallet_providers()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(provider))
            .ok_or_else(|| AppError::BadRequest(format!("unknown wallet provider: {provider}")))?;

        if !provider.available {
            return Err(AppError::BadRequest(format!(
                "{} not found — install it from {}",
                provider.name, provider.download_url
            )));
        }

        self.connected_provider = Some(provider.name.to_string());
        Ok(())
    }

    pub fn disconnect(&mut self) -> Option<String> {
        self.connected_provider.take()
    }

    /// Execute a suggested trade: buy `amount_usd` worth at the entry
    /// price. Units bought = amount ÷ entry; repeat purchases of a held
    /// ticker merge additively. Returns the appended history record.
    pub fn execute_trade(
        &mut self,
        account: AccountType,
        suggestion: &TradeSuggestion,
        amount_usd: Decimal,
    ) -> Result<TradeRecord, AppError> {
        if amount_usd <= Decimal::ZERO {
            return Err(AppError::BadRequest("trade amount must be positive".into()));
        }
        let entry = suggestion
            .entry_price()
            .filter(|p| *p > Decimal::ZERO)
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "suggestion has no usable entry price: {}",
                    suggestion.entry
                ))
            })?;
        if account == AccountType::Real && self.connected_provider.is_none() {
            return Err(AppError::BadRequest(
                "connect a wallet before trading with the real account".into(),
            ));
        }

        let units = amount_usd / entry;
        let ticker = suggestion.ticker().to_string();
        let assets = self.assets_mut(account);

        match assets.iter_mut().find(|a| a.ticker == ticker) {
            Some(existing) => {
                existing.balance += units;
                existing.value_usd += amount_usd;
            }
            None => assets.push(WalletAsset {
                asset: ticker.clone(),
                ticker,
                icon: suggestion.icon_url.clone(),
                balance: units,
                value_usd: amount_usd,
                allocation_pct: Decimal::ZERO,
                change_24h: "+0.0%".into(),
                change_type: ChangeDirection::Increase,
            }),
        }

        self.recompute_allocations(account);

        let record = TradeRecord {
            id: format!("TRD-{:03}", self.next_trade_seq),
            asset: suggestion.asset.clone(),
            side: suggestion.signal.side(),
            status: TradeStatus::Open,
            outcome: TradeOutcome::Pending,
            pnl: None,
            executed_at: Utc::now(),
        };
        self.next_trade_seq += 1;
        self.history.insert(0, record.clone());

        tracing::info!(
            asset = %record.asset,
            account = %account,
            units = %units,
            amount = %amount_usd,
            "Simulated trade executed"
        );

        Ok(record)
    }

    fn recompute_allocations(&mut self, account: AccountType) {
        let assets = self.assets_mut(account);
        let total: Decimal = assets.iter().map(|a| a.value_usd).sum();
        if total.is_zero() {
            return;
        }
        for asset in assets.iter_mut() {
            asset.allocation_pct = (asset.value_usd / total * Decimal::ONE_HUNDRED).round_dp(1);
        }
    }
}
