//! Gem discovery flow: a criteria prompt in, identified gems and a
//! risk-assessed analysis out.

use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::FlowError;
use crate::flows::{self, tools, GenAiClient};
use crate::models::Gem;

pub const FLOW_NAME: &str = "identify_gems";

/// Blockchains the discovery form can search on.
pub const BLOCKCHAINS: &[&str] = &["solana", "ethereum", "base", "polygon", "bsc", "avalanche"];

/// Slider bounds of the discovery form, in USD.
pub const MARKET_CAP_BOUNDS: (u64, u64) = (1_000, 100_000_000);
pub const VOLUME_BOUNDS: (u64, u64) = (10_000, 10_000_000);
pub const INFLOW_BOUNDS: (u64, u64) = (1_000, 10_000_000);

const PROMPT: &str = "You are an expert in identifying promising, low-market-cap \
cryptocurrencies (gems) across all available blockchains. For each potential gem, fetch its \
on-chain metrics, analyze its whitepaper, team and tokenomics, and gauge social sentiment and \
buzz. Synthesize the results into a detailed analysis and risk assessment per gem. If no gems \
are found, return an empty gems array and an analysis stating that no gems were found. Respond \
as JSON with the fields \"gems\" and \"analysis\".\n\nUser Criteria: {{prompt}}";

/// Returned when the live model answers without parseable output.
pub const NO_ANALYSIS_FALLBACK: &str =
    "The AI model did not return a valid analysis. This may be a temporary issue. Please try again.";

const TREND_DURATIONS: &[&str] = &["3 Days", "1 Week", "2 Weeks", "1 Month"];

const CANDIDATE_GEMS: &[&str] = &["NEXA", "ZKFI", "PULSE", "AIDX", "DRIFT", "ORBY"];

// ---------------------------------------------------------------------------
// Discovery criteria (the gems page form)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct GemCriteria {
    /// `[min, max]` market cap in USD.
    pub market_cap: [u64; 2],
    pub trading_volume: [u64; 2],
    pub inflow: [u64; 2],
    pub blockchains: Vec<String>,
}

impl GemCriteria {
    pub fn validate(&self) -> Result<(), FlowError> {
        check_range("market_cap", self.market_cap, MARKET_CAP_BOUNDS)?;
        check_range("trading_volume", self.trading_volume, VOLUME_BOUNDS)?;
        check_range("inflow", self.inflow, INFLOW_BOUNDS)?;

        if self.blockchains.is_empty() {
            return Err(FlowError::InvalidInput(
                "select at least one blockchain".into(),
            ));
        }
        for chain in &self.blockchains {
            if !BLOCKCHAINS.contains(&chain.to_lowercase().as_str()) {
                return Err(FlowError::InvalidInput(format!(
                    "unknown blockchain: {chain}"
                )));
            }
        }
        Ok(())
    }

    /// Render the criteria as the discovery prompt.
    pub fn to_prompt(&self) -> String {
        format!(
            "Find me crypto gems with the following criteria:\n\
             - Market Cap between ${} and ${}.\n\
             - 24h Trading Volume between ${} and ${}.\n\
             - 24h Inflow between ${} and ${}.\n\
             - The tokens must be on one of the following blockchains: {}.\n\
             - Prioritize tokens with strong community engagement on Twitter/X and recent developer activity on GitHub.",
            format_usd(self.market_cap[0]),
            format_usd(self.market_cap[1]),
            format_usd(self.trading_volume[0]),
            format_usd(self.trading_volume[1]),
            format_usd(self.inflow[0]),
            format_usd(self.inflow[1]),
            self.blockchains.join(", "),
        )
    }
}

fn check_range(field: &str, range: [u64; 2], bounds: (u64, u64)) -> Result<(), FlowError> {
    let [min, max] = range;
    if min > max {
        return Err(FlowError::InvalidInput(format!(
            "{field}: min must not exceed max"
        )));
    }
    if min < bounds.0 || max > bounds.1 {
        return Err(FlowError::InvalidInput(format!(
            "{field}: must lie within {} and {}",
            bounds.0, bounds.1
        )));
    }
    Ok(())
}

/// Compact dollar formatting as used by the discovery form: 1.5K, 20.0M, 1.0B.
pub fn format_usd(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1e9)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1e3)
    } else {
        n.to_string()
    }
}

// ---------------------------------------------------------------------------
// Flow input/output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct IdentifyGemsInput {
    pub prompt: String,
}

impl IdentifyGemsInput {
    pub fn validate(&self) -> Result<(), FlowError> {
        if self.prompt.trim().is_empty() {
            return Err(FlowError::InvalidInput("prompt must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifyGemsOutput {
    pub gems: Vec<Gem>,
    pub analysis: String,
}

pub async fn run(
    model: Option<&GenAiClient>,
    input: IdentifyGemsInput,
) -> Result<IdentifyGemsOutput, FlowError> {
    input.validate()?;

    let started = Instant::now();
    let result = execute(model, &input).await;
    flows::record_flow(FLOW_NAME, started, result.is_ok());
    result
}

async fn execute(
    model: Option<&GenAiClient>,
    input: &IdentifyGemsInput,
) -> Result<IdentifyGemsOutput, FlowError> {
    if let Some(client) = model {
        let prompt = flows::render_prompt(PROMPT, &input.prompt);
        return match client.complete_json::<IdentifyGemsOutput>(&prompt).await? {
            Some(output) => Ok(output),
            None => {
                tracing::warn!(flow = FLOW_NAME, "Model returned unstructured output");
                Ok(IdentifyGemsOutput {
                    gems: Vec::new(),
                    analysis: NO_ANALYSIS_FALLBACK.into(),
                })
            }
        };
    }

    Ok(simulated(&input.prompt))
}

/// Synthesize 2–4 gems from the tool stubs. Tickers named in the prompt
/// are analyzed first; the candidate pool fills the rest.
fn simulated(prompt: &str) -> IdentifyGemsOutput {
    let mut rng = rand::rng();

    let mut names = flows::extract_tickers(prompt, 4);
    while names.len() < 2 {
        let pick = CANDIDATE_GEMS[rng.random_range(0..CANDIDATE_GEMS.len())];
        if !names.iter().any(|n| n == pick) {
            names.push(pick.to_string());
        }
    }

    let prompt_lower = prompt.to_lowercase();
    let chains: Vec<&str> = BLOCKCHAINS
        .iter()
        .copied()
        .filter(|c| prompt_lower.contains(c))
        .collect();

    let gems: Vec<Gem> = names
        .iter()
        .map(|name| {
            let chain = if chains.is_empty() {
                "solana"
            } else {
                chains[rng.random_range(0..chains.len())]
            };

            let onchain = tools::on_chain_data(name, chain);
            let fundamentals = tools::project_fundamentals(name);
            let community = tools::community_engagement(name);
            let success = rng.random_range(55..95u32);

            Gem {
                name: name.clone(),
                growth: format!("+{}%", rng.random_range(120..900)),
                success_rate: format!("{success}%"),
                failure_rate: format!("{}%", 100 - success),
                trend_duration: TREND_DURATIONS[rng.random_range(0..TREND_DURATIONS.len())]
                    .into(),
                analysis: format!(
                    "{} {} Team reputation is {}; {} holders with ${:.0} in 24h transaction volume. {}",
                    fundamentals.whitepaper_summary,
                    onchain.recent_activity,
                    fundamentals.team_reputation,
                    onchain.holder_count,
                    onchain.transaction_volume,
                    fundamentals.tokenomics,
                ),
                sentiment: community.sentiment,
            }
        })
        .collect();

    let analysis = format!(
        "Identified {} candidate gems matching the criteria: {}. Each entry combines simulated \
         on-chain metrics, project fundamentals and community sentiment. These are early-stage, \
         low-liquidity tokens — treat every position as high risk and do your own research.",
        gems.len(),
        names.join(", "),
    );

    IdentifyGemsOutput { gems, analysis }
}
