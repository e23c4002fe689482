//! Tool stubs backing the flows. Each one simulates an external data
//! source (market data API, blockchain analytics, social listening) with
//! randomized output.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::models::Sentiment;

fn random_sentiment(rng: &mut impl Rng) -> Sentiment {
    match rng.random_range(0..3) {
        0 => Sentiment::Positive,
        1 => Sentiment::Neutral,
        _ => Sentiment::Negative,
    }
}

// ---------------------------------------------------------------------------
// Market data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct MarketData {
    pub price: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
}

/// Spot price and size metrics for a coin. Market caps skew low: the
/// flows hunt for early-stage tokens.
pub fn market_data(_coin: &str) -> MarketData {
    let mut rng = rand::rng();
    MarketData {
        price: rng.random_range(0.0..100.0),
        market_cap: rng.random_range(0.0..10_000_000.0),
        volume_24h: rng.random_range(0.0..1_000_000.0),
    }
}

// ---------------------------------------------------------------------------
// Social sentiment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct SocialSentiment {
    pub sentiment: Sentiment,
    /// 0–100 social media buzz score.
    pub buzz: f64,
}

pub fn social_sentiment(_coin: &str) -> SocialSentiment {
    let mut rng = rand::rng();
    SocialSentiment {
        sentiment: random_sentiment(&mut rng),
        buzz: rng.random_range(0.0..100.0),
    }
}

// ---------------------------------------------------------------------------
// On-chain data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct OnChainData {
    pub transaction_volume: f64,
    pub holder_count: u32,
    pub recent_activity: String,
}

pub fn on_chain_data(coin: &str, blockchain: &str) -> OnChainData {
    let mut rng = rand::rng();
    OnChainData {
        transaction_volume: rng.random_range(0.0..1_000_000.0),
        holder_count: rng.random_range(0..10_000),
        recent_activity: format!(
            "High volume of trades for {coin} on {blockchain} in the last 24h."
        ),
    }
}

// ---------------------------------------------------------------------------
// Project fundamentals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamReputation {
    Strong,
    Average,
    Weak,
}

impl fmt::Display for TeamReputation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamReputation::Strong => write!(f, "strong"),
            TeamReputation::Average => write!(f, "average"),
            TeamReputation::Weak => write!(f, "weak"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectFundamentals {
    pub whitepaper_summary: String,
    pub team_reputation: TeamReputation,
    pub tokenomics: String,
}

pub fn project_fundamentals(coin: &str) -> ProjectFundamentals {
    let mut rng = rand::rng();
    let team_reputation = match rng.random_range(0..3) {
        0 => TeamReputation::Strong,
        1 => TeamReputation::Average,
        _ => TeamReputation::Weak,
    };

    ProjectFundamentals {
        whitepaper_summary: format!(
            "The whitepaper for {coin} outlines a novel approach to decentralized AI."
        ),
        team_reputation,
        tokenomics: "50% of tokens allocated to community, 20% to team, 30% to ecosystem fund."
            .into(),
    }
}

// ---------------------------------------------------------------------------
// Community engagement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CommunityEngagement {
    pub sentiment: Sentiment,
    pub buzz: f64,
    pub key_topics: Vec<String>,
}

pub fn community_engagement(coin: &str) -> CommunityEngagement {
    let mut rng = rand::rng();
    CommunityEngagement {
        sentiment: random_sentiment(&mut rng),
        buzz: rng.random_range(0.0..100.0),
        key_topics: vec![
            format!("Upcoming partnership for ${coin}"),
            format!("Speculation on {coin} utility"),
            "Airdrop rumors".into(),
        ],
    }
}
