//! Market analysis flow: free-text market data in, analysis plus a
//! recommendation out.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::errors::FlowError;
use crate::flows::{self, tools, GenAiClient};
use crate::models::Sentiment;

pub const FLOW_NAME: &str = "analyze_market";

pub const MIN_PROMPT_LEN: usize = 10;
pub const MAX_PROMPT_LEN: usize = 5000;

const PROMPT: &str = "You are an AI trading assistant. Analyze the following market data and \
provide a recommendation. Respond as JSON with the fields \"analysis\" and \"recommendation\".\n\n\
Market Data: {{prompt}}";

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeMarketInput {
    pub prompt: String,
}

impl AnalyzeMarketInput {
    pub fn validate(&self) -> Result<(), FlowError> {
        let len = self.prompt.chars().count();
        if len < MIN_PROMPT_LEN {
            return Err(FlowError::InvalidInput(format!(
                "prompt must be at least {MIN_PROMPT_LEN} characters"
            )));
        }
        if len > MAX_PROMPT_LEN {
            return Err(FlowError::InvalidInput(format!(
                "prompt cannot be more than {MAX_PROMPT_LEN} characters"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeMarketOutput {
    pub analysis: String,
    pub recommendation: String,
}

pub async fn run(
    model: Option<&GenAiClient>,
    input: AnalyzeMarketInput,
) -> Result<AnalyzeMarketOutput, FlowError> {
    input.validate()?;

    let started = Instant::now();
    let result = execute(model, &input).await;
    flows::record_flow(FLOW_NAME, started, result.is_ok());
    result
}

async fn execute(
    model: Option<&GenAiClient>,
    input: &AnalyzeMarketInput,
) -> Result<AnalyzeMarketOutput, FlowError> {
    if let Some(client) = model {
        let prompt = flows::render_prompt(PROMPT, &input.prompt);
        if let Some(output) = client.complete_json::<AnalyzeMarketOutput>(&prompt).await? {
            return Ok(output);
        }
        tracing::warn!(
            flow = FLOW_NAME,
            "Model returned unstructured output — using simulated analysis"
        );
    }

    Ok(simulated(&input.prompt))
}

/// Build the analysis from tool stubs: one sentiment pass per mentioned
/// ticker, recommendation from the net score.
fn simulated(prompt: &str) -> AnalyzeMarketOutput {
    let tickers = flows::extract_tickers(prompt, 5);
    let subjects = if tickers.is_empty() {
        vec!["the broader market".to_string()]
    } else {
        tickers
    };

    let mut sections = Vec::with_capacity(subjects.len());
    let mut score = 0i32;

    for coin in &subjects {
        let market = tools::market_data(coin);
        let social = tools::social_sentiment(coin);

        match social.sentiment {
            Sentiment::Positive => score += 1,
            Sentiment::Negative => score -= 1,
            Sentiment::Neutral => {}
        }

        sections.push(format!(
            "{coin}: trading near ${:.4} on ${:.0} of 24h volume; social sentiment is {} with a buzz score of {:.0}/100.",
            market.price, market.volume_24h, social.sentiment, social.buzz
        ));
    }

    let recommendation = if score > 0 {
        "Momentum favors the upside. Consider staged entries with tight stop losses and size positions for high volatility."
    } else if score < 0 {
        "Sentiment is deteriorating. Avoid new entries and tighten stops on open positions."
    } else {
        "Signals are mixed. Wait for a clearer trend before committing capital."
    };

    AnalyzeMarketOutput {
        analysis: sections.join(" "),
        recommendation: recommendation.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_short_prompt() {
        let input = AnalyzeMarketInput { prompt: "too short".into() };
        // 9 characters — one below the minimum
        let err = run(None, input).await.unwrap_err();
        assert!(matches!(err, FlowError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_rejects_oversized_prompt() {
        let input = AnalyzeMarketInput { prompt: "x".repeat(MAX_PROMPT_LEN + 1) };
        assert!(run(None, input).await.is_err());
    }

    #[tokio::test]
    async fn test_simulated_mode_mentions_tickers() {
        let input = AnalyzeMarketInput {
            prompt: "Analyze emerging AI and meme coins like PEPE, WIF, and RNDR.".into(),
        };
        let output = run(None, input).await.unwrap();
        assert!(output.analysis.contains("PEPE"));
        assert!(output.analysis.contains("WIF"));
        assert!(!output.recommendation.is_empty());
    }

    #[tokio::test]
    async fn test_simulated_mode_without_tickers() {
        let input = AnalyzeMarketInput { prompt: "what does the market look like?".into() };
        let output = run(None, input).await.unwrap();
        assert!(output.analysis.contains("the broader market"));
    }
}
