use tradesage::flows::analyze_market::{self, AnalyzeMarketInput};
use tradesage::flows::identify_gems::{self, GemCriteria, IdentifyGemsInput};
use tradesage::flows::trade_suggestions::{self, TradeSuggestionsInput};

fn criteria(blockchains: &[&str]) -> GemCriteria {
    GemCriteria {
        market_cap: [10_000, 50_000_000],
        trading_volume: [50_000, 5_000_000],
        inflow: [5_000, 2_000_000],
        blockchains: blockchains.iter().map(|s| s.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_criteria_to_discovery_run() {
    let c = criteria(&["solana", "ethereum"]);
    c.validate().unwrap();

    let out = identify_gems::run(None, IdentifyGemsInput { prompt: c.to_prompt() })
        .await
        .unwrap();

    assert!(out.gems.len() >= 2);
    for gem in &out.gems {
        assert!(!gem.name.is_empty());
        assert!(gem.analysis.contains(&gem.name));
    }
    assert!(!out.analysis.is_empty());
}

#[tokio::test]
async fn test_discovery_respects_prompt_tickers() {
    let c = criteria(&["base"]);
    let prompt = format!("{}\nFocus on WIF and PEPE.", c.to_prompt());

    let out = identify_gems::run(None, IdentifyGemsInput { prompt })
        .await
        .unwrap();

    let names: Vec<&str> = out.gems.iter().map(|g| g.name.as_str()).collect();
    assert!(names.contains(&"WIF"));
    assert!(names.contains(&"PEPE"));
}

#[tokio::test]
async fn test_analysis_prompt_bounds() {
    let short = AnalyzeMarketInput { prompt: "short".into() };
    assert!(analyze_market::run(None, short).await.is_err());

    let long = AnalyzeMarketInput { prompt: "x".repeat(5001) };
    assert!(analyze_market::run(None, long).await.is_err());

    let ok = AnalyzeMarketInput {
        prompt: "Give me a detailed breakdown of SOL momentum".into(),
    };
    let out = analyze_market::run(None, ok).await.unwrap();
    assert!(out.analysis.contains("SOL"));
}

#[tokio::test]
async fn test_suggestion_batch_has_distinct_ids() {
    let out = trade_suggestions::run(None, TradeSuggestionsInput::default())
        .await
        .unwrap();

    assert_eq!(out.suggestions.len(), 3);
    let mut ids: Vec<_> = out.suggestions.iter().map(|s| s.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    for s in &out.suggestions {
        assert!(s.entry_price().unwrap() > rust_decimal::Decimal::ZERO);
    }
}
