//! The flow layer: typed request/response wrappers around a generative
//! model. Each flow validates its input, renders a named prompt and
//! either queries the configured model backend or synthesizes output
//! from the tool stubs (the default "simulated" mode).

pub mod analyze_market;
pub mod client;
pub mod identify_gems;
pub mod tools;
pub mod trade_suggestions;

pub use client::GenAiClient;

use std::time::Instant;

/// Substitute the user prompt into a flow's prompt template.
pub(crate) fn render_prompt(template: &str, prompt: &str) -> String {
    template.replace("{{prompt}}", prompt)
}

/// Record run count, failure count and latency for one flow invocation.
pub(crate) fn record_flow(name: &'static str, started: Instant, ok: bool) {
    metrics::counter!("flow_runs_total", "flow" => name).increment(1);
    if !ok {
        metrics::counter!("flow_failures_total", "flow" => name).increment(1);
    }
    metrics::histogram!("flow_latency_seconds", "flow" => name)
        .record(started.elapsed().as_secs_f64());
}

/// Extract up to `limit` distinct ticker-like tokens: runs of 2–5 ASCII
/// uppercase letters bounded by non-alphanumerics.
pub fn extract_tickers(text: &str, limit: usize) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut out: Vec<String> = Vec::new();
    let mut i = 0;

    while i < bytes.len() && out.len() < limit {
        if !bytes[i].is_ascii_uppercase() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_uppercase() {
            i += 1;
        }

        let len = i - start;
        let left_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let right_ok = i == bytes.len() || !bytes[i].is_ascii_alphanumeric();

        if (2..=5).contains(&len) && left_ok && right_ok {
            let token = &text[start..i];
            if !out.iter().any(|t| t == token) {
                out.push(token.to_string());
            }
        }
    }

    out
}

/// First ticker-like token in the text, if any.
pub fn first_ticker(text: &str) -> Option<String> {
    extract_tickers(text, 1).into_iter().next()
}
