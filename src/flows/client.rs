use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::errors::FlowError;

/// Client for a Gemini-style `generateContent` endpoint. Only constructed
/// when an API key is configured; without it the flows synthesize their
/// output locally.
#[derive(Debug, Clone)]
pub struct GenAiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GenAiClient {
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            model,
            api_key,
        }
    }

    /// Send a prompt and return the raw model text.
    pub async fn complete(&self, prompt: &str) -> Result<String, FlowError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| FlowError::Model(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FlowError::Model(format!(
                "model endpoint returned {}",
                resp.status()
            )));
        }

        let value: Value = resp
            .json()
            .await
            .map_err(|e| FlowError::Model(e.to_string()))?;

        value["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| FlowError::Model("empty model response".into()))
    }

    /// Complete and parse the answer against the flow's output schema.
    /// `Ok(None)` means the model replied but not with parseable output;
    /// callers fall back to their canned response in that case.
    pub async fn complete_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
    ) -> Result<Option<T>, FlowError> {
        let text = self.complete(prompt).await?;
        Ok(serde_json::from_str(strip_code_fence(&text)).ok())
    }
}

/// Models often wrap JSON answers in a markdown code fence.
fn strip_code_fence(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
    }
}
