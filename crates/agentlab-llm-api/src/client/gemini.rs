use crate::client::{LlmClient, RequestLogging};
use agentlab_logging::{log_request, log_request_to_file, log_response, log_response_to_file};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Gemini client using the `generateContent` REST endpoint
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    logging: RequestLogging,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, base_url: String, logging: RequestLogging) -> Self {
        // Ensure base_url doesn't end with a slash
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            api_key,
            model,
            base_url,
            logging,
            client: reqwest::Client::new(),
        }
    }

    fn get_generate_url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request(&self, prompt: &str) -> Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        })
    }

    /// Concatenate the text parts of the first candidate
    fn extract_text(response: &Value) -> Result<String> {
        let parts = response["candidates"][0]["content"]["parts"].as_array();

        let text: String = parts
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if !text.is_empty() {
            return Ok(text);
        }

        if let Some(reason) = response["promptFeedback"]["blockReason"].as_str() {
            return Err(anyhow!("Prompt blocked by Gemini: {}", reason));
        }

        Err(anyhow!("No content in response"))
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.get_generate_url();
        let request = self.build_request(prompt);

        log_request(&url, &request, API_KEY_HEADER, &self.api_key, self.logging.verbose);
        let request_timestamp = if self.logging.to_file {
            log_request_to_file(&url, &request, &self.model, API_KEY_HEADER, &self.api_key).ok()
        } else {
            None
        };

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let response_text = response.text().await?;

        log_response(&status, &headers, &response_text, self.logging.verbose);
        if let Some(timestamp) = request_timestamp {
            let _ = log_response_to_file(&status, &headers, &response_text, timestamp, &self.model);
        }

        if !status.is_success() {
            return Err(anyhow!("Gemini API error: {} - {}", status, response_text));
        }

        let response_json: Value = serde_json::from_str(&response_text)?;
        Self::extract_text(&response_json)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_url_includes_model() {
        let client = GeminiClient::new(
            "key".to_string(),
            "gemini-2.5-flash".to_string(),
            "https://generativelanguage.googleapis.com/".to_string(),
            RequestLogging::default(),
        );

        assert_eq!(
            client.get_generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hallo" }, { "text": " Welt" }] }
            }]
        });

        assert_eq!(GeminiClient::extract_text(&response).unwrap(), "Hallo Welt");
    }

    #[test]
    fn test_extract_text_reports_block_reason() {
        let response = serde_json::json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        });

        let err = GeminiClient::extract_text(&response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_extract_text_without_candidates_fails() {
        let err = GeminiClient::extract_text(&serde_json::json!({})).unwrap_err();
        assert_eq!(err.to_string(), "No content in response");
    }
}
