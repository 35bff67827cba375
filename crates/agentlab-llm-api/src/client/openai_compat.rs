use crate::client::{LlmClient, RequestLogging};
use crate::config::normalize_api_url;
use agentlab_logging::{log_request, log_request_to_file, log_response, log_response_to_file};
use anyhow::{anyhow, Result};
use async_trait::async_trait;

/// Client for OpenAI and OpenAI-compatible servers (llama.cpp, vLLM, ...)
pub struct OpenAiCompatClient {
    api_key: Option<String>,
    model: String,
    api_url: String,
    logging: RequestLogging,
    client: reqwest::Client,
}

impl OpenAiCompatClient {
    pub fn new(api_key: Option<String>, model: String, api_url: String, logging: RequestLogging) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            model,
            api_url: normalize_api_url(&api_url),
            logging,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiCompatClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_request = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": 0.1,
            "max_tokens": 2000
        });

        let masked_key = self.api_key.as_deref().unwrap_or("");
        log_request(&self.api_url, &api_request, "Authorization", masked_key, self.logging.verbose);
        let request_timestamp = if self.logging.to_file {
            log_request_to_file(&self.api_url, &api_request, &self.model, "Authorization", masked_key).ok()
        } else {
            None
        };

        let mut request = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .json(&api_request);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = request.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let response_text = response.text().await?;

        log_response(&status, &headers, &response_text, self.logging.verbose);
        if let Some(timestamp) = request_timestamp {
            let _ = log_response_to_file(&status, &headers, &response_text, timestamp, &self.model);
        }

        if !status.is_success() {
            return Err(anyhow!("API request failed: {} - {}", status, response_text));
        }

        let chat_response: serde_json::Value = serde_json::from_str(&response_text)?;

        if let Some(content) = chat_response["choices"][0]["message"]["content"].as_str() {
            Ok(content.to_string())
        } else {
            Err(anyhow!("No content in response"))
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
