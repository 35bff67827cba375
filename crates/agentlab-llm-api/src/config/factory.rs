use anyhow::{anyhow, Result};
use std::sync::Arc;

use crate::client::{gemini::GeminiClient, openai_compat::OpenAiCompatClient, LlmClient, RequestLogging};
use crate::config::{BackendType, GEMINI_API_URL, OPENAI_API_URL};

/// Client factory for creating LLM clients
pub struct ClientFactory;

impl ClientFactory {
    /// Create an LLM client based on the specified backend type
    ///
    /// # Arguments
    /// * `backend` - The backend type to use (Gemini, OpenAI, Llama)
    /// * `api_key` - Already-resolved API key; the environment is not consulted here
    /// * `model` - Model name to use
    /// * `api_url` - Optional custom API URL (uses default if None)
    /// * `logging` - Request/response debug output options
    ///
    /// # Returns
    /// Arc-wrapped LLM client implementing the LlmClient trait
    pub fn create(
        backend: BackendType,
        api_key: Option<String>,
        model: String,
        api_url: Option<String>,
        logging: RequestLogging,
    ) -> Result<Arc<dyn LlmClient>> {
        match backend {
            BackendType::Gemini => {
                let url = api_url.unwrap_or_else(|| GEMINI_API_URL.to_string());
                let key = api_key
                    .filter(|k| !k.is_empty())
                    .ok_or_else(|| anyhow!("Gemini backend requires an API key"))?;

                Ok(Arc::new(GeminiClient::new(key, model, url, logging)))
            }
            BackendType::OpenAI => {
                let url = api_url.unwrap_or_else(|| OPENAI_API_URL.to_string());
                Ok(Arc::new(OpenAiCompatClient::new(api_key, model, url, logging)))
            }
            BackendType::Llama => {
                let url = api_url
                    .ok_or_else(|| anyhow!("llama.cpp backend requires api_url to be specified"))?;
                Ok(Arc::new(OpenAiCompatClient::new(api_key, model, url, logging)))
            }
        }
    }
}
