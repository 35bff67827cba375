use anyhow::Result;
use async_trait::async_trait;

pub mod gemini;
pub mod openai_compat;

#[cfg(any(test, feature = "test-support"))]
pub mod scripted;

/// LLM client trait - the single operation every agent depends on
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one prompt and return the model's plain-text answer
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model identifier used for logging
    fn model_name(&self) -> &str;
}

/// Debug output options shared by the HTTP clients
#[derive(Debug, Clone, Default)]
pub struct RequestLogging {
    /// Print requests and responses to the console
    pub verbose: bool,
    /// Also write request/response logs to `~/.agentlab/logs`
    pub to_file: bool,
}
