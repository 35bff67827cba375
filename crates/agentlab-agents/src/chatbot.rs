use agentlab_llm_api::LlmClient;
use agentlab_logging::InteractionLog;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

use crate::agent::{report_log_failure, Agent, AgentLevel};
use crate::prompts::SMART_CHATBOT_PROMPT;

/// Level 1: every turn goes straight to the model under a step-by-step
/// system prompt that refuses arithmetic.
pub struct SmartChatbot {
    client: Arc<dyn LlmClient>,
    log: InteractionLog,
    verbose: bool,
}

impl SmartChatbot {
    pub fn new(client: Arc<dyn LlmClient>, transcript: impl Into<PathBuf>) -> Self {
        Self {
            client,
            log: InteractionLog::new(transcript, AgentLevel::One.transcript_mode()),
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub async fn get_response(&self, input: &str) -> String {
        let prompt = format!("{}\nUser: {}", SMART_CHATBOT_PROMPT, input);
        match self.client.generate(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub fn log(&self) -> &InteractionLog {
        &self.log
    }
}

#[async_trait]
impl Agent for SmartChatbot {
    fn level(&self) -> AgentLevel {
        AgentLevel::One
    }

    fn system_prompt(&self) -> &str {
        SMART_CHATBOT_PROMPT
    }

    fn model_name(&self) -> &str {
        self.client.model_name()
    }

    async fn respond(&mut self, input: &str) -> String {
        let response = self.get_response(input).await;
        if let Err(e) = self.log.record(input, &response).await {
            report_log_failure(self.verbose, &e);
        }
        response
    }
}
