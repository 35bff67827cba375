use agentlab_llm_api::LlmClient;
use agentlab_logging::InteractionLog;
use agentlab_tools::{Calculator, Tool};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;
use std::sync::Arc;

use crate::agent::{report_log_failure, Agent, AgentLevel};
use crate::prompts::TOOL_CHATBOT_PROMPT;

static INLINE_ARITHMETIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\s*[\+\-\*/xX÷]\s*\d+").unwrap());
static MATH_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(add|plus|subtract|minus|multiply|times|divide|calculate)\b").unwrap());

const MIXED_TASK_CUES: [&str; 3] = ["capital", "why", "explain"];

pub const SINGLE_TASK_ONLY: &str = "I can only handle one type of task at a time. Please ask a single question.";

/// Whether the input looks like arithmetic
pub fn detect_math_query(text: &str) -> bool {
    let lower = text.to_lowercase();
    INLINE_ARITHMETIC.is_match(&lower) || MATH_KEYWORD.is_match(&lower)
}

/// Math mixed with a knowledge question in one request
pub fn has_multiple_task_types(text: &str) -> bool {
    let lower = text.to_lowercase();
    detect_math_query(text) && MIXED_TASK_CUES.iter().any(|cue| lower.contains(cue)) && lower.contains("and")
}

/// Level 2: arithmetic goes to the calculator, everything else to the model.
pub struct ChatbotWithTool {
    client: Arc<dyn LlmClient>,
    calculator: Calculator,
    log: InteractionLog,
    last_tool: Option<String>,
    verbose: bool,
}

impl ChatbotWithTool {
    pub fn new(client: Arc<dyn LlmClient>, transcript: impl Into<PathBuf>) -> Self {
        Self {
            client,
            calculator: Calculator::new(),
            log: InteractionLog::new(transcript, AgentLevel::Two.transcript_mode()),
            last_tool: None,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn log(&self) -> &InteractionLog {
        &self.log
    }

    /// Answer one query without logging it
    pub async fn process_query(&mut self, input: &str) -> String {
        self.last_tool = None;

        if has_multiple_task_types(input) {
            return SINGLE_TASK_ONLY.to_string();
        }

        if detect_math_query(input) {
            self.last_tool = Some(self.calculator.name().to_string());
            let result = self.calculator.execute(input).await;
            return if result.success {
                format!("I'll use the calculator tool.\nResult: {}", result.content)
            } else {
                format!("Calculator error: {}", result.error.unwrap_or_default())
            };
        }

        let prompt = format!("{}\nUser: {}", TOOL_CHATBOT_PROMPT, input);
        match self.client.generate(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => format!("Error: {}", e),
        }
    }
}

#[async_trait]
impl Agent for ChatbotWithTool {
    fn level(&self) -> AgentLevel {
        AgentLevel::Two
    }

    fn system_prompt(&self) -> &str {
        TOOL_CHATBOT_PROMPT
    }

    fn model_name(&self) -> &str {
        self.client.model_name()
    }

    async fn respond(&mut self, input: &str) -> String {
        let response = self.process_query(input).await;
        if let Err(e) = self.log.record(input, &response).await {
            report_log_failure(self.verbose, &e);
        }
        response
    }

    fn last_tool_used(&self) -> Option<&str> {
        self.last_tool.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentlab_llm_api::ScriptedClient;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn bot(client: Arc<ScriptedClient>, dir: &TempDir) -> ChatbotWithTool {
        ChatbotWithTool::new(client, dir.path().join("level2_interactions.txt"))
    }

    #[test]
    fn test_detect_math_query() {
        assert!(detect_math_query("what is 5 + 3"));
        assert!(detect_math_query("12x4"));
        assert!(detect_math_query("Please CALCULATE this"));
        assert!(!detect_math_query("additional info please"));
        assert!(!detect_math_query("what is the capital of France"));
    }

    #[test]
    fn test_has_multiple_task_types() {
        assert!(has_multiple_task_types("add 2 and 3 and tell me the capital of Italy"));
        assert!(!has_multiple_task_types("add 2 and 3"));
        assert!(!has_multiple_task_types("explain gravity"));
    }

    #[tokio::test]
    async fn test_math_uses_calculator_without_model() {
        let dir = TempDir::new().unwrap();
        let client = Arc::new(ScriptedClient::new());
        let mut bot = bot(client.clone(), &dir);

        let response = bot.respond("5 plus 3").await;

        assert_eq!(response, "I'll use the calculator tool.\nResult: 8.0");
        assert_eq!(bot.last_tool_used(), Some("calculator"));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_calculator_error_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut bot = bot(Arc::new(ScriptedClient::new()), &dir);

        assert_eq!(bot.respond("10 divide by 0").await, "Calculator error: Division by zero");
        assert_eq!(bot.respond("calculate something").await, "Calculator error: Could not parse numbers");
    }

    #[tokio::test]
    async fn test_mixed_request_is_refused() {
        let dir = TempDir::new().unwrap();
        let client = Arc::new(ScriptedClient::new());
        let mut bot = bot(client.clone(), &dir);

        let response = bot.respond("add 2 and 3 and explain why").await;

        assert_eq!(response, SINGLE_TASK_ONLY);
        assert_eq!(bot.last_tool_used(), None);
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_other_questions_go_to_model() {
        let dir = TempDir::new().unwrap();
        let client = Arc::new(ScriptedClient::new().reply(" Rome is the capital. "));
        let mut bot = bot(client.clone(), &dir);

        let response = bot.respond("what is the capital of Italy?").await;

        assert_eq!(response, "Rome is the capital.");
        assert!(client.prompts()[0].starts_with("You are a helpful assistant with access to a calculator tool."));
        assert_eq!(bot.last_tool_used(), None);
        assert_eq!(bot.log().entries().len(), 1);
    }
}
