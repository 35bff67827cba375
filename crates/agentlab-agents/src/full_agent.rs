use agentlab_llm_api::LlmClient;
use agentlab_logging::InteractionLog;
use agentlab_tools::{Calculator, Translator};
use async_trait::async_trait;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::agent::{report_log_failure, Agent, AgentLevel};
use crate::classifier::is_multi_step;
use crate::composer::create_final_answer;
use crate::error::AgentError;
use crate::processor::StepProcessor;
use crate::prompts::full_agent_prompt;
use crate::splitter::split_query;
use crate::step::{Resolution, StepOutcome, StepResult};

/// Level 3: classifies each request, splits multi-step requests, routes every
/// step to a tool or the model and merges the results into one answer.
pub struct FullAgent {
    client: Arc<dyn LlmClient>,
    processor: StepProcessor,
    system_prompt: String,
    log: InteractionLog,
    last_outcomes: Vec<StepOutcome>,
    verbose: bool,
}

impl FullAgent {
    pub fn new(client: Arc<dyn LlmClient>, transcript: impl Into<PathBuf>) -> Self {
        let system_prompt = full_agent_prompt(&[&Calculator::new(), &Translator::new(client.clone())]);
        Self {
            processor: StepProcessor::new(client.clone()),
            client,
            system_prompt,
            log: InteractionLog::new(transcript, AgentLevel::Three.transcript_mode()),
            last_outcomes: Vec::new(),
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

    /// Per-step outcomes of the most recent query
    pub fn last_outcomes(&self) -> &[StepOutcome] {
        &self.last_outcomes
    }

    /// Answer a query and record it. Every outcome, faults included, is
    /// logged before returning.
    pub async fn process_query(&mut self, query: &str) -> String {
        self.last_outcomes.clear();

        let response = match self.answer(query).await {
            Ok(response) => response,
            Err(e) => format!("I encountered an unexpected error and cannot process your request: {}", e),
        };

        if let Err(e) = self.log.record(query, &response).await {
            report_log_failure(self.verbose, &e);
        }
        response
    }

    async fn answer(&mut self, query: &str) -> Result<String, AgentError> {
        if query.trim().is_empty() {
            return Err(AgentError::EmptyQuery);
        }

        if is_multi_step(query) {
            Ok(self.answer_in_steps(query).await)
        } else {
            Ok(self.answer_single(query).await)
        }
    }

    async fn answer_in_steps(&mut self, query: &str) -> String {
        let steps = split_query(query);
        let mut response = format!("I need to break this down into {} steps:\n\n", steps.len());
        let mut results = Vec::with_capacity(steps.len());

        for (i, step) in steps.iter().enumerate() {
            let outcome = self.run_step(i + 1, step).await;
            response.push_str(&format!("Step {}: {}\n", i + 1, outcome.result));
            results.push(outcome.result.clone());
            self.last_outcomes.push(outcome);
        }

        let final_answer = create_final_answer(&results)
            .unwrap_or_else(|_| format!("Completed {} steps (summary unavailable)", steps.len()));
        response.push_str(&format!("\nFinal Answer: {}", final_answer));
        response
    }

    async fn answer_single(&mut self, query: &str) -> String {
        let outcome = self.run_step(1, query).await;
        let response = match &outcome.result {
            StepResult::Knowledge { answer } => format!("Based on my knowledge:\n\n{}", answer),
            StepResult::Translation { .. } => format!("I'll translate this for you.\n\n{}", outcome.result),
            StepResult::Calculation { .. } => format!("I'll calculate this for you.\n\n{}", outcome.result),
            StepResult::Failure { message } => message.clone(),
        };
        self.last_outcomes.push(outcome);
        response
    }

    async fn run_step(&self, index: usize, step: &str) -> StepOutcome {
        let outcome = self.processor.process_step(step).await;
        if self.verbose {
            let resolution = match &outcome.resolution {
                Resolution::Tool | Resolution::Model => outcome.resolution.describe().green(),
                Resolution::Fallback { .. } => outcome.resolution.describe().yellow(),
                Resolution::Failed { .. } => outcome.resolution.describe().red(),
            };
            eprintln!(
                "{} {} -> {} ({})",
                format!("[step {}]", index).bright_black(),
                step,
                outcome.route.as_str().cyan(),
                resolution
            );
        }
        outcome
    }
}

#[async_trait]
impl Agent for FullAgent {
    fn level(&self) -> AgentLevel {
        AgentLevel::Three
    }

    fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    fn model_name(&self) -> &str {
        self.client.model_name()
    }

    async fn respond(&mut self, input: &str) -> String {
        self.process_query(input).await
    }

    fn history(&self) -> Option<String> {
        Some(self.log.render_history())
    }
}
