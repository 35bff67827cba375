use agentlab_llm_api::{DEFAULT_AGENT_MODEL, DEFAULT_CHAT_MODEL};
use agentlab_logging::TranscriptMode;
use async_trait::async_trait;
use colored::Colorize;
use std::fmt;

/// Capability level of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AgentLevel {
    /// Model only
    One,
    /// Model plus calculator
    Two,
    /// Multi-step agent with calculator and translator
    Three,
}

impl AgentLevel {
    pub fn from_u8(level: u8) -> Option<Self> {
        match level {
            1 => Some(AgentLevel::One),
            2 => Some(AgentLevel::Two),
            3 => Some(AgentLevel::Three),
            _ => None,
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            AgentLevel::One => 1,
            AgentLevel::Two => 2,
            AgentLevel::Three => 3,
        }
    }

    pub fn transcript_file(&self) -> String {
        format!("level{}_interactions.txt", self.as_u8())
    }

    /// Level 1/2 transcripts grow block by block, Level 3 rewrites the whole log each turn
    pub fn transcript_mode(&self) -> TranscriptMode {
        match self {
            AgentLevel::One | AgentLevel::Two => TranscriptMode::Append,
            AgentLevel::Three => TranscriptMode::Rewrite,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            AgentLevel::One | AgentLevel::Two => DEFAULT_CHAT_MODEL,
            AgentLevel::Three => DEFAULT_AGENT_MODEL,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AgentLevel::One => "Smart Assistant Level 1 - LLM Only",
            AgentLevel::Two => "Smart Assistant Level 2 - LLM + Calculator",
            AgentLevel::Three => "Level 3 - Full Agentic AI",
        }
    }

    /// Whether the REPL offers the `history` command
    pub fn has_history(&self) -> bool {
        matches!(self, AgentLevel::Three)
    }
}

impl fmt::Display for AgentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.as_u8())
    }
}

/// Common surface of the three agents, driven by the REPL and one-shot mode
#[async_trait]
pub trait Agent: Send {
    fn level(&self) -> AgentLevel;

    fn system_prompt(&self) -> &str;

    fn model_name(&self) -> &str;

    /// Answer one user turn. Never fails: faults come back as response text.
    async fn respond(&mut self, input: &str) -> String;

    /// Rendered in-memory history, for agents that keep one
    fn history(&self) -> Option<String> {
        None
    }

    /// Name of the tool used for the most recent turn, if any
    fn last_tool_used(&self) -> Option<&str> {
        None
    }
}

/// Transcript faults never change a response; they only show up in verbose mode
pub(crate) fn report_log_failure(verbose: bool, err: &anyhow::Error) {
    if verbose {
        eprintln!("{} {:#}", "Failed to save interaction:".yellow(), err);
    }
}
