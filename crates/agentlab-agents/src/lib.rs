//! Chat agents for agentlab
//!
//! Three agents of increasing capability share one model collaborator:
//! - [`SmartChatbot`]: model only
//! - [`ChatbotWithTool`]: model plus the calculator
//! - [`FullAgent`]: splits multi-step requests, routes each step to the
//!   calculator, the translator or the model, and merges the results

pub mod agent;
pub mod agent_factory;
pub mod chatbot;
pub mod classifier;
pub mod composer;
pub mod cues;
pub mod error;
pub mod full_agent;
pub mod processor;
pub mod prompts;
pub mod splitter;
pub mod step;
pub mod tool_chatbot;

pub use agent::{Agent, AgentLevel};
pub use agent_factory::AgentFactory;
pub use chatbot::SmartChatbot;
pub use classifier::is_multi_step;
pub use composer::{create_final_answer, ComposeError};
pub use error::{AgentError, StepError};
pub use full_agent::FullAgent;
pub use processor::StepProcessor;
pub use splitter::split_query;
pub use step::{Resolution, StepOutcome, StepResult, StepRoute};
pub use tool_chatbot::ChatbotWithTool;
