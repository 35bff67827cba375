use thiserror::Error;

/// Step-level failures that never reach the user as errors, only as text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepError {
    #[error("Could not extract text to translate from your request")]
    Extraction,
}

/// Failures of a whole agent turn
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("query is empty")]
    EmptyQuery,
}
