use thiserror::Error;

/// Failure kinds reported by the local tools
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    /// The input did not contain exactly two numbers
    #[error("Could not parse numbers")]
    Parse,

    #[error("Unknown operation")]
    UnknownOperation,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Empty text provided")]
    EmptyInput { original: String },

    /// The model call behind the translator failed
    #[error("Translation failed: {message}")]
    Translation { original: String, message: String },

    #[error("{0}")]
    Internal(String),
}

impl ToolError {
    /// The text the caller asked to translate, when the error came from the translator
    pub fn original(&self) -> Option<&str> {
        match self {
            ToolError::EmptyInput { original } | ToolError::Translation { original, .. } => Some(original),
            _ => None,
        }
    }
}
