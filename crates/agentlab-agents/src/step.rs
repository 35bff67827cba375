use agentlab_tools::{Operation, ToolError};
use std::fmt;

/// What a single step produced.
///
/// `Display` renders the transcript form ("Translated 'x' to German: 'y'",
/// "Calculated addition: 5.0", "Knowledge query: ...").
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    Translation { original: String, text: String },
    /// `operation` is `None` when the model computed the value instead of the calculator
    Calculation { operation: Option<Operation>, value: String },
    Knowledge { answer: String },
    Failure { message: String },
}

impl fmt::Display for StepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepResult::Translation { original, text } => {
                write!(f, "Translated '{}' to German: '{}'", original, text)
            }
            StepResult::Calculation { operation: Some(op), value } => write!(f, "Calculated {}: {}", op, value),
            StepResult::Calculation { operation: None, value } => write!(f, "Calculated result: {}", value),
            StepResult::Knowledge { answer } => write!(f, "Knowledge query: {}", answer),
            StepResult::Failure { message } => f.write_str(message),
        }
    }
}

/// Which handler a step was sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRoute {
    Translation,
    Calculation,
    Knowledge,
}

impl StepRoute {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepRoute::Translation => "translation",
            StepRoute::Calculation => "calculation",
            StepRoute::Knowledge => "knowledge",
        }
    }
}

/// How the step's answer was obtained
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The local tool answered
    Tool,
    /// The tool failed and the one-shot model fallback answered
    Fallback { tool_error: ToolError },
    /// Answered by the model directly
    Model,
    /// Nothing could answer; the result is a `StepResult::Failure`
    Failed { tool_error: Option<ToolError>, fault: String },
}

impl Resolution {
    pub fn describe(&self) -> String {
        match self {
            Resolution::Tool => "tool".to_string(),
            Resolution::Fallback { tool_error } => format!("model fallback after tool error: {}", tool_error),
            Resolution::Model => "model".to_string(),
            Resolution::Failed { fault, .. } => format!("failed: {}", fault),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub route: StepRoute,
    pub resolution: Resolution,
    pub result: StepResult,
}

impl StepOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.result, StepResult::Failure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_matches_transcript_markers() {
        let translated = StepResult::Translation { original: "hi".into(), text: "hallo".into() };
        assert_eq!(translated.to_string(), "Translated 'hi' to German: 'hallo'");

        let calculated = StepResult::Calculation { operation: Some(Operation::Addition), value: "5.0".into() };
        assert_eq!(calculated.to_string(), "Calculated addition: 5.0");

        let fallback = StepResult::Calculation { operation: None, value: "42".into() };
        assert_eq!(fallback.to_string(), "Calculated result: 42");

        let knowledge = StepResult::Knowledge { answer: "Paris".into() };
        assert_eq!(knowledge.to_string(), "Knowledge query: Paris");
    }
}
