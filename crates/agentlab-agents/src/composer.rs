use thiserror::Error;

use crate::step::StepResult;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComposeError {
    #[error("no step results to summarize")]
    NoSteps,
}

/// Merge per-step results into one final answer.
///
/// A single result is returned as-is; several are labelled by kind and
/// joined with `" | "`.
pub fn create_final_answer(step_results: &[StepResult]) -> Result<String, ComposeError> {
    match step_results {
        [] => Err(ComposeError::NoSteps),
        [only] => Ok(only.to_string()),
        many => Ok(many.iter().map(label).collect::<Vec<_>>().join(" | ")),
    }
}

fn label(result: &StepResult) -> String {
    match result {
        StepResult::Translation { text, .. } => format!("German translation: {}", text),
        StepResult::Calculation { value, .. } => format!("Calculation result: {}", value),
        StepResult::Knowledge { answer } => format!("Answer: {}", answer),
        StepResult::Failure { message } => format!("Step failed: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentlab_tools::Operation;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_translation_and_calculation_summary() {
        let results = vec![
            StepResult::Translation { original: "hi".into(), text: "hallo".into() },
            StepResult::Calculation { operation: Some(Operation::Addition), value: "5.0".into() },
        ];

        assert_eq!(
            create_final_answer(&results).unwrap(),
            "German translation: hallo | Calculation result: 5.0"
        );
    }

    #[test]
    fn test_single_result_unchanged() {
        let results = vec![StepResult::Knowledge { answer: "Rome".into() }];
        assert_eq!(create_final_answer(&results).unwrap(), "Knowledge query: Rome");
    }

    #[test]
    fn test_knowledge_and_failure_are_labelled() {
        let results = vec![
            StepResult::Knowledge { answer: "Berlin".into() },
            StepResult::Failure { message: "Calculation unavailable (Error: offline)".into() },
        ];

        assert_eq!(
            create_final_answer(&results).unwrap(),
            "Answer: Berlin | Step failed: Calculation unavailable (Error: offline)"
        );
    }

    #[test]
    fn test_model_computed_value_is_kept() {
        let results = vec![
            StepResult::Calculation { operation: None, value: "about 12".into() },
            StepResult::Knowledge { answer: "yes".into() },
        ];

        assert_eq!(
            create_final_answer(&results).unwrap(),
            "Calculation result: about 12 | Answer: yes"
        );
    }

    #[test]
    fn test_no_results() {
        assert_eq!(create_final_answer(&[]), Err(ComposeError::NoSteps));
    }
}
