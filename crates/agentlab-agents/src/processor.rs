use agentlab_llm_api::LlmClient;
use agentlab_tools::{Calculator, Translator};
use std::sync::Arc;

use crate::cues::{extract_quoted, mentions_math, mentions_translation, LOOKUP_CUES};
use crate::error::StepError;
use crate::step::{Resolution, StepOutcome, StepResult, StepRoute};

/// Routes one sub-query to the translator, the calculator or a knowledge
/// prompt. A failing tool gets exactly one model fallback; nothing is retried.
pub struct StepProcessor {
    client: Arc<dyn LlmClient>,
    calculator: Calculator,
    translator: Translator,
}

impl StepProcessor {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            translator: Translator::new(client.clone()),
            calculator: Calculator::new(),
            client,
        }
    }

    /// Pick the handler for a step: translation beats arithmetic beats knowledge
    pub fn route(step: &str) -> StepRoute {
        let lower = step.to_lowercase();
        if mentions_translation(&lower) {
            StepRoute::Translation
        } else if mentions_math(&lower) {
            StepRoute::Calculation
        } else {
            StepRoute::Knowledge
        }
    }

    pub async fn process_step(&self, step: &str) -> StepOutcome {
        match Self::route(step) {
            StepRoute::Translation => self.translate_step(step).await,
            StepRoute::Calculation => self.calculate_step(step).await,
            StepRoute::Knowledge => self.knowledge_step(step).await,
        }
    }

    async fn translate_step(&self, step: &str) -> StepOutcome {
        let route = StepRoute::Translation;

        let text = match extract_quoted(step).ok_or(StepError::Extraction) {
            Ok(text) => text,
            Err(e) => {
                return StepOutcome {
                    route,
                    resolution: Resolution::Failed { tool_error: None, fault: e.to_string() },
                    result: StepResult::Failure { message: e.to_string() },
                };
            }
        };

        let tool_error = match self.translator.translate(text).await {
            Ok(translation) => {
                return StepOutcome {
                    route,
                    resolution: Resolution::Tool,
                    result: StepResult::Translation {
                        original: text.to_string(),
                        text: translation.translation,
                    },
                };
            }
            Err(e) => e,
        };

        let prompt = format!("Translate '{}' to German. Give only the German translation:", text);
        match self.client.generate(&prompt).await {
            Ok(answer) => StepOutcome {
                route,
                resolution: Resolution::Fallback { tool_error },
                result: StepResult::Translation {
                    original: text.to_string(),
                    text: answer.trim().to_string(),
                },
            },
            Err(e) => StepOutcome {
                route,
                resolution: Resolution::Failed { tool_error: Some(tool_error), fault: e.to_string() },
                result: StepResult::Failure {
                    message: format!("Translation unavailable for '{}' (Error: {})", text, e),
                },
            },
        }
    }

    async fn calculate_step(&self, step: &str) -> StepOutcome {
        let route = StepRoute::Calculation;

        let tool_error = match self.calculator.calculate(step) {
            Ok(calculation) => {
                return StepOutcome {
                    route,
                    resolution: Resolution::Tool,
                    result: StepResult::Calculation {
                        operation: Some(calculation.operation),
                        value: calculation.formatted(),
                    },
                };
            }
            Err(e) => e,
        };

        let prompt = format!("Calculate: {}. Give only the numeric result:", step);
        match self.client.generate(&prompt).await {
            Ok(answer) => StepOutcome {
                route,
                resolution: Resolution::Fallback { tool_error },
                result: StepResult::Calculation {
                    operation: None,
                    value: answer.trim().to_string(),
                },
            },
            Err(e) => StepOutcome {
                route,
                resolution: Resolution::Failed { tool_error: Some(tool_error), fault: e.to_string() },
                result: StepResult::Failure {
                    message: format!("Calculation unavailable (Error: {})", e),
                },
            },
        }
    }

    async fn knowledge_step(&self, step: &str) -> StepOutcome {
        let route = StepRoute::Knowledge;
        let prompt = format!("Answer this question concisely: {}", step);

        match self.client.generate(&prompt).await {
            Ok(answer) => StepOutcome {
                route,
                resolution: Resolution::Model,
                result: StepResult::Knowledge { answer: answer.trim().to_string() },
            },
            Err(e) => {
                let lower = step.to_lowercase();
                let message = if LOOKUP_CUES.iter().any(|cue| lower.contains(cue)) {
                    format!(
                        "Knowledge query unavailable (Error: {}). Please check your internet connection.",
                        e
                    )
                } else {
                    format!("I cannot process this request right now (Error: {})", e)
                };
                StepOutcome {
                    route,
                    resolution: Resolution::Failed { tool_error: None, fault: e.to_string() },
                    result: StepResult::Failure { message },
                }
            }
        }
    }
}
