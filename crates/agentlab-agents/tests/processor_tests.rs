use agentlab_agents::{Resolution, StepProcessor, StepResult, StepRoute};
use agentlab_llm_api::ScriptedClient;
use agentlab_tools::{Operation, ToolError};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn processor(client: ScriptedClient) -> (StepProcessor, Arc<ScriptedClient>) {
    let client = Arc::new(client);
    (StepProcessor::new(client.clone()), client)
}

#[test]
fn test_routing_priority() {
    assert_eq!(StepProcessor::route("translate 'add 2 and 3' to German"), StepRoute::Translation);
    assert_eq!(StepProcessor::route("please add 2 and 3"), StepRoute::Calculation);
    assert_eq!(StepProcessor::route("what is 2 plus 3"), StepRoute::Knowledge);
    assert_eq!(StepProcessor::route("translate 'cat'"), StepRoute::Knowledge);
}

#[tokio::test]
async fn test_calculation_never_calls_model_when_calculator_succeeds() {
    let (processor, client) = processor(ScriptedClient::new());

    let outcome = processor.process_step("add 2 and 3").await;

    assert_eq!(outcome.route, StepRoute::Calculation);
    assert_eq!(outcome.resolution, Resolution::Tool);
    assert_eq!(
        outcome.result,
        StepResult::Calculation { operation: Some(Operation::Addition), value: "5.0".into() }
    );
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_calculation_fallback_succeeds() {
    let (processor, client) = processor(ScriptedClient::new().reply(" undefined \n"));

    let outcome = processor.process_step("divide 4 and 0").await;

    assert_eq!(outcome.resolution, Resolution::Fallback { tool_error: ToolError::DivisionByZero });
    assert_eq!(outcome.result.to_string(), "Calculated result: undefined");
    assert_eq!(client.prompts(), vec!["Calculate: divide 4 and 0. Give only the numeric result:".to_string()]);
}

#[tokio::test]
async fn test_calculation_fallback_fails_too() {
    let (processor, client) = processor(ScriptedClient::new().fail("offline"));

    let outcome = processor.process_step("divide 4 and 0").await;

    assert!(outcome.is_failure());
    assert_eq!(
        outcome.resolution,
        Resolution::Failed { tool_error: Some(ToolError::DivisionByZero), fault: "offline".into() }
    );
    assert_eq!(outcome.result.to_string(), "Calculation unavailable (Error: offline)");
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn test_translation_through_tool() {
    let (processor, client) = processor(ScriptedClient::new().reply("Guten Morgen"));

    let outcome = processor.process_step("translate 'good morning' to german").await;

    assert_eq!(outcome.resolution, Resolution::Tool);
    assert_eq!(outcome.result.to_string(), "Translated 'good morning' to German: 'Guten Morgen'");
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn test_translation_fallback_after_tool_fault() {
    let (processor, client) = processor(ScriptedClient::new().fail("quota").reply("Guten Morgen"));

    let outcome = processor.process_step("translate 'good morning' to german").await;

    assert_eq!(
        outcome.resolution,
        Resolution::Fallback {
            tool_error: ToolError::Translation { original: "good morning".into(), message: "quota".into() }
        }
    );
    assert_eq!(outcome.result.to_string(), "Translated 'good morning' to German: 'Guten Morgen'");
    assert_eq!(
        client.prompts()[1],
        "Translate 'good morning' to German. Give only the German translation:"
    );
}

#[tokio::test]
async fn test_translation_both_failed() {
    let (processor, _) = processor(ScriptedClient::new().fail("quota").fail("down"));

    let outcome = processor.process_step("translate 'good morning' to german").await;

    assert!(matches!(outcome.resolution, Resolution::Failed { tool_error: Some(_), .. }));
    assert_eq!(outcome.result.to_string(), "Translation unavailable for 'good morning' (Error: down)");
}

#[tokio::test]
async fn test_translation_without_quotes() {
    let (processor, client) = processor(ScriptedClient::new());

    let outcome = processor.process_step("translate hello to german").await;

    assert_eq!(
        outcome.result,
        StepResult::Failure { message: "Could not extract text to translate from your request".into() }
    );
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_knowledge_answer() {
    let (processor, client) = processor(ScriptedClient::new().reply("Paris\n"));

    let outcome = processor.process_step("what is the capital of France").await;

    assert_eq!(outcome.resolution, Resolution::Model);
    assert_eq!(outcome.result, StepResult::Knowledge { answer: "Paris".into() });
    assert_eq!(client.prompts()[0], "Answer this question concisely: what is the capital of France");
}

#[tokio::test]
async fn test_knowledge_failure_messages() {
    let (processor, _) = processor(ScriptedClient::new().fail("timeout").fail("timeout"));

    let lookup = processor.process_step("what is the capital of Peru").await;
    let general = processor.process_step("who wrote Faust").await;

    assert_eq!(
        lookup.result.to_string(),
        "Knowledge query unavailable (Error: timeout). Please check your internet connection."
    );
    assert_eq!(general.result.to_string(), "I cannot process this request right now (Error: timeout)");
}
