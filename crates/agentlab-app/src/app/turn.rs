use agentlab_agents::Agent;
use agentlab_logging::ConversationLogger;

/// Run one user turn through the agent, mirroring both sides to the session log
pub async fn answer_turn(agent: &mut dyn Agent, logger: Option<&mut ConversationLogger>, input: &str) -> String {
    match logger {
        Some(logger) => {
            logger.log("user", input, None).await;
            let response = agent.respond(input).await;
            logger
                .log_with_tool("assistant", &response, Some(agent.model_name()), agent.last_tool_used())
                .await;
            response
        }
        None => agent.respond(input).await,
    }
}
