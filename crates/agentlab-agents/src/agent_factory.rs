use agentlab_llm_api::LlmClient;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::agent::{Agent, AgentLevel};
use crate::chatbot::SmartChatbot;
use crate::full_agent::FullAgent;
use crate::tool_chatbot::ChatbotWithTool;

/// Builds the agent for a level around an already-configured model client
pub struct AgentFactory;

impl AgentFactory {
    /// Transcript path for a level: the explicit override, or the level's
    /// default file name inside `work_dir`.
    pub fn transcript_path(level: AgentLevel, work_dir: &Path, transcript: Option<&Path>) -> PathBuf {
        match transcript {
            Some(path) => path.to_path_buf(),
            None => work_dir.join(level.transcript_file()),
        }
    }

    pub fn create(
        level: AgentLevel,
        client: Arc<dyn LlmClient>,
        transcript: PathBuf,
        verbose: bool,
    ) -> Box<dyn Agent> {
        match level {
            AgentLevel::One => Box::new(SmartChatbot::new(client, transcript).with_verbose(verbose)),
            AgentLevel::Two => Box::new(ChatbotWithTool::new(client, transcript).with_verbose(verbose)),
            AgentLevel::Three => Box::new(FullAgent::new(client, transcript).with_verbose(verbose)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentlab_llm_api::ScriptedClient;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_transcript_path_defaults_per_level() {
        let dir = Path::new("/tmp/work");
        assert_eq!(
            AgentFactory::transcript_path(AgentLevel::Two, dir, None),
            PathBuf::from("/tmp/work/level2_interactions.txt")
        );
        assert_eq!(
            AgentFactory::transcript_path(AgentLevel::Two, dir, Some(Path::new("custom.txt"))),
            PathBuf::from("custom.txt")
        );
    }

    #[test]
    fn test_create_matches_level() {
        for level in [AgentLevel::One, AgentLevel::Two, AgentLevel::Three] {
            let agent = AgentFactory::create(level, Arc::new(ScriptedClient::new()), PathBuf::from("t.txt"), false);
            assert_eq!(agent.level(), level);
            assert_eq!(agent.model_name(), "scripted");
            assert_eq!(agent.history().is_some(), level.has_history());
        }
    }
}
