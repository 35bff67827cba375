use anyhow::{Context, Result};
use colored::Colorize;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use agentlab_agents::{Agent, AgentFactory, AgentLevel};
use agentlab_llm_api::{ClientFactory, LlmClient, RequestLogging};
use agentlab_logging::ConversationLogger;

use crate::cli::Cli;
use crate::config::helpers::mask_key;
use crate::config::{ClientConfig, ConfigOverrides, EnvConfig};

/// Application configuration derived from CLI arguments and environment
pub struct AppConfig {
    pub level: AgentLevel,
    pub client_config: ClientConfig,
    pub client: Arc<dyn LlmClient>,
    pub work_dir: PathBuf,
    pub transcript: PathBuf,
}

impl AppConfig {
    pub fn build_agent(&self, verbose: bool) -> Box<dyn Agent> {
        AgentFactory::create(self.level, self.client.clone(), self.transcript.clone(), verbose)
    }
}

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    let level = AgentLevel::from_u8(cli.level)
        .with_context(|| format!("Unsupported agent level {}", cli.level))?;

    // Precedence: CLI flags > AGENTLAB_* env > provider key env > defaults
    let client_config = ClientConfig::resolve(
        &ConfigOverrides::from(cli),
        &EnvConfig::from_env(),
        level.default_model(),
    )?;

    let work_dir = match &cli.work_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("Failed to determine current directory")?,
    };
    std::fs::create_dir_all(&work_dir)
        .with_context(|| format!("Failed to create working directory {}", work_dir.display()))?;

    let transcript = AgentFactory::transcript_path(level, &work_dir, cli.transcript.as_deref());

    if cli.verbose {
        eprintln!(
            "{}",
            format!(
                "🔧 DEBUG: backend={} model={} url={:?} key={}",
                client_config.backend.as_str(),
                client_config.model,
                client_config.api_url,
                client_config.api_key.as_deref().map(mask_key).unwrap_or_else(|| "<none>".to_string())
            )
            .bright_black()
        );
    }

    let client = ClientFactory::create(
        client_config.backend.clone(),
        client_config.api_key.clone(),
        client_config.model.clone(),
        client_config.api_url.clone(),
        RequestLogging { verbose: cli.verbose, to_file: cli.log_requests },
    )
    .context("Failed to create language model client")?;

    Ok(AppConfig { level, client_config, client, work_dir, transcript })
}

/// Open the JSONL session log unless disabled. A failure to open it only
/// disables session logging.
pub async fn open_session_log(cli: &Cli, app_config: &AppConfig, agent: &dyn Agent) -> Option<ConversationLogger> {
    if cli.no_session_log {
        return None;
    }

    let mut logger = match ConversationLogger::new(&app_config.work_dir, Some(app_config.level.as_u8())).await {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            return None;
        }
    };

    logger.log("system", agent.system_prompt(), Some(agent.model_name())).await;
    Some(logger)
}
