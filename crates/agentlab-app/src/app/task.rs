use anyhow::Result;
use colored::Colorize;

use crate::app::setup::{open_session_log, AppConfig};
use crate::app::turn::answer_turn;
use crate::cli::Cli;

/// Run in task mode - answer a single query and exit
pub async fn run_task_mode(cli: &Cli, task_text: String, app_config: AppConfig) -> Result<()> {
    println!("{}", format!("🤖 {} - Task Mode", app_config.level.title()).bright_cyan().bold());
    println!("{}", format!("Working directory: {}", app_config.work_dir.display()).bright_black());
    println!("{}", format!("Task: {}", task_text).bright_yellow());
    println!();

    let mut agent = app_config.build_agent(cli.verbose);
    let mut logger = open_session_log(cli, &app_config, agent.as_ref()).await;

    let response = answer_turn(agent.as_mut(), logger.as_mut(), &task_text).await;
    println!("{}", response);

    if let Some(logger) = &mut logger {
        logger.shutdown().await;
    }

    Ok(())
}
