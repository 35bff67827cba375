use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::io;

use agentlab::app::{run_repl_mode, run_task_mode, setup_from_cli};
use agentlab::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        clap_complete::generate(shell, &mut Cli::command(), "agentlab", &mut io::stdout());
        return Ok(());
    }

    let app_config = match setup_from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
            if let Some(hint) = e.downcast_ref::<agentlab::ConfigError>().and_then(|e| e.hint()) {
                eprintln!("{}", hint.bright_black());
            }
            std::process::exit(1);
        }
    };

    if let Some(task_text) = cli.task.clone() {
        return run_task_mode(&cli, task_text, app_config).await;
    }

    run_repl_mode(&cli, app_config).await
}
