use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::app::setup::{open_session_log, AppConfig};
use crate::app::turn::answer_turn;
use crate::cli::Cli;

/// What the REPL does with one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    Skip,
    Quit,
    History,
    Query(&'a str),
}

/// Classify a line; `history` is only a command when the agent keeps one
pub fn parse_line(line: &str, has_history: bool) -> ReplCommand<'_> {
    let line = line.trim();
    if line.is_empty() {
        ReplCommand::Skip
    } else if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        ReplCommand::Quit
    } else if has_history && line.eq_ignore_ascii_case("history") {
        ReplCommand::History
    } else {
        ReplCommand::Query(line)
    }
}

/// Run interactive REPL mode
pub async fn run_repl_mode(cli: &Cli, app_config: AppConfig) -> Result<()> {
    let level = app_config.level;
    let mut agent = app_config.build_agent(cli.verbose);

    println!("{}", format!("🤖 {}", level.title()).bright_cyan().bold());
    println!(
        "{}",
        format!("Model: {} ({})", agent.model_name(), app_config.client_config.backend.as_str()).bright_black()
    );
    println!("{}", format!("Transcript: {}", app_config.transcript.display()).bright_black());
    if level.has_history() {
        println!("{}", "Commands: 'quit' to exit | 'history' to view past conversations\n".bright_black());
    } else {
        println!("{}", "Type 'quit' to exit\n".bright_black());
    }

    let mut logger = open_session_log(cli, &app_config, agent.as_ref()).await;
    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => match parse_line(&line, level.has_history()) {
                ReplCommand::Skip => continue,
                ReplCommand::Quit => {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }
                ReplCommand::History => {
                    if let Some(history) = agent.history() {
                        println!("{}", history);
                    }
                }
                ReplCommand::Query(query) => {
                    rl.add_history_entry(query)?;
                    println!("{}", "Bot: Thinking...".bright_black());
                    let response = answer_turn(agent.as_mut(), logger.as_mut(), query).await;
                    println!("{} {}\n", "Bot:".bright_blue().bold(), response);
                }
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    // Graceful shutdown of logger (flush & close)
    if let Some(logger) = &mut logger {
        logger.shutdown().await;
    }

    Ok(())
}
