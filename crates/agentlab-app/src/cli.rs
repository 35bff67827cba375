use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI arguments for agentlab
#[derive(Parser, Debug)]
#[command(name = "agentlab")]
#[command(about = "Chat agents over a hosted language model: plain chat, calculator, multi-step tools")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Agent level: 1 = model only, 2 = model + calculator, 3 = multi-step agent
    #[arg(long, short = 'l', default_value_t = 3, env = "AGENTLAB_LEVEL",
          value_parser = clap::value_parser!(u8).range(1..=3))]
    pub level: u8,

    /// Backend type (gemini, openai, llama)
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<String>,

    /// Model name, optionally as model@backend or model@backend(url)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// API URL override (required for llama.cpp, e.g. http://localhost:8080)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// API key override
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Transcript file (default: level<N>_interactions.txt in the working directory)
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Working directory for transcripts and session logs (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub work_dir: Option<PathBuf>,

    /// Answer a single query and exit
    #[arg(long, value_name = "TEXT")]
    pub task: Option<String>,

    /// Enable verbose debug output (shows HTTP requests, responses and step routing)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Write every request and response to ~/.agentlab/logs
    #[arg(long)]
    pub log_requests: bool,

    /// Do not write the JSONL session log
    #[arg(long)]
    pub no_session_log: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_cli_from_args(args: &[&str]) -> Result<Cli, clap::Error> {
        let mut cli_args = vec!["agentlab"];
        cli_args.extend(args);
        Cli::try_parse_from(cli_args)
    }

    #[test]
    fn test_default_cli_parsing() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse_cli_from_args(&[])?;

        if std::env::var("AGENTLAB_LEVEL").is_err() {
            assert_eq!(cli.level, 3);
        }
        assert!(cli.backend.is_none());
        assert!(cli.task.is_none());
        assert!(!cli.verbose);
        assert!(!cli.log_requests);
        assert!(!cli.no_session_log);
        assert!(cli.generate.is_none());

        Ok(())
    }

    #[test]
    fn test_level_and_task() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse_cli_from_args(&["--level", "2", "--task", "5 plus 3", "-v"])?;

        assert_eq!(cli.level, 2);
        assert_eq!(cli.task.as_deref(), Some("5 plus 3"));
        assert!(cli.verbose);

        Ok(())
    }

    #[test]
    fn test_level_out_of_range_rejected() {
        assert!(parse_cli_from_args(&["--level", "4"]).is_err());
        assert!(parse_cli_from_args(&["--level", "0"]).is_err());
    }

    #[test]
    fn test_backend_overrides() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse_cli_from_args(&[
            "--backend", "llama",
            "--api-url", "http://localhost:8080",
            "--model", "qwen",
            "--transcript", "/tmp/t.txt",
        ])?;

        assert_eq!(cli.backend.as_deref(), Some("llama"));
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(cli.model.as_deref(), Some("qwen"));
        assert_eq!(cli.transcript, Some(PathBuf::from("/tmp/t.txt")));

        Ok(())
    }

    #[test]
    fn test_generate_flag() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse_cli_from_args(&["--generate", "bash"])?;
        assert!(matches!(cli.generate, Some(Shell::Bash)));
        Ok(())
    }
}
