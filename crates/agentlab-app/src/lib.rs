// agentlab - chat agents of increasing capability over a hosted language model
pub mod app;
pub mod cli;
pub mod config;

pub use cli::Cli;
pub use config::{ClientConfig, ConfigError};
