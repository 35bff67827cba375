pub mod helpers;

use agentlab_llm_api::{parse_model_spec, BackendType};
use thiserror::Error;

use crate::cli::Cli;
pub use helpers::EnvConfig;

/// Configuration errors that stop the program before any agent starts
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing API key for the {backend} backend ({var} is not set)")]
    MissingApiKey { backend: String, var: String },

    #[error("The llama backend requires an API URL (--api-url or AGENTLAB_API_URL)")]
    MissingApiUrl,

    #[error("Unknown backend '{0}' (expected gemini, openai or llama)")]
    UnknownBackend(String),
}

impl ConfigError {
    pub fn hint(&self) -> Option<String> {
        match self {
            ConfigError::MissingApiKey { var, .. } => {
                Some(format!("Example: export {}='your-api-key-here'", var))
            }
            ConfigError::MissingApiUrl => Some("Example: --api-url http://localhost:8080".to_string()),
            ConfigError::UnknownBackend(_) => None,
        }
    }
}

/// Model collaborator settings, resolved once and passed to every component
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub backend: BackendType,
    pub model: String,
    pub api_url: Option<String>,
    pub api_key: Option<String>,
}

/// Explicit settings from the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub backend: Option<String>,
    pub model: Option<String>,
    pub api_url: Option<String>,
    pub api_key: Option<String>,
}

impl From<&Cli> for ConfigOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            backend: cli.backend.clone(),
            model: cli.model.clone(),
            api_url: cli.api_url.clone(),
            api_key: cli.api_key.clone(),
        }
    }
}

impl ClientConfig {
    /// Resolve the client configuration.
    ///
    /// Precedence: CLI flags > `AGENTLAB_*` env > provider key env > defaults.
    /// A `model@backend(url)` model spec fills in backend and URL when they
    /// are not given explicitly.
    pub fn resolve(
        overrides: &ConfigOverrides,
        env: &EnvConfig,
        default_model: &str,
    ) -> Result<Self, ConfigError> {
        let (model, spec_backend, spec_url) = match overrides.model.as_ref().or(env.model.as_ref()) {
            Some(spec) => parse_model_spec(spec),
            None => (default_model.to_string(), None, None),
        };
        let model = if model.is_empty() { default_model.to_string() } else { model };

        let backend = match overrides.backend.as_ref() {
            Some(name) => parse_backend(name)?,
            None => match spec_backend {
                Some(backend) => backend,
                None => match env.backend.as_ref() {
                    Some(name) => parse_backend(name)?,
                    None => BackendType::Gemini,
                },
            },
        };

        let api_url = overrides.api_url.clone().or(spec_url).or_else(|| env.api_url.clone());

        let api_key = overrides
            .api_key
            .clone()
            .or_else(|| env.api_key.clone())
            .or_else(|| env.provider_key(&backend));

        match backend {
            BackendType::Gemini | BackendType::OpenAI if api_key.is_none() => {
                return Err(ConfigError::MissingApiKey {
                    backend: backend.as_str().to_string(),
                    var: backend.api_key_var().unwrap_or("AGENTLAB_API_KEY").to_string(),
                });
            }
            BackendType::Llama if api_url.is_none() => return Err(ConfigError::MissingApiUrl),
            _ => {}
        }

        Ok(Self { backend, model, api_url, api_key })
    }
}

fn parse_backend(name: &str) -> Result<BackendType, ConfigError> {
    BackendType::from_str(name).ok_or_else(|| ConfigError::UnknownBackend(name.to_string()))
}
