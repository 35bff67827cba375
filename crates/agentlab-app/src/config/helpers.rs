use agentlab_llm_api::BackendType;
use std::env;

/// `AGENTLAB_*` settings plus the provider key variables, read once at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvConfig {
    pub backend: Option<String>,
    pub model: Option<String>,
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            backend: get("AGENTLAB_BACKEND"),
            model: get("AGENTLAB_MODEL"),
            api_url: get("AGENTLAB_API_URL"),
            api_key: get("AGENTLAB_API_KEY"),
            gemini_api_key: get("GEMINI_API_KEY"),
            openai_api_key: get("OPENAI_API_KEY"),
        }
    }

    /// The provider-specific key for a backend, if it uses one
    pub fn provider_key(&self, backend: &BackendType) -> Option<String> {
        match backend {
            BackendType::Gemini => self.gemini_api_key.clone(),
            BackendType::OpenAI => self.openai_api_key.clone(),
            BackendType::Llama => None,
        }
    }
}

/// Show only the first and last four characters of a key
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
