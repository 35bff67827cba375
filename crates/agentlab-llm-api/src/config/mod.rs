pub mod factory;
pub use factory::ClientFactory;

/// Backend type for language models
#[derive(Debug, Clone, PartialEq)]
pub enum BackendType {
    Gemini,
    OpenAI,
    Llama,
}

impl BackendType {
    /// Parse backend type from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" | "google" => Some(Self::Gemini),
            "openai" => Some(Self::OpenAI),
            "llama" | "llamacpp" | "llama.cpp" | "llama-cpp" => Some(Self::Llama),
            _ => None,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAI => "openai",
            Self::Llama => "llama",
        }
    }

    /// Environment variable holding the provider's API key, if the backend needs one
    pub fn api_key_var(&self) -> Option<&'static str> {
        match self {
            Self::Gemini => Some("GEMINI_API_KEY"),
            Self::OpenAI => Some("OPENAI_API_KEY"),
            Self::Llama => None,
        }
    }
}

/// Default Gemini API base URL
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default OpenAI API URL
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model used by the plain and calculator-equipped chatbots
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";

/// Model used by the multi-step agent
pub const DEFAULT_AGENT_MODEL: &str = "gemini-2.0-flash-exp";

/// Get the default URL for a given backend type
pub fn get_default_url_for_backend(backend: &BackendType) -> Option<String> {
    match backend {
        BackendType::Gemini => Some(GEMINI_API_URL.to_string()),
        BackendType::OpenAI => Some(OPENAI_API_URL.to_string()),
        BackendType::Llama => None, // llama.cpp has no well-known URL
    }
}

/// Parse model configuration string in format "model@backend(api_url)" or "model@backend" or "model"
/// Returns (model_name, backend, api_url)
pub fn parse_model_spec(spec: &str) -> (String, Option<BackendType>, Option<String>) {
    let (model, rest) = match spec.split_once('@') {
        Some((model, rest)) => (model, Some(rest)),
        None => (spec, None),
    };

    let mut backend = None;
    let mut api_url = None;
    if let Some(backend_part) = rest {
        if let Some(pos) = backend_part.find('(') {
            // Format: backend(url)
            let backend_name = &backend_part[..pos];
            let url = backend_part[pos + 1..].trim_end_matches(')');
            backend = BackendType::from_str(backend_name);
            api_url = Some(url.to_string());
        } else {
            backend = BackendType::from_str(backend_part);
        }
    }

    (model.to_string(), backend, api_url)
}

/// Normalize API URL by ensuring it has the correct path for OpenAI-compatible endpoints
pub fn normalize_api_url(url: &str) -> String {
    // If URL already contains a path with "completions", use it as-is
    if url.contains("/completions") || url.contains("/chat") {
        return url.to_string();
    }

    if url.ends_with('/') {
        format!("{}v1/chat/completions", url)
    } else {
        format!("{}/v1/chat/completions", url)
    }
}
