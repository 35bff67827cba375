//! # agentlab-llm-api
//!
//! The language-model collaborator used by every agentlab agent. A model is
//! reduced to one operation: a prompt goes in, plain text comes out, and the
//! call may fail.
//!
//! Supported backends:
//! - Google Gemini (`generateContent` REST API)
//! - OpenAI and any OpenAI-compatible server such as llama.cpp
//!
//! ## Example
//!
//! ```rust,no_run
//! use agentlab_llm_api::{BackendType, ClientFactory, RequestLogging};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ClientFactory::create(
//!         BackendType::Gemini,
//!         Some("your-api-key".to_string()),
//!         "gemini-2.5-flash".to_string(),
//!         None,
//!         RequestLogging::default(),
//!     )?;
//!
//!     let answer = client.generate("What is the capital of France?").await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;


pub use client::{LlmClient, RequestLogging};
pub use client::gemini::GeminiClient;
pub use client::openai_compat::OpenAiCompatClient;

#[cfg(any(test, feature = "test-support"))]
pub use client::scripted::ScriptedClient;

pub use config::{
    BackendType,
    ClientFactory,
    GEMINI_API_URL,
    OPENAI_API_URL,
    DEFAULT_CHAT_MODEL,
    DEFAULT_AGENT_MODEL,
    normalize_api_url,
    get_default_url_for_backend,
    parse_model_spec,
};
