use agentlab_llm_api::LlmClient;
use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ToolError;
use crate::tool::{Tool, ToolResult};

/// Language pair tag attached to every translation
pub const LANGUAGE_PAIR: &str = "en-de";

/// Successful translator outcome
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub original: String,
    pub translation: String,
    pub language_pair: String,
}

/// English→German translator backed by one model call per request
pub struct Translator {
    client: Arc<dyn LlmClient>,
}

impl Translator {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    fn build_prompt(text: &str) -> String {
        format!(
            "Translate the following English text to German.\n\
             Provide only the German translation, nothing else.\n\n\
             English: {}\n\
             German:",
            text
        )
    }

    /// Strip the echoed "German:" label some models put in front of the answer
    fn clean_response(raw: &str) -> String {
        let trimmed = raw.trim();
        match trimmed.strip_prefix("German:") {
            Some(rest) => rest.trim().to_string(),
            None => trimmed.to_string(),
        }
    }

    pub async fn translate(&self, text: &str) -> Result<Translation, ToolError> {
        if text.trim().is_empty() {
            return Err(ToolError::EmptyInput { original: text.to_string() });
        }

        let raw = self
            .client
            .generate(&Self::build_prompt(text))
            .await
            .map_err(|e| ToolError::Translation {
                original: text.to_string(),
                message: e.to_string(),
            })?;

        Ok(Translation {
            original: text.to_string(),
            translation: Self::clean_response(&raw),
            language_pair: LANGUAGE_PAIR.to_string(),
        })
    }
}

#[async_trait]
impl Tool for Translator {
    fn name(&self) -> &str {
        "translator"
    }

    fn description(&self) -> &str {
        "For English to German translation"
    }

    async fn execute(&self, input: &str) -> ToolResult {
        match self.translate(input).await {
            Ok(t) => ToolResult::success(t.translation.clone())
                .with_metadata("original", t.original)
                .with_metadata("translation", t.translation)
                .with_metadata("language_pair", t.language_pair),
            Err(e) => {
                let original = e.original().unwrap_or(input).to_string();
                ToolResult::error(e.to_string()).with_metadata("original", original)
            }
        }
    }
}
