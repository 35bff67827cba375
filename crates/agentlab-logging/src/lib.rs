// Logging module - transcripts, session logs and request debugging
pub mod conversation_logger;
pub mod interaction_log;
pub mod request_logger;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use conversation_logger::ConversationLogger;
pub use interaction_log::{Interaction, InteractionLog, TranscriptMode, HISTORY_FALLBACK_FILE};

pub use request_logger::{
    log_request,
    log_request_to_file,
    log_response,
    log_response_to_file,
};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Get or create the base agentlab directory (~/.agentlab)
pub fn get_agentlab_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let agentlab_dir = PathBuf::from(home_dir).join(".agentlab");

    if !agentlab_dir.exists() {
        std::fs::create_dir_all(&agentlab_dir)
            .context("Failed to create agentlab directory")?;
    }

    Ok(agentlab_dir)
}

/// Get or create the logs directory (~/.agentlab/logs)
pub fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = get_agentlab_dir()?.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir)
            .context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_truncate_short_string_unchanged() {
        assert_eq!(safe_truncate("hello", 10), "hello");
    }

    #[test]
    fn test_safe_truncate_respects_char_boundaries() {
        assert_eq!(safe_truncate("Grüße aus Berlin", 8), "Grüße...");
    }

    #[test]
    fn test_safe_truncate_tiny_limit() {
        assert_eq!(safe_truncate("abcdef", 2), "...");
    }
}
