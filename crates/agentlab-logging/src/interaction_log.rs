//! Per-turn interaction records mirrored to a human-readable transcript.
//!
//! Every top-level user turn becomes one [`Interaction`]. Records are kept in
//! memory for the lifetime of the session and written to the transcript after
//! each turn, either appended as a single block or by rewriting the whole file.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// File written next to the transcript when a full rewrite fails
pub const HISTORY_FALLBACK_FILE: &str = "history.txt";

const SEPARATOR_WIDTH: usize = 50;
const HISTORY_PREVIEW_CHARS: usize = 80;

/// One user turn: when it happened, what was asked, what was answered
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub timestamp: String,
    pub query: String,
    pub response: String,
}

impl Interaction {
    /// Create a record stamped with the current local time
    pub fn new(query: &str, response: &str) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            query: query.to_string(),
            response: response.to_string(),
        }
    }
}

/// How the transcript file is kept in sync with the in-memory log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptMode {
    /// Append one block per turn (plain chatbots)
    Append,
    /// Rewrite the whole log after every turn (multi-step agent)
    Rewrite,
}

/// Ordered, session-scoped interaction log with a transcript mirror
#[derive(Debug)]
pub struct InteractionLog {
    entries: Vec<Interaction>,
    transcript_path: PathBuf,
    mode: TranscriptMode,
}

impl InteractionLog {
    pub fn new(transcript_path: impl Into<PathBuf>, mode: TranscriptMode) -> Self {
        Self {
            entries: Vec::new(),
            transcript_path: transcript_path.into(),
            mode,
        }
    }

    pub fn entries(&self) -> &[Interaction] {
        &self.entries
    }

    pub fn transcript_path(&self) -> &Path {
        &self.transcript_path
    }

    pub fn mode(&self) -> TranscriptMode {
        self.mode
    }

    /// Record a turn in memory, then mirror it to the transcript.
    ///
    /// The in-memory entry is kept even when the file write fails.
    pub async fn record(&mut self, query: &str, response: &str) -> Result<()> {
        self.push(Interaction::new(query, response)).await
    }

    /// Record an already-built interaction
    pub async fn push(&mut self, interaction: Interaction) -> Result<()> {
        self.entries.push(interaction);

        match self.mode {
            TranscriptMode::Append => self.append_last().await,
            TranscriptMode::Rewrite => self.rewrite_all().await,
        }
    }

    async fn append_last(&self) -> Result<()> {
        let Some(entry) = self.entries.last() else {
            return Ok(());
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.transcript_path)
            .await
            .with_context(|| format!("Failed to open transcript {}", self.transcript_path.display()))?;

        file.write_all(format_append_block(entry).as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn rewrite_all(&self) -> Result<()> {
        let content = format_full_log(&self.entries);
        if let Err(e) = fs::write(&self.transcript_path, content).await {
            let Some(last) = self.entries.last() else {
                return Err(e.into());
            };
            let fallback = self.fallback_path();
            fs::write(&fallback, format_last_turn(last))
                .await
                .with_context(|| {
                    format!(
                        "Failed to write transcript {} ({}) and fallback {}",
                        self.transcript_path.display(),
                        e,
                        fallback.display()
                    )
                })?;
        }
        Ok(())
    }

    fn fallback_path(&self) -> PathBuf {
        match self.transcript_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && dir.is_dir() => dir.join(HISTORY_FALLBACK_FILE),
            _ => PathBuf::from(HISTORY_FALLBACK_FILE),
        }
    }

    /// Console rendering used by the `history` command
    pub fn render_history(&self) -> String {
        if self.entries.is_empty() {
            return "No conversation history available.".to_string();
        }

        let mut out = format!("\nConversation History ({} entries):\n", self.entries.len());
        for (i, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!("{}. [{}]\n", i + 1, entry.timestamp));
            out.push_str(&format!("   Query: {}\n", entry.query));
            out.push_str(&format!("   Response: {}\n\n", preview(&entry.response, HISTORY_PREVIEW_CHARS)));
        }
        out
    }
}

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// First `max_chars` characters, with "..." appended when something was cut
fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}

fn format_append_block(entry: &Interaction) -> String {
    format!(
        "\n[{}]\nUser: {}\nBot: {}\n{}\n",
        entry.timestamp,
        entry.query,
        entry.response,
        separator()
    )
}

fn format_full_log(entries: &[Interaction]) -> String {
    let mut out = String::from("=== FULL AGENT CONVERSATION LOG ===\n\n");
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!("CONVERSATION {}:\n", i + 1));
        out.push_str(&format!("Time: {}\n", entry.timestamp));
        out.push_str(&format!("Query: {}\n", entry.query));
        out.push_str(&format!("Response: {}\n", entry.response));
        out.push_str(&separator());
        out.push_str("\n\n");
    }
    out
}

fn format_last_turn(entry: &Interaction) -> String {
    format!("Last Query: {}\nLast Response: {}\n", entry.query, entry.response)
}
