use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

#[derive(Serialize)]
struct LogEntry {
    timestamp: String, // ISO‑8601 Local time
    session_id: String,
    role: String,
    content: String,
    model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    agent_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_used: Option<String>,
}

/// JSONL session log: one line per message exchanged in a session
pub struct ConversationLogger {
    file_path: PathBuf,
    session_id: Uuid,
    agent_level: Option<u8>,
    file: Option<tokio::fs::File>,
}

impl ConversationLogger {
    /// Create a new logger; generates the file name based on the current local time.
    pub async fn new(workspace: &Path, agent_level: Option<u8>) -> Result<Self> {
        let logs_dir = workspace.join("logs");
        fs::create_dir_all(&logs_dir).await?;

        let now_local = Local::now();
        let filename = format!("agentlab-{}.jsonl", now_local.format("%Y-%m-%d-%H%M%S"));
        let file_path = logs_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;

        Ok(Self {
            file_path,
            session_id: Uuid::new_v4(),
            agent_level,
            file: Some(file),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Append a single log entry.
    pub async fn log(&mut self, role: &str, content: &str, model: Option<&str>) {
        self.log_with_tool(role, content, model, None).await;
    }

    /// Append a log entry noting which local tool produced the answer
    pub async fn log_with_tool(&mut self, role: &str, content: &str, model: Option<&str>, tool_used: Option<&str>) {
        let entry = LogEntry {
            timestamp: Local::now().to_rfc3339(),
            session_id: self.session_id.to_string(),
            role: role.to_string(),
            content: content.to_string(),
            model: model.map(|s| s.to_string()),
            agent_level: self.agent_level,
            tool_used: tool_used.map(|s| s.to_string()),
        };
        if let Some(file) = &mut self.file {
            if let Ok(json) = serde_json::to_string(&entry) {
                if let Err(e) = file.write_all(json.as_bytes()).await {
                    eprintln!("[Logging error] {}", e);
                } else if let Err(e) = file.write_all(b"\n").await {
                    eprintln!("[Logging error] {}", e);
                } else {
                    let _ = file.flush().await;
                }
            }
        }
    }

    /// Close the logger (explicit drop). Called on graceful shutdown.
    pub async fn shutdown(&mut self) {
        if let Some(file) = self.file.take() {
            let _ = file.sync_all().await;
        }
    }
}
