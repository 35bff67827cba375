use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{get_logs_dir, safe_truncate};

const MAX_CONSOLE_BODY_CHARS: usize = 5000;

fn mask_key(api_key: &str) -> String {
    format!("{}***", api_key.chars().take(10).collect::<String>())
}

/// Masked header line for the credential a backend sends, if any.
/// Gemini uses `x-goog-api-key`, OpenAI-compatible servers use `Authorization`.
fn auth_header_line(auth_header: &str, api_key: &str) -> Option<String> {
    (!api_key.is_empty()).then(|| format!("{}: {}", auth_header, mask_key(api_key)))
}

fn describe_url(url: &str) -> Vec<(&'static str, String)> {
    match reqwest::Url::parse(url) {
        Ok(parsed_url) => {
            let port = parsed_url.port().map(|p| p.to_string()).unwrap_or_else(|| {
                if parsed_url.scheme() == "https" { "443 (default)".to_string() } else { "80 (default)".to_string() }
            });
            vec![
                ("URL", url.to_string()),
                ("Host", parsed_url.host_str().unwrap_or("unknown").to_string()),
                ("Port", port),
                ("Scheme", parsed_url.scheme().to_string()),
            ]
        }
        Err(_) => vec![("URL", url.to_string())],
    }
}

fn pretty_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| serde_json::to_string_pretty(&json).ok())
        .unwrap_or_else(|| body.to_string())
}

fn print_truncated(text: &str) {
    if text.chars().count() > MAX_CONSOLE_BODY_CHARS {
        println!("{}", safe_truncate(text, MAX_CONSOLE_BODY_CHARS));
        println!("\n{}", format!("... (truncated, total {} bytes)", text.len()).bright_black());
    } else {
        println!("{}", text);
    }
}

fn model_file_tag(model: &str) -> String {
    model.replace(&['/', ':'][..], "-")
}

/// Log HTTP request details for debugging (console output)
pub fn log_request(url: &str, request: &serde_json::Value, auth_header: &str, api_key: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    for (label, value) in describe_url(url) {
        println!("{}: {}", label.bright_yellow(), value);
    }

    println!("\n{}", "Headers:".bright_yellow());
    println!("  Content-Type: application/json");
    if let Some(line) = auth_header_line(auth_header, api_key) {
        println!("  {}", line);
    }

    println!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(request) {
        Ok(json) => print_truncated(&json),
        Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP request to file for persistent debugging.
/// Returns the timestamp used in the file name so the response can be paired with it.
pub fn log_request_to_file(
    url: &str,
    request: &serde_json::Value,
    model: &str,
    auth_header: &str,
    api_key: &str,
) -> Result<u64> {
    let logs_dir = get_logs_dir()?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    let filename = format!("req-{}-{}.txt", timestamp, model_file_tag(model));
    let file_path = logs_dir.join(&filename);

    let mut log_content = String::new();
    log_content.push_str("HTTP REQUEST LOG\n");
    log_content.push_str("================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", timestamp));
    log_content.push_str(&format!("Model: {}\n\n", model));

    for (label, value) in describe_url(url) {
        log_content.push_str(&format!("{}: {}\n", label, value));
    }

    log_content.push_str("\nHeaders:\n");
    log_content.push_str("  Content-Type: application/json\n");
    if let Some(line) = auth_header_line(auth_header, api_key) {
        log_content.push_str(&format!("  {}\n", line));
    }

    log_content.push_str("\nRequest Body:\n");
    match serde_json::to_string_pretty(request) {
        Ok(json) => {
            log_content.push_str(&json);
            log_content.push('\n');
        }
        Err(e) => {
            log_content.push_str(&format!("Error serializing request: {}\n", e));
        }
    }

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write request log to {}", file_path.display()))?;

    println!("{}", format!("📝 Request logged to: {}", filename).bright_blue());

    Ok(timestamp)
}

/// Log HTTP response to file for persistent debugging
pub fn log_response_to_file(
    status: &reqwest::StatusCode,
    headers: &reqwest::header::HeaderMap,
    body: &str,
    request_timestamp: u64,
    model: &str,
) -> Result<()> {
    let logs_dir = get_logs_dir()?;

    let filename = format!("resp-{}-{}.txt", request_timestamp, model_file_tag(model));
    let file_path = logs_dir.join(&filename);

    let mut log_content = String::new();
    log_content.push_str("HTTP RESPONSE LOG\n");
    log_content.push_str("=================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", request_timestamp));
    log_content.push_str(&format!("Model: {}\n\n", model));
    log_content.push_str(&format!(
        "Status: {} {}\n\n",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    ));

    log_content.push_str("Headers:\n");
    for (name, value) in headers.iter() {
        if let Ok(val_str) = value.to_str() {
            log_content.push_str(&format!("  {}: {}\n", name.as_str(), val_str));
        }
    }

    log_content.push_str("\nResponse Body:\n");
    log_content.push_str(&pretty_body(body));
    log_content.push('\n');

    log_content.push_str("\n---\n");
    log_content.push_str(&format!("Response Size: {} bytes\n", body.len()));

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write response log to {}", file_path.display()))?;

    println!("{}", format!("📄 Response logged to: {}", filename).bright_blue());

    Ok(())
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(status: &reqwest::StatusCode, headers: &reqwest::header::HeaderMap, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_green());
    println!("{}", "📥 HTTP RESPONSE DEBUG".bright_green().bold());
    println!("{}", "═".repeat(80).bright_green());

    println!(
        "{}: {} {}",
        "Status".bright_yellow(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    println!("\n{}", "Headers:".bright_yellow());
    for (name, value) in headers.iter() {
        if let Ok(val_str) = value.to_str() {
            println!("  {}: {}", name.as_str().bright_white(), val_str);
        }
    }

    println!("\n{}", "Response Body:".bright_yellow());
    print_truncated(&pretty_body(body));

    println!("{}", "═".repeat(80).bright_green());
    println!();
}
