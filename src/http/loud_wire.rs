//! Wire-level debugging via the `LOUD_WIRE` environment variable.
//!
//! When `LOUD_WIRE` is set to any value, request/response traffic is printed
//! to stderr: green `>>>` lines for outgoing requests, red `<<<` lines for
//! incoming responses, with request IDs for correlation. JSON bodies are
//! pretty-printed with colors; binary payloads and file fields are
//! summarized by length rather than dumped.
//!
//! # Usage
//!
//! ```bash
//! LOUD_WIRE=1 cargo run
//! ```

use crate::multipart::FormPart;
use colored::Colorize;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Request ID counter for correlating requests with responses
static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Cached check for whether LOUD_WIRE is enabled
static ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if LOUD_WIRE debugging is enabled.
///
/// The result is cached after the first check, so `LOUD_WIRE` must be set
/// before the first API call is made.
fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("LOUD_WIRE").is_ok())
}

/// Get the next request ID for correlation.
#[must_use]
pub(crate) fn next_request_id() -> usize {
    REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// One-line summary of a multipart body. File fields show their MIME type
/// and byte count instead of their content.
fn describe_parts(parts: &[FormPart]) -> String {
    parts
        .iter()
        .map(|part| match part {
            FormPart::Text { value, .. } => format!("{}={value}", part.name()),
            FormPart::File { mime, bytes, .. } => {
                format!("{}=<{mime}, {} bytes>", part.name(), bytes.len())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn log_request(request_id: usize, method: &str, url: &str, body: Option<&[FormPart]>) {
    if !is_enabled() {
        return;
    }
    eprintln!("{} [{request_id}] {method} {url}", ">>>".green().bold());
    if let Some(parts) = body {
        eprintln!("{} [{request_id}] {}", ">>>".green(), describe_parts(parts));
    }
}

pub(crate) fn log_response_status(request_id: usize, status: u16) {
    if !is_enabled() {
        return;
    }
    eprintln!("{} [{request_id}] HTTP {status}", "<<<".red().bold());
}

/// Print a textual response body, colorized when it parses as JSON.
pub(crate) fn log_response_body(request_id: usize, body: &str) {
    if !is_enabled() {
        return;
    }
    let rendered = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| colored_json::to_colored_json_auto(&value).ok())
        .unwrap_or_else(|| body.to_string());
    eprintln!("{} [{request_id}] {rendered}", "<<<".red());
}

/// Print a placeholder for a binary response body.
pub(crate) fn log_binary_body(request_id: usize, len: usize, content_type: Option<&str>) {
    if !is_enabled() {
        return;
    }
    let kind = content_type.unwrap_or("binary");
    eprintln!("{} [{request_id}] <{kind}, {len} bytes>", "<<<".red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_parts_hides_file_bytes() {
        let parts = [
            FormPart::File {
                name: "image",
                filename: "image.jpg",
                mime: "image/jpeg",
                bytes: vec![0; 2048],
            },
            FormPart::Text {
                name: "seed",
                value: "42".to_string(),
            },
        ];
        let summary = describe_parts(&parts);
        assert_eq!(summary, "image=<image/jpeg, 2048 bytes>, seed=42");
    }

    #[test]
    fn test_request_ids_are_monotonic() {
        let first = next_request_id();
        let second = next_request_id();
        assert!(second > first);
    }
}
