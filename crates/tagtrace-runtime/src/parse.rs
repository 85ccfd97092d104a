//! Log-line parsing.
//!
//! Two line formats are understood, detected per line:
//!
//! 1. JSONL: `{"timestamp": "...", "tag": "...", "level": "...", "message": "..."}`
//! 2. Plain text: `<RFC3339> <LEVEL> [<tag>] <message>` (tag optional)
//!
//! Parsing never fails a whole file: a line that matches neither format is
//! kept verbatim as an info-level message with no tag. Blank lines are
//! skipped.

use std::path::Path;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tagtrace_types::{LogMessage, MessageLevel};

use crate::error::Result;

static PLAIN_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<ts>\S+)\s+(?P<level>[A-Za-z]+)\s+(?:\[(?P<tag>[^\]]*)\]\s*)?(?P<msg>.*)$")
        .expect("plain line pattern is valid")
});

/// Parse one log line. `None` for blank lines.
pub fn parse_line(line: &str) -> Option<LogMessage> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if trimmed.trim().is_empty() {
        return None;
    }

    if trimmed.trim_start().starts_with('{')
        && let Ok(msg) = serde_json::from_str::<LogMessage>(trimmed)
    {
        return Some(msg);
    }

    Some(parse_plain(trimmed).unwrap_or_else(|| LogMessage::new(trimmed, None, MessageLevel::Info)))
}

/// Plain-text lines need a parsable timestamp and level to count as
/// structured; anything else falls back to the whole-line message.
fn parse_plain(line: &str) -> Option<LogMessage> {
    let captures = PLAIN_LINE.captures(line)?;

    let timestamp = DateTime::parse_from_rfc3339(captures.name("ts")?.as_str())
        .ok()?
        .with_timezone(&Utc);
    let level: MessageLevel = captures.name("level")?.as_str().parse().ok()?;
    let tag = captures
        .name("tag")
        .map(|m| m.as_str().to_string())
        .filter(|t| !t.is_empty());
    let text = captures.name("msg")?.as_str().to_string();

    Some(LogMessage {
        timestamp,
        tag,
        level,
        text,
    })
}

/// Parse every message in `content`, in order.
pub fn read_messages_from(content: &str) -> Vec<LogMessage> {
    content.lines().filter_map(parse_line).collect()
}

/// Read and parse a whole log file.
pub fn read_messages(path: &Path) -> Result<Vec<LogMessage>> {
    let content = std::fs::read_to_string(path)?;
    Ok(read_messages_from(&content))
}
