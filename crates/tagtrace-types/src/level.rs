use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Severity of a log message.
///
/// Declaration order doubles as severity order so that `--min-level` filtering
/// is a plain `>=` comparison: `Info < Success < Warning < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Critical,
}

impl MessageLevel {
    /// All levels, severity-ascending.
    pub const ALL: [MessageLevel; 4] = [
        MessageLevel::Info,
        MessageLevel::Success,
        MessageLevel::Warning,
        MessageLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageLevel::Info => "info",
            MessageLevel::Success => "success",
            MessageLevel::Warning => "warning",
            MessageLevel::Critical => "critical",
        }
    }
}

impl Default for MessageLevel {
    fn default() -> Self {
        MessageLevel::Info
    }
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(MessageLevel::Info),
            "success" => Ok(MessageLevel::Success),
            // Accept the spellings commonly found in log files
            "warning" | "warn" => Ok(MessageLevel::Warning),
            "critical" | "error" => Ok(MessageLevel::Critical),
            other => Err(Error::Parse(format!("unknown message level: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(MessageLevel::Info < MessageLevel::Warning);
        assert!(MessageLevel::Warning < MessageLevel::Critical);
        assert!(MessageLevel::Info < MessageLevel::Success);
    }

    #[test]
    fn parses_common_spellings() {
        assert_eq!("warn".parse::<MessageLevel>().unwrap(), MessageLevel::Warning);
        assert_eq!("ERROR".parse::<MessageLevel>().unwrap(), MessageLevel::Critical);
        assert!("verbose".parse::<MessageLevel>().is_err());
    }

    #[test]
    fn serde_roundtrip_is_lowercase() {
        let json = serde_json::to_string(&MessageLevel::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let back: MessageLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MessageLevel::Warning);
    }
}
