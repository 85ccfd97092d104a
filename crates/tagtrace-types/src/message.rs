use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::level::MessageLevel;

/// Tab used for messages that arrive without a tag.
pub const GENERAL_TAG: &str = "General";

/// A single log message as it flows through the viewer.
///
/// Maps 1:1 to a line in a log file. The tag groups messages into tabs;
/// untagged messages are routed to [`GENERAL_TAG`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMessage {
    /// Message timestamp (UTC). Lines without one get the read time.
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,

    /// Tab grouping label. `None` routes to the "General" tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Message severity
    #[serde(default)]
    pub level: MessageLevel,

    /// Message body, displayed as received (empty or malformed text included)
    #[serde(rename = "message")]
    pub text: String,
}

impl LogMessage {
    pub fn new(text: impl Into<String>, tag: Option<String>, level: MessageLevel) -> Self {
        Self {
            timestamp: Utc::now(),
            tag,
            level,
            text: text.into(),
        }
    }

    /// The tab this message routes to.
    pub fn routing_tag(&self) -> &str {
        self.tag.as_deref().unwrap_or(GENERAL_TAG)
    }
}
