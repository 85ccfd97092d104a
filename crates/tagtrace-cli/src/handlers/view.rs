use std::time::Duration;

use regex::Regex;

use tagtrace_types::{LogMessage, MessageLevel};

/// Options shared by the console and TUI viewers.
pub struct ViewOptions {
    pub follow: bool,
    pub min_level: MessageLevel,
    pub tag_filter: Option<Regex>,
    /// Per-tab buffer bound; 0 disables eviction
    pub capacity: usize,
    pub poll_interval: Duration,
    pub color: bool,
}

/// Display filter: level threshold plus the optional tag pattern.
pub fn admit(msg: &LogMessage, options: &ViewOptions) -> bool {
    if msg.level < options.min_level {
        return false;
    }
    match &options.tag_filter {
        Some(pattern) => pattern.is_match(msg.routing_tag()),
        None => true,
    }
}
