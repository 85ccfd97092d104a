//! View models for the TUI viewer.
//!
//! Pure data handed from the handler to the renderer over a channel. The
//! renderer owns UI state (active tab, scroll); these structs own everything
//! it displays.

use tagtrace_types::MessageLevel;

#[derive(Debug, Clone)]
pub struct ScreenViewModel {
    /// Path of the file currently displayed
    pub source: String,
    pub follow: bool,
    pub tabs: Vec<TabViewModel>,
    pub total_messages: usize,
    /// (level, buffered message count), severity-ascending
    pub level_totals: Vec<(MessageLevel, usize)>,
    /// Transient state line (e.g. waiting for log files)
    pub notice: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TabViewModel {
    pub tag: String,
    pub count: usize,
    pub dropped: usize,
    pub worst_level: Option<MessageLevel>,
    pub lines: Vec<MessageLineViewModel>,
}

#[derive(Debug, Clone)]
pub struct MessageLineViewModel {
    pub time: String,
    pub level: MessageLevel,
    pub text: String,
}
