mod message_list;
mod status_bar;
mod tabs;

pub use message_list::MessageListView;
pub use status_bar::StatusBarView;
pub use tabs::TabBarView;

use ratatui::style::Color;
use tagtrace_types::MessageLevel;

pub(crate) fn level_to_color(level: MessageLevel) -> Color {
    match level {
        MessageLevel::Info => Color::Gray,
        MessageLevel::Success => Color::Green,
        MessageLevel::Warning => Color::Yellow,
        MessageLevel::Critical => Color::Red,
    }
}
