pub mod config;
pub mod discover;
pub mod error;
pub mod parse;
pub mod streaming;

pub use config::{Config, resolve_workspace_path};
pub use discover::resolve_log_target;
pub use error::{Error, Result};
pub use parse::{parse_line, read_messages, read_messages_from};
pub use streaming::{LogWatcher, StreamEvent};
