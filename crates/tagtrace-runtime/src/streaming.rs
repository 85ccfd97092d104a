mod watcher;

pub use watcher::{LogWatcher, StreamEvent};
