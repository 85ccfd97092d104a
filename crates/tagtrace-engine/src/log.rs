//! Tag-routed message log.
//!
//! The in-memory model behind the viewer: one tab per distinct tag, created
//! on first occurrence, in first-occurrence order. Tabs grow until closed by
//! the user; buffers are bounded so a chatty tag cannot grow without limit.

use std::collections::VecDeque;

use tagtrace_types::{LogMessage, MessageLevel};

/// A single tab: one tag's messages in arrival order.
#[derive(Debug, Clone)]
pub struct TabBuffer {
    tag: String,
    messages: VecDeque<LogMessage>,
    capacity: usize,
    dropped: usize,
    level_counts: [usize; MessageLevel::ALL.len()],
}

impl TabBuffer {
    fn new(tag: String, capacity: usize) -> Self {
        Self {
            tag,
            messages: VecDeque::new(),
            capacity,
            dropped: 0,
            level_counts: [0; MessageLevel::ALL.len()],
        }
    }

    fn push(&mut self, msg: LogMessage) {
        self.level_counts[msg.level as usize] += 1;
        self.messages.push_back(msg);

        if self.capacity > 0 && self.messages.len() > self.capacity
            && let Some(evicted) = self.messages.pop_front()
        {
            self.level_counts[evicted.level as usize] -= 1;
            self.dropped += 1;
        }
    }

    fn clear(&mut self) {
        self.messages.clear();
        self.level_counts = [0; MessageLevel::ALL.len()];
        self.dropped = 0;
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn messages(&self) -> impl Iterator<Item = &LogMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages evicted from this tab since it was created or last cleared.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn count_for(&self, level: MessageLevel) -> usize {
        self.level_counts[level as usize]
    }

    /// Highest severity currently buffered in this tab, if any.
    pub fn worst_level(&self) -> Option<MessageLevel> {
        MessageLevel::ALL
            .into_iter()
            .rev()
            .find(|level| self.count_for(*level) > 0)
    }
}

/// Routes messages to per-tag tabs.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    tabs: Vec<TabBuffer>,
    capacity: usize,
}

impl MessageLog {
    /// `capacity` bounds each tab's buffer; 0 means unbounded.
    pub fn new(capacity: usize) -> Self {
        Self {
            tabs: Vec::new(),
            capacity,
        }
    }

    /// Append a message to its tag's tab, creating the tab on first
    /// occurrence. Returns the index of the tab the message landed in.
    pub fn append(&mut self, msg: LogMessage) -> usize {
        let tag = msg.routing_tag();

        let index = match self.tabs.iter().position(|tab| tab.tag == tag) {
            Some(index) => index,
            None => {
                self.tabs.push(TabBuffer::new(tag.to_string(), self.capacity));
                self.tabs.len() - 1
            }
        };

        self.tabs[index].push(msg);
        index
    }

    /// Remove a tab entirely. Later messages with the same tag re-create it
    /// at the end of the tab list.
    pub fn close_tab(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.tabs.remove(index);
            true
        } else {
            false
        }
    }

    /// Empty a tab without removing it.
    pub fn clear_tab(&mut self, index: usize) -> bool {
        match self.tabs.get_mut(index) {
            Some(tab) => {
                tab.clear();
                true
            }
            None => false,
        }
    }

    pub fn tabs(&self) -> &[TabBuffer] {
        &self.tabs
    }

    pub fn tab(&self, index: usize) -> Option<&TabBuffer> {
        self.tabs.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Messages currently buffered across all tabs.
    pub fn total_count(&self) -> usize {
        self.tabs.iter().map(TabBuffer::len).sum()
    }

    pub fn count_for(&self, level: MessageLevel) -> usize {
        self.tabs.iter().map(|tab| tab.count_for(level)).sum()
    }
}
