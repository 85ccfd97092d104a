//! Message List View Component
//!
//! Scrollable message list for the active tab.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::level_to_color;
use crate::presentation::view_models::TabViewModel;

pub struct MessageListView<'a> {
    tab: Option<&'a TabViewModel>,
    scroll: u16,
    /// Pin the view to the newest message, overriding manual scroll
    follow_tail: bool,
}

impl<'a> MessageListView<'a> {
    pub fn new(tab: Option<&'a TabViewModel>, scroll: u16, follow_tail: bool) -> Self {
        Self {
            tab,
            scroll,
            follow_tail,
        }
    }
}

impl<'a> Widget for MessageListView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(tab) = self.tab else {
            Paragraph::new("No messages yet")
                .style(Style::default().add_modifier(Modifier::DIM))
                .block(Block::default().borders(Borders::ALL))
                .render(area, buf);
            return;
        };

        let mut title = format!("{} - {} messages", tab.tag, tab.count);
        if tab.dropped > 0 {
            title.push_str(&format!(" ({} dropped)", tab.dropped));
        }
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner_height = block.inner(area).height;

        let lines: Vec<Line> = tab
            .lines
            .iter()
            .map(|line| {
                Line::from(vec![
                    Span::styled(
                        line.time.clone(),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        format!("{:<8}", line.level.as_str().to_uppercase()),
                        Style::default().fg(level_to_color(line.level)),
                    ),
                    Span::raw(" "),
                    Span::raw(line.text.clone()),
                ])
            })
            .collect();

        let scroll = if self.follow_tail {
            (lines.len() as u16).saturating_sub(inner_height)
        } else {
            self.scroll
        };

        Paragraph::new(lines)
            .scroll((scroll, 0))
            .block(block)
            .render(area, buf);
    }
}
