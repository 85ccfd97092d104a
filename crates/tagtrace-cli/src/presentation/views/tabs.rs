//! Tab Bar View Component
//!
//! One tab per tag, in first-occurrence order, with buffered message counts.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs, Widget},
};

use super::level_to_color;
use crate::presentation::view_models::TabViewModel;

pub struct TabBarView<'a> {
    tabs: &'a [TabViewModel],
    active: usize,
}

impl<'a> TabBarView<'a> {
    pub fn new(tabs: &'a [TabViewModel], active: usize) -> Self {
        Self { tabs, active }
    }
}

impl<'a> Widget for TabBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = self
            .tabs
            .iter()
            .map(|tab| {
                let tag_style = match tab.worst_level {
                    Some(level) => Style::default().fg(level_to_color(level)),
                    None => Style::default(),
                };
                Line::from(vec![
                    Span::styled(tab.tag.clone(), tag_style),
                    Span::styled(
                        format!(" ({})", tab.count),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                ])
            })
            .collect();

        Tabs::new(titles)
            .select(self.active)
            .block(Block::default().borders(Borders::BOTTOM))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .render(area, buf);
    }
}
