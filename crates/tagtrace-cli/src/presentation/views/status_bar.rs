//! Status Bar View Component
//!
//! Source path, follow state, per-level totals, and key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::level_to_color;
use crate::presentation::view_models::ScreenViewModel;

const KEY_HINTS: &str = "q quit | tab switch | x close | c clear | f follow";

pub struct StatusBarView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            self.model.source.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];

        if self.model.follow {
            spans.push(Span::styled(
                " [following]",
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        if let Some(notice) = &self.model.notice {
            spans.push(Span::styled(
                format!("  {}", notice),
                Style::default().add_modifier(Modifier::ITALIC),
            ));
        }

        spans.push(Span::raw("  "));
        for (level, count) in &self.model.level_totals {
            if *count == 0 {
                continue;
            }
            spans.push(Span::styled(
                format!("{}:{} ", level.as_str(), count),
                Style::default().fg(level_to_color(*level)),
            ));
        }

        spans.push(Span::styled(
            format!("  {}", KEY_HINTS),
            Style::default().add_modifier(Modifier::DIM),
        ));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
