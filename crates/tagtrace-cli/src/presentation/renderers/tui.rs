//! TUI Renderer for the view command
//!
//! Receives `ScreenViewModel` updates via channel and renders them with
//! Ratatui. The renderer owns UI state only (active tab, scroll position,
//! follow-tail flag); domain mutations (close/clear tab) are sent back to the
//! handler as signals.

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::{MessageListView, StatusBarView, TabBarView};

/// Events sent from handler to renderer
pub enum TuiEvent {
    Update(Box<ScreenViewModel>),
    Error(String),
}

/// User interactions the renderer cannot resolve on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererSignal {
    CloseTab(usize),
    ClearTab(usize),
    Quit,
}

pub struct TuiRenderer {
    current_screen: Option<ScreenViewModel>,
    active_tab: usize,
    scroll: u16,
    follow_tail: bool,
    should_quit: bool,
    error_message: Option<String>,
    signal_tx: Option<Sender<RendererSignal>>,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            current_screen: None,
            active_tab: 0,
            scroll: 0,
            follow_tail: true,
            should_quit: false,
            error_message: None,
            signal_tx: None,
        }
    }

    pub fn with_signal_sender(mut self, tx: Sender<RendererSignal>) -> Self {
        self.signal_tx = Some(tx);
        self
    }

    /// Main entry: set up the terminal, run the event loop, restore the
    /// terminal even when the loop errors.
    pub fn run(mut self, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<TuiEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            // Handle events with timeout (allows periodic redraws)
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }

            // Check for updates from the handler (non-blocking)
            while let Ok(tui_event) = rx.try_recv() {
                match tui_event {
                    TuiEvent::Update(screen) => {
                        self.current_screen = Some(*screen);
                        self.clamp_active_tab();
                        self.error_message = None;
                    }
                    TuiEvent::Error(msg) => {
                        self.error_message = Some(msg);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn tab_count(&self) -> usize {
        self.current_screen
            .as_ref()
            .map(|screen| screen.tabs.len())
            .unwrap_or(0)
    }

    fn clamp_active_tab(&mut self) {
        let count = self.tab_count();
        if self.active_tab >= count {
            self.active_tab = count.saturating_sub(1);
        }
    }

    fn select_tab(&mut self, index: usize) {
        self.active_tab = index;
        self.scroll = 0;
        self.follow_tail = true;
    }

    fn send_signal(&self, signal: RendererSignal) {
        if let Some(tx) = &self.signal_tx {
            let _ = tx.send(signal);
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        let tabs = self.tab_count();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.send_signal(RendererSignal::Quit);
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') if tabs > 0 => {
                self.select_tab((self.active_tab + 1) % tabs);
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') if tabs > 0 => {
                self.select_tab((self.active_tab + tabs - 1) % tabs);
            }
            KeyCode::Char('x') if tabs > 0 => {
                self.send_signal(RendererSignal::CloseTab(self.active_tab));
            }
            KeyCode::Char('c') if tabs > 0 => {
                self.send_signal(RendererSignal::ClearTab(self.active_tab));
            }
            KeyCode::Char('f') => {
                self.follow_tail = !self.follow_tail;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                self.follow_tail = false;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                self.follow_tail = false;
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                self.follow_tail = false;
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                self.follow_tail = false;
            }
            KeyCode::Home => {
                self.scroll = 0;
                self.follow_tail = false;
            }
            KeyCode::End => {
                self.follow_tail = true;
            }
            _ => {}
        }
    }

    fn render(&self, f: &mut Frame) {
        let Some(screen) = &self.current_screen else {
            f.render_widget(
                Paragraph::new("Loading...").style(Style::default().add_modifier(Modifier::DIM)),
                f.area(),
            );
            return;
        };

        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

        f.render_widget(TabBarView::new(&screen.tabs, self.active_tab), chunks[0]);
        f.render_widget(
            MessageListView::new(
                screen.tabs.get(self.active_tab),
                self.scroll,
                self.follow_tail,
            ),
            chunks[1],
        );

        if let Some(error) = &self.error_message {
            f.render_widget(
                Paragraph::new(error.as_str())
                    .style(Style::default().fg(ratatui::style::Color::Red)),
                chunks[2],
            );
        } else {
            f.render_widget(StatusBarView::new(screen), chunks[2]);
        }
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}
