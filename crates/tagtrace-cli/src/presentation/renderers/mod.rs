mod tui;

pub use tui::{RendererSignal, TuiEvent, TuiRenderer};
