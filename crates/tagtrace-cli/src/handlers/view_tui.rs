//! TUI view handler
//!
//! Owns the domain state (the tag-routed `MessageLog`), feeds it from the
//! file or the live watcher, and ships `ScreenViewModel`s to the renderer
//! thread. Renderer signals (close/clear tab, quit) come back over a second
//! channel.

use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use tagtrace_engine::MessageLog;
use tagtrace_runtime::{LogWatcher, StreamEvent, read_messages, resolve_log_target};

use super::view::{ViewOptions, admit};
use crate::presentation::presenter::build_screen;
use crate::presentation::renderers::{RendererSignal, TuiEvent, TuiRenderer};

pub fn handle(path: &Path, options: &ViewOptions) -> Result<()> {
    let target = resolve_log_target(path)?;
    let mut log = MessageLog::new(options.capacity);
    let mut source = target.display().to_string();
    let mut notice: Option<String> = None;

    let watcher = if options.follow {
        // Directories keep rotating to newer files; the initial snapshot
        // arrives through the watcher as well
        let watch_target = if path.is_dir() {
            path.to_path_buf()
        } else {
            target.clone()
        };
        Some(LogWatcher::new(watch_target, options.poll_interval)?)
    } else {
        for msg in read_messages(&target)? {
            if admit(&msg, options) {
                log.append(msg);
            }
        }
        None
    };

    let (tx_ui, rx_ui) = mpsc::channel();
    let (signal_tx, signal_rx) = mpsc::channel();

    let renderer = TuiRenderer::new().with_signal_sender(signal_tx);
    let tui_handle = thread::spawn(move || renderer.run(rx_ui));

    push_update(&tx_ui, &log, &source, options.follow, &notice);

    loop {
        match signal_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(RendererSignal::Quit) => break,
            Ok(RendererSignal::CloseTab(index)) => {
                log.close_tab(index);
                push_update(&tx_ui, &log, &source, options.follow, &notice);
            }
            Ok(RendererSignal::ClearTab(index)) => {
                log.clear_tab(index);
                push_update(&tx_ui, &log, &source, options.follow, &notice);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if let Some(watcher) = &watcher {
            let mut dirty = false;
            while let Ok(event) = watcher.receiver().try_recv() {
                match event {
                    StreamEvent::Attached { path } => {
                        source = path.display().to_string();
                        notice = None;
                        dirty = true;
                    }
                    StreamEvent::Update { new_messages, .. } => {
                        for msg in new_messages {
                            if admit(&msg, options) {
                                log.append(msg);
                                dirty = true;
                            }
                        }
                    }
                    // Attached follows with the new path; tabs persist
                    StreamEvent::Rotated { .. } => {}
                    StreamEvent::Waiting { message } => {
                        notice = Some(message);
                        dirty = true;
                    }
                    StreamEvent::Error(message) => {
                        let _ = tx_ui.send(TuiEvent::Error(message));
                    }
                }
            }
            if dirty {
                push_update(&tx_ui, &log, &source, options.follow, &notice);
            }
        }
    }

    drop(tx_ui);
    match tui_handle.join() {
        Ok(result) => result,
        Err(e) => {
            eprintln!("TUI thread panicked: {:?}", e);
            Ok(())
        }
    }
}

fn push_update(
    tx: &Sender<TuiEvent>,
    log: &MessageLog,
    source: &str,
    follow: bool,
    notice: &Option<String>,
) {
    // Ignore errors if the renderer has quit
    let _ = tx.send(TuiEvent::Update(Box::new(build_screen(
        log,
        source,
        follow,
        notice.clone(),
    ))));
}
