use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::Result;
use owo_colors::OwoColorize;

use tagtrace_runtime::{LogWatcher, StreamEvent, read_messages, resolve_log_target};
use tagtrace_types::{LogMessage, MessageLevel};

use super::view::{ViewOptions, admit};

pub fn handle(path: &Path, options: &ViewOptions) -> Result<()> {
    let target = resolve_log_target(path)?;

    if !options.follow {
        for msg in read_messages(&target)? {
            if admit(&msg, options) {
                print_message(&msg, options.color);
            }
        }
        return Ok(());
    }

    // Ctrl-C flips the flag so the loop can exit and flush cleanly
    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))?;
    }

    // Directories keep rotating to newer files; single files are followed as-is
    let watch_target = if path.is_dir() {
        path.to_path_buf()
    } else {
        target
    };
    let watcher = LogWatcher::new(watch_target, options.poll_interval)?;
    let rx = watcher.receiver();

    while running.load(Ordering::SeqCst) {
        match rx.recv_timeout(Duration::from_millis(200)) {
            Ok(StreamEvent::Attached { path }) => {
                print_notice(&format!("Following {}", path.display()), options.color);
            }
            Ok(StreamEvent::Update { new_messages, .. }) => {
                for msg in &new_messages {
                    if admit(msg, options) {
                        print_message(msg, options.color);
                    }
                }
            }
            Ok(StreamEvent::Rotated { new_path, .. }) => {
                print_notice(&format!("Rotated to {}", new_path.display()), options.color);
            }
            Ok(StreamEvent::Waiting { message }) => {
                print_notice(&message, options.color);
            }
            Ok(StreamEvent::Error(message)) => {
                eprintln!("Error: {}", message);
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

fn print_notice(text: &str, color: bool) {
    if color {
        eprintln!("{}", text.dimmed());
    } else {
        eprintln!("{}", text);
    }
}

fn print_message(msg: &LogMessage, color: bool) {
    let time = msg.timestamp.format("%H:%M:%S").to_string();
    let tag = msg.routing_tag();
    let level_token = format!("{:<8}", msg.level.as_str().to_uppercase());

    // Clamp the text before colorizing so escape sequences never get cut
    let prefix_width = time.len() + level_token.len() + tag.len() + 5;
    let text = clamp_to_terminal(&msg.text, prefix_width);

    let level_token = if color {
        match msg.level {
            MessageLevel::Critical => level_token.red().to_string(),
            MessageLevel::Warning => level_token.yellow().to_string(),
            MessageLevel::Success => level_token.green().to_string(),
            MessageLevel::Info => level_token.dimmed().to_string(),
        }
    } else {
        level_token
    };

    println!("{} {} [{}] {}", time, level_token, tag, text);
}

/// Keep interactive output on one physical line; piped output is untouched.
fn clamp_to_terminal(text: &str, prefix_width: usize) -> String {
    match terminal_size::terminal_size() {
        Some((terminal_size::Width(width), _)) => {
            let budget = (width as usize).saturating_sub(prefix_width);
            text.chars().take(budget).collect()
        }
        None => text.to_string(),
    }
}
