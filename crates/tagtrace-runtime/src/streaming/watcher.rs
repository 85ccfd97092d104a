use std::collections::HashMap;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;

use notify::{Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use tagtrace_types::LogMessage;

use crate::discover::{is_log_file, newest_log_file};
use crate::error::Result;
use crate::parse::read_messages_from;

#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// Now following `path`
    Attached { path: PathBuf },
    /// New messages appended to the followed file
    Update {
        new_messages: Vec<LogMessage>,
        total: usize,
    },
    /// A newer log file appeared in the watched directory
    Rotated {
        old_path: PathBuf,
        new_path: PathBuf,
    },
    /// Nothing to follow yet
    Waiting { message: String },
    Error(String),
}

/// Follows a log file (or the newest log file in a directory) and streams
/// parsed messages over an mpsc channel.
///
/// Built on a polling watcher so it behaves the same on local and network
/// filesystems. Reads are incremental from a per-file byte offset; a file
/// that shrinks is treated as truncated and re-read from the start.
pub struct LogWatcher {
    _watcher: PollWatcher,
    rx: Receiver<StreamEvent>,
}

impl LogWatcher {
    /// Follow `target`. A file target follows that file only; a directory
    /// target attaches to its newest log file and rotates to newer ones as
    /// they appear.
    pub fn new(target: PathBuf, poll_interval: Duration) -> Result<Self> {
        let (tx_out, rx_out) = channel();
        let (tx_fs, rx_fs) = channel();

        let mut state = if target.is_dir() {
            WatchState::directory(target.clone())
        } else {
            WatchState::file(target.clone())
        };

        let watch_dir = if target.is_dir() {
            target.clone()
        } else {
            target.parent().unwrap_or(Path::new(".")).to_path_buf()
        };

        let config = notify::Config::default().with_poll_interval(poll_interval);

        let mut watcher = PollWatcher::new(
            move |res: std::result::Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let _ = tx_fs.send(event);
                }
            },
            config,
        )?;

        watcher.watch(&watch_dir, RecursiveMode::Recursive)?;

        state.attach_initial(&tx_out)?;

        let tx_worker = tx_out.clone();
        std::thread::Builder::new()
            .name("log-watcher-worker".to_string())
            .spawn(move || {
                while let Ok(event) = rx_fs.recv() {
                    if let Err(e) = state.handle_fs_event(&event, &tx_worker) {
                        let _ = tx_worker.send(StreamEvent::Error(format!(
                            "File system event handling error: {}",
                            e
                        )));
                    }
                }
            })?;

        Ok(Self {
            _watcher: watcher,
            rx: rx_out,
        })
    }

    pub fn receiver(&self) -> &Receiver<StreamEvent> {
        &self.rx
    }
}

struct WatchState {
    /// Directory being scanned for rotation; None when following a fixed file
    directory: Option<PathBuf>,
    current_file: Option<PathBuf>,
    /// Byte offset already consumed, per file
    offsets: HashMap<PathBuf, u64>,
    /// Messages emitted so far for the current file
    total: usize,
}

impl WatchState {
    fn file(path: PathBuf) -> Self {
        Self {
            directory: None,
            current_file: Some(path),
            offsets: HashMap::new(),
            total: 0,
        }
    }

    fn directory(dir: PathBuf) -> Self {
        Self {
            directory: Some(dir),
            current_file: None,
            offsets: HashMap::new(),
            total: 0,
        }
    }

    /// Pick the initial file and emit Attached + the initial snapshot.
    fn attach_initial(&mut self, tx: &Sender<StreamEvent>) -> Result<()> {
        if self.current_file.is_none()
            && let Some(dir) = &self.directory
        {
            self.current_file = newest_log_file(dir)?;
        }

        match self.current_file.clone() {
            Some(path) => {
                let _ = tx.send(StreamEvent::Attached { path: path.clone() });
                self.drain_file(&path, tx)?;
            }
            None => {
                let dir = self.directory.as_deref().unwrap_or(Path::new("."));
                let _ = tx.send(StreamEvent::Waiting {
                    message: format!("Waiting for log files under {}", dir.display()),
                });
            }
        }

        Ok(())
    }

    fn handle_fs_event(&mut self, event: &Event, tx: &Sender<StreamEvent>) -> Result<()> {
        match event.kind {
            EventKind::Create(_) => {
                for path in &event.paths {
                    self.consider_rotation(path, tx)?;
                }
            }
            EventKind::Modify(_) => {
                for path in &event.paths {
                    if self.current_file.as_deref() == Some(path.as_path()) {
                        self.drain_file(&path.clone(), tx)?;
                    } else if self.current_file.is_none() {
                        self.consider_rotation(path, tx)?;
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Switch to `candidate` if it is a log file in our directory and newer
    /// than what we currently follow.
    fn consider_rotation(&mut self, candidate: &Path, tx: &Sender<StreamEvent>) -> Result<()> {
        if self.directory.is_none() || !is_log_file(candidate) || !candidate.is_file() {
            return Ok(());
        }

        let should_switch = match &self.current_file {
            Some(current) => {
                let new_time = std::fs::metadata(candidate)?.modified()?;
                let current_time = std::fs::metadata(current)?.modified()?;
                new_time > current_time
            }
            None => true,
        };

        if !should_switch {
            return Ok(());
        }

        let old_path = self.current_file.replace(candidate.to_path_buf());
        self.offsets.insert(candidate.to_path_buf(), 0);
        self.total = 0;

        if let Some(old) = old_path {
            let _ = tx.send(StreamEvent::Rotated {
                old_path: old,
                new_path: candidate.to_path_buf(),
            });
        }
        let _ = tx.send(StreamEvent::Attached {
            path: candidate.to_path_buf(),
        });

        self.drain_file(&candidate.to_path_buf(), tx)
    }

    /// Read everything past the stored offset and emit it as an Update.
    fn drain_file(&mut self, path: &PathBuf, tx: &Sender<StreamEvent>) -> Result<()> {
        let offset = self.offsets.get(path).copied().unwrap_or(0);

        let mut file = std::fs::File::open(path)?;
        let len = file.metadata()?.len();

        // Truncated since last read: start over
        let offset = if len < offset { 0 } else { offset };

        if len == offset {
            return Ok(());
        }

        file.seek(SeekFrom::Start(offset))?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;

        // Hold back a trailing partial line until its newline arrives
        let consumed = match buf.rfind('\n') {
            Some(last_newline) => {
                buf.truncate(last_newline + 1);
                offset + buf.len() as u64
            }
            None => return Ok(()),
        };

        self.offsets.insert(path.clone(), consumed);

        let new_messages = read_messages_from(&buf);
        if !new_messages.is_empty() {
            self.total += new_messages.len();
            let _ = tx.send(StreamEvent::Update {
                new_messages,
                total: self.total,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::FileTime;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    const POLL: Duration = Duration::from_millis(100);
    const RECV: Duration = Duration::from_secs(5);

    fn expect_attached(rx: &Receiver<StreamEvent>, expected: &Path) {
        match rx.recv_timeout(RECV).expect("should receive Attached") {
            StreamEvent::Attached { path } => assert_eq!(path, expected),
            other => panic!("Expected Attached, got: {:?}", other),
        }
    }

    #[test]
    fn initial_snapshot_then_incremental_updates() {
        let temp = TempDir::new().unwrap();
        let log = temp.path().join("app.log");
        fs::write(&log, "2026-08-07T10:00:00Z INFO [A] one\n").unwrap();

        let watcher = LogWatcher::new(log.clone(), POLL).unwrap();
        let rx = watcher.receiver();

        expect_attached(rx, &log);

        match rx.recv_timeout(RECV).expect("should receive initial Update") {
            StreamEvent::Update { new_messages, total } => {
                assert_eq!(new_messages.len(), 1);
                assert_eq!(total, 1);
                assert_eq!(new_messages[0].text, "one");
            }
            other => panic!("Expected Update, got: {:?}", other),
        }

        let mut file = fs::OpenOptions::new().append(true).open(&log).unwrap();
        writeln!(file, "2026-08-07T10:00:01Z WARNING [A] two").unwrap();
        drop(file);

        match rx.recv_timeout(RECV).expect("should receive appended Update") {
            StreamEvent::Update { new_messages, total } => {
                assert_eq!(new_messages.len(), 1);
                assert_eq!(total, 2);
                assert_eq!(new_messages[0].text, "two");
            }
            other => panic!("Expected Update, got: {:?}", other),
        }
    }

    #[test]
    fn directory_target_rotates_to_newer_files() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first.log");
        fs::write(&first, "2026-08-07T10:00:00Z INFO [A] one\n").unwrap();
        let base = FileTime::from_unix_time(1_700_000_000, 0);
        filetime::set_file_mtime(&first, base).unwrap();

        let watcher = LogWatcher::new(temp.path().to_path_buf(), POLL).unwrap();
        let rx = watcher.receiver();

        expect_attached(rx, &first);
        match rx.recv_timeout(RECV).unwrap() {
            StreamEvent::Update { total, .. } => assert_eq!(total, 1),
            other => panic!("Expected Update, got: {:?}", other),
        }

        // A newer file appears
        std::thread::sleep(Duration::from_millis(300));
        let second = temp.path().join("second.log");
        fs::write(&second, "2026-08-07T10:00:02Z INFO [B] fresh\n").unwrap();
        filetime::set_file_mtime(&second, FileTime::from_unix_time(1_700_000_100, 0)).unwrap();

        match rx.recv_timeout(RECV).expect("should receive Rotated") {
            StreamEvent::Rotated { old_path, new_path } => {
                assert_eq!(old_path, first);
                assert_eq!(new_path, second);
            }
            other => panic!("Expected Rotated, got: {:?}", other),
        }

        expect_attached(rx, &second);
        match rx.recv_timeout(RECV).unwrap() {
            StreamEvent::Update { new_messages, total } => {
                assert_eq!(total, 1);
                assert_eq!(new_messages[0].routing_tag(), "B");
            }
            other => panic!("Expected Update, got: {:?}", other),
        }
    }

    #[test]
    fn empty_directory_reports_waiting() {
        let temp = TempDir::new().unwrap();
        let watcher = LogWatcher::new(temp.path().to_path_buf(), POLL).unwrap();

        match watcher.receiver().recv_timeout(RECV).unwrap() {
            StreamEvent::Waiting { .. } => {}
            other => panic!("Expected Waiting, got: {:?}", other),
        }
    }

    #[test]
    fn partial_lines_are_held_back_until_complete() {
        let temp = TempDir::new().unwrap();
        let log = temp.path().join("app.log");
        fs::write(&log, "2026-08-07T10:00:00Z INFO [A] one\n").unwrap();

        let watcher = LogWatcher::new(log.clone(), POLL).unwrap();
        let rx = watcher.receiver();

        expect_attached(rx, &log);
        let _ = rx.recv_timeout(RECV).unwrap(); // initial Update

        let mut file = fs::OpenOptions::new().append(true).open(&log).unwrap();
        write!(file, "2026-08-07T10:00:01Z INFO [A] par").unwrap();
        file.flush().unwrap();

        // No complete line yet, so no Update
        assert!(rx.recv_timeout(Duration::from_millis(600)).is_err());

        writeln!(file, "tial").unwrap();
        drop(file);

        match rx.recv_timeout(RECV).expect("should receive completed line") {
            StreamEvent::Update { new_messages, .. } => {
                assert_eq!(new_messages[0].text, "partial");
            }
            other => panic!("Expected Update, got: {:?}", other),
        }
    }
}
