use crate::Result;
use notify::{Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;
use stint_types::SessionEvent;

/// Events emitted while following a sessions directory.
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// Now following this log file.
    Attached { path: PathBuf },

    /// A session event appended to the followed log.
    Event(SessionEvent),

    /// A later log file appeared; following switched over to it.
    Rotated { old_path: PathBuf, new_path: PathBuf },

    /// Nothing to follow yet.
    Waiting { message: String },

    Error(String),
}

struct WatchState {
    current: Option<PathBuf>,
    /// Lines already emitted per file, so appends only yield new events.
    consumed_lines: HashMap<PathBuf, usize>,
}

/// Follows the latest session log in a directory and streams appended
/// events over a channel.
///
/// Attachment follows the reader convention throughout the toolkit: the
/// current log is the lexicographically last `.log` filename. When a
/// later-sorting file appears, the watcher rotates onto it.
pub struct SessionWatcher {
    _watcher: PollWatcher,
    rx: Receiver<WatchEvent>,
}

impl SessionWatcher {
    pub fn new(sessions_dir: PathBuf) -> Result<Self> {
        let (tx_out, rx_out) = channel();
        let (tx_fs, rx_fs) = channel();

        // The poll watcher needs an existing directory to attach to.
        std::fs::create_dir_all(&sessions_dir)?;

        let mut state = WatchState {
            current: None,
            consumed_lines: HashMap::new(),
        };

        match find_latest_log(&sessions_dir) {
            Some(path) => {
                state.current = Some(path.clone());
                let _ = tx_out.send(WatchEvent::Attached { path: path.clone() });
                emit_new_events(&path, &mut state.consumed_lines, &tx_out);
            }
            None => {
                let _ = tx_out.send(WatchEvent::Waiting {
                    message: "No session logs found. Waiting for a session to start...".to_string(),
                });
            }
        }

        let config = notify::Config::default().with_poll_interval(Duration::from_millis(500));

        let mut watcher = PollWatcher::new(
            move |res: std::result::Result<Event, _>| {
                if let Ok(event) = res {
                    let _ = tx_fs.send(event);
                }
            },
            config,
        )?;

        watcher.watch(&sessions_dir, RecursiveMode::Recursive)?;

        let tx_worker = tx_out.clone();
        std::thread::Builder::new()
            .name("session-watcher-worker".to_string())
            .spawn(move || {
                while let Ok(event) = rx_fs.recv() {
                    handle_fs_event(&event, &mut state, &tx_worker);
                }
            })?;

        Ok(Self {
            _watcher: watcher,
            rx: rx_out,
        })
    }

    pub fn receiver(&self) -> &Receiver<WatchEvent> {
        &self.rx
    }
}

fn handle_fs_event(event: &Event, state: &mut WatchState, tx: &Sender<WatchEvent>) {
    if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
        return;
    }

    for path in &event.paths {
        if path.extension().and_then(|s| s.to_str()) != Some("log") || !path.is_file() {
            continue;
        }

        let is_later = match &state.current {
            Some(current) => {
                path != current && path.file_name() > current.file_name()
            }
            None => true,
        };

        if is_later {
            if let Some(old_path) = state.current.replace(path.clone()) {
                let _ = tx.send(WatchEvent::Rotated {
                    old_path,
                    new_path: path.clone(),
                });
            }
            let _ = tx.send(WatchEvent::Attached { path: path.clone() });
        }

        if state.current.as_deref() == Some(path.as_path()) {
            emit_new_events(path, &mut state.consumed_lines, tx);
        }
    }
}

fn emit_new_events(
    path: &Path,
    consumed_lines: &mut HashMap<PathBuf, usize>,
    tx: &Sender<WatchEvent>,
) {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            let _ = tx.send(WatchEvent::Error(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            )));
            return;
        }
    };

    // Only newline-terminated lines are complete; a partial trailing
    // line stays unconsumed until the writer finishes it.
    let Some(end) = content.rfind('\n') else {
        return;
    };

    let consumed = consumed_lines.entry(path.to_path_buf()).or_insert(0);

    for (idx, line) in content[..end].split('\n').enumerate().skip(*consumed) {
        *consumed = idx + 1;
        // Malformed lines are tolerated; the log format is open-ended.
        if let Ok(event) = SessionEvent::parse_line(line, idx + 1) {
            let _ = tx.send(WatchEvent::Event(event));
        }
    }
}

/// Latest log by ascending filename sort, matching the status reader.
fn find_latest_log(dir: &Path) -> Option<PathBuf> {
    let mut logs: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("log"))
        .collect();

    logs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    logs.pop()
}
