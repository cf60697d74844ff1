use chrono::{DateTime, Utc};
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::time::Duration;
use stint_types::{Elapsed, session_start};

/// Placeholder shown when no session state is available.
pub const ZERO_DISPLAY: &str = "00:00:00";

/// Clock the timer reads on each tick. Injectable so ticks can be driven
/// deterministically in tests.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of session log files. The timer never touches the filesystem
/// directly; tests substitute an in-memory source.
pub trait LogSource {
    /// File names (not paths) of candidate session logs.
    fn list(&self) -> io::Result<Vec<String>>;

    /// Full content of one log file.
    fn read(&self, name: &str) -> io::Result<String>;
}

/// Log source backed by a sessions directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl LogSource for DirSource {
    fn list(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    fn read(&self, name: &str) -> io::Result<String> {
        std::fs::read_to_string(self.dir.join(name))
    }
}

/// One rendered status-surface update: the text label and whether the
/// indicator should be shown at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub visible: bool,
}

/// Periodic elapsed-time status computation.
///
/// Each tick re-reads the active session log from scratch; at one small
/// file per second that is deliberate simplicity, not an oversight.
pub struct StatusTimer<C, S> {
    clock: C,
    source: S,
    text: String,
}

impl StatusTimer<SystemClock, DirSource> {
    /// Timer over a sessions directory with the real clock.
    pub fn for_dir(sessions_dir: PathBuf) -> Self {
        Self::new(SystemClock, DirSource::new(sessions_dir))
    }
}

impl<C: Clock, S: LogSource> StatusTimer<C, S> {
    pub fn new(clock: C, source: S) -> Self {
        Self {
            clock,
            source,
            text: ZERO_DISPLAY.to_string(),
        }
    }

    /// Compute the current status.
    ///
    /// - Missing/unreadable/empty sessions directory: zeroed placeholder,
    ///   indicator hidden. "Never started" and "cannot access" render
    ///   identically.
    /// - Otherwise the current log is the lexicographically last filename
    ///   (last by ascending string sort, never by modification time).
    /// - A found `Start` updates the text; a log with no start (or an
    ///   unparseable one) leaves the previous text in place for this tick.
    pub fn tick(&mut self) -> Status {
        let mut names = self.source.list().unwrap_or_default();
        names.sort();

        let Some(current) = names.pop() else {
            self.text = ZERO_DISPLAY.to_string();
            return Status {
                text: self.text.clone(),
                visible: false,
            };
        };

        match self.source.read(&current) {
            Ok(content) => {
                if let Ok(Some(started)) = session_start(&content) {
                    self.text = Elapsed::since(started, self.clock.now()).to_string();
                }
                Status {
                    text: self.text.clone(),
                    visible: true,
                }
            }
            Err(_) => {
                self.text = ZERO_DISPLAY.to_string();
                Status {
                    text: self.text.clone(),
                    visible: false,
                }
            }
        }
    }

    /// Run the tick loop, delivering one status per tick.
    ///
    /// The sleep happens after the tick completes, so a slow filesystem
    /// read delays the next tick rather than letting ticks pile up or
    /// overlap. The loop exits when the receiving side hangs up.
    pub fn run(mut self, interval: Duration, sink: Sender<Status>) {
        loop {
            let status = self.tick();
            if sink.send(status).is_err() {
                return;
            }
            std::thread::sleep(interval);
        }
    }
}
