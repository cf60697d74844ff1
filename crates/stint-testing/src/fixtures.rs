use anyhow::Result;
use assert_cmd::Command;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use stint_types::{SessionEvent, SessionEventKind};
use tempfile::TempDir;

/// A temp-directory workspace with the standard `.stint` layout.
///
/// The directory is removed when the fixture drops, so each test case gets
/// an isolated workspace.
pub struct TestWorkspace {
    _temp_dir: TempDir,
    root: PathBuf,
    sessions_dir: PathBuf,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let sessions_dir = root.join(".stint").join("sessions");

        fs::create_dir_all(&sessions_dir).expect("Failed to create sessions dir");

        Self {
            _temp_dir: temp_dir,
            root,
            sessions_dir,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn sessions_dir(&self) -> &Path {
        &self.sessions_dir
    }

    /// Write a raw session log under `.stint/sessions`.
    pub fn write_log(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.sessions_dir.join(file_name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write a session log from structured events, one line per event.
    pub fn write_events(&self, file_name: &str, events: &[SessionEvent]) -> Result<PathBuf> {
        let mut content = String::new();
        for event in events {
            content.push_str(&event.to_string());
            content.push('\n');
        }
        self.write_log(file_name, &content)
    }

    /// Write a single-Start log beginning at `started`.
    pub fn write_started_log(&self, file_name: &str, started: DateTime<Utc>) -> Result<PathBuf> {
        self.write_events(
            file_name,
            &[SessionEvent::new(started, SessionEventKind::Start, None)],
        )
    }

    /// Write a workspace config file.
    pub fn write_config(&self, content: &str) -> Result<PathBuf> {
        let path = self.root.join(".stint").join("config.toml");
        fs::write(&path, content)?;
        Ok(path)
    }

    /// A `stint` command pointed at this workspace.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("stint").expect("stint binary");
        cmd.arg("--workspace").arg(&self.root);
        cmd.env_remove("STINT_WORKSPACE");
        cmd
    }

    /// Names of all session logs, ascending by filename sort (the order
    /// the status reader uses).
    pub fn log_names(&self) -> Vec<String> {
        let mut names: Vec<String> = walkdir::WalkDir::new(&self.sessions_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Force a file's mtime, for tests proving mtime is irrelevant to log
    /// selection.
    pub fn set_log_mtime(&self, file_name: &str, unix_seconds: i64) -> Result<()> {
        let path = self.sessions_dir.join(file_name);
        filetime::set_file_mtime(&path, filetime::FileTime::from_unix_time(unix_seconds, 0))?;
        Ok(())
    }
}
