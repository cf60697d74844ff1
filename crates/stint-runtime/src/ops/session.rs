use crate::config::Config;
use crate::{Error, Result};
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use stint_types::{SessionEvent, SessionEventKind};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct SessionStartOptions {
    pub name: Option<String>,
}

/// Start a new session: create the sessions directory if needed and write
/// a fresh log file containing a single `Start` line.
///
/// Each session gets its own file named `<uuid-v7>[-name].log`. UUID v7
/// embeds the creation time, so both a filename sort and a UUID compare
/// agree on which session is newest.
pub fn start(workspace_root: &Path, config: &Config, options: SessionStartOptions) -> Result<PathBuf> {
    let sessions_dir = config.sessions_dir(workspace_root);
    fs::create_dir_all(&sessions_dir)?;

    let session_id = Uuid::now_v7();
    let event = SessionEvent::new(Utc::now(), SessionEventKind::Start, options.name.clone());

    let path = sessions_dir.join(log_file_name(session_id, options.name.as_deref()));
    fs::write(&path, format!("{}\n", event))?;
    Ok(path)
}

/// Append a `Pause` line to the latest session log.
pub fn pause(workspace_root: &Path, config: &Config) -> Result<PathBuf> {
    append_event(workspace_root, config, SessionEventKind::Pause)
}

/// Append a `Stop` line to the latest session log.
pub fn stop(workspace_root: &Path, config: &Config) -> Result<PathBuf> {
    append_event(workspace_root, config, SessionEventKind::Stop)
}

fn append_event(workspace_root: &Path, config: &Config, kind: SessionEventKind) -> Result<PathBuf> {
    let sessions_dir = config.sessions_dir(workspace_root);
    let latest = find_latest_session(&sessions_dir).ok_or(Error::NoActiveSession)?;

    let event = SessionEvent::new(Utc::now(), kind, latest.name);

    let mut file = OpenOptions::new().append(true).open(&latest.path)?;
    writeln!(file, "{}", event)?;
    Ok(latest.path)
}

fn log_file_name(session_id: Uuid, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{}-{}.log", session_id, name),
        None => format!("{}.log", session_id),
    }
}

struct LatestSession {
    path: PathBuf,
    name: Option<String>,
}

/// Find the most recent session log by the UUID v7 embedded in its
/// filename. Files whose stem does not start with a UUID are ignored.
fn find_latest_session(sessions_dir: &Path) -> Option<LatestSession> {
    if !sessions_dir.exists() {
        return None;
    }

    let mut latest: Option<(Uuid, PathBuf)> = None;

    for entry in fs::read_dir(sessions_dir).ok()?.flatten() {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("log") {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        // Stems are "<uuid>" or "<uuid>-<name>"; the UUID is the first
        // 36 characters either way.
        let uuid_str = stem.get(..36).unwrap_or(stem);
        let Ok(uuid) = Uuid::parse_str(uuid_str) else {
            continue;
        };

        match &latest {
            Some((latest_uuid, _)) if uuid <= *latest_uuid => {}
            _ => latest = Some((uuid, path)),
        }
    }

    let (_, path) = latest?;
    let stem = path.file_stem()?.to_str()?;
    let name = stem.get(37..).map(|s| s.to_string());

    Some(LatestSession { path, name })
}
