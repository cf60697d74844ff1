use crate::args::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::Path;
use stint_runtime::{Config, SessionWatcher, WatchEvent};
use stint_types::format_timestamp;

/// Stream session events to stdout until interrupted.
pub fn handle(workspace_root: &Path, config: &Config, format: OutputFormat) -> Result<()> {
    let sessions_dir = config.sessions_dir(workspace_root);
    let watcher = SessionWatcher::new(sessions_dir)?;
    let colored = std::io::stdout().is_terminal();

    while let Ok(event) = watcher.receiver().recv() {
        match format {
            OutputFormat::Json => print_event_json(&event),
            OutputFormat::Plain => print_event(&event, colored),
        }
    }
    Ok(())
}

fn log_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// One JSON object per event on stdout; errors stay on stderr.
fn print_event_json(event: &WatchEvent) {
    let value = match event {
        WatchEvent::Attached { path } => {
            serde_json::json!({ "event": "attached", "log": log_name(path) })
        }
        WatchEvent::Event(event) => serde_json::json!({
            "event": "session",
            "timestamp": format_timestamp(event.timestamp),
            "kind": event.kind.to_string(),
            "name": event.name,
        }),
        WatchEvent::Rotated { new_path, .. } => {
            serde_json::json!({ "event": "rotated", "log": log_name(new_path) })
        }
        WatchEvent::Waiting { message } => {
            serde_json::json!({ "event": "waiting", "message": message })
        }
        WatchEvent::Error(message) => {
            eprintln!("Warning: {}", message);
            return;
        }
    };
    println!("{}", value);
}

fn print_event(event: &WatchEvent, colored: bool) {
    match event {
        WatchEvent::Attached { path } => {
            let name = log_name(path);
            if colored {
                println!("{} {}", "Watching".cyan(), name);
            } else {
                println!("Watching {}", name);
            }
        }
        WatchEvent::Event(event) => {
            let mut line = format!("{}  {}", format_timestamp(event.timestamp), event.kind);
            if let Some(name) = &event.name {
                line.push_str(&format!("  ({})", name));
            }
            println!("{}", line);
        }
        WatchEvent::Rotated { new_path, .. } => {
            let name = log_name(new_path);
            if colored {
                println!("{} {}", "New session log:".yellow(), name);
            } else {
                println!("New session log: {}", name);
            }
        }
        WatchEvent::Waiting { message } => println!("{}", message),
        WatchEvent::Error(message) => eprintln!("Warning: {}", message),
    }
}
