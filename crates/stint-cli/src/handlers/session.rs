use crate::args::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::Path;
use stint_runtime::Config;
use stint_runtime::ops::{self, SessionStartOptions};

pub fn start(
    workspace_root: &Path,
    config: &Config,
    name: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let path = ops::start(workspace_root, config, SessionStartOptions { name })?;
    report("started", &path, format);
    Ok(())
}

pub fn pause(workspace_root: &Path, config: &Config, format: OutputFormat) -> Result<()> {
    let path = ops::pause(workspace_root, config)?;
    report("paused", &path, format);
    Ok(())
}

pub fn stop(workspace_root: &Path, config: &Config, format: OutputFormat) -> Result<()> {
    let path = ops::stop(workspace_root, config)?;
    report("stopped", &path, format);
    Ok(())
}

fn report(action: &str, log_path: &Path, format: OutputFormat) {
    let log = log_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| log_path.display().to_string());

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "action": action, "log": log })
            );
        }
        OutputFormat::Plain => {
            if std::io::stdout().is_terminal() {
                println!("{} Session {} ({})", "✓".green(), action, log.dimmed());
            } else {
                println!("Session {} ({})", action, log);
            }
        }
    }
}
