use crate::args::OutputFormat;
use anyhow::Result;
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;
use stint_runtime::{Config, Status, StatusTimer};

pub fn handle(
    workspace_root: &Path,
    config: &Config,
    format: OutputFormat,
    follow: bool,
    interval_ms: u64,
) -> Result<()> {
    let sessions_dir = config.sessions_dir(workspace_root);
    let mut timer = StatusTimer::for_dir(sessions_dir);

    if !follow {
        print_status(&timer.tick(), format);
        return Ok(());
    }

    let (tx, rx) = channel();
    std::thread::Builder::new()
        .name("status-timer".to_string())
        .spawn(move || timer.run(Duration::from_millis(interval_ms), tx))?;

    // One line per tick until interrupted.
    while let Ok(status) = rx.recv() {
        print_status(&status, format);
    }
    Ok(())
}

fn print_status(status: &Status, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "elapsed": status.text, "visible": status.visible })
            );
        }
        // The plain surface always prints the text; the visibility flag
        // only matters to integrations that can hide an indicator.
        OutputFormat::Plain => println!("{}", status.text),
    }
}
