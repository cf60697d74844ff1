use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Record session lifecycle events in the workspace log
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },

    /// Show elapsed time for the current session
    Status {
        /// Keep refreshing once per tick instead of printing once
        #[arg(long)]
        follow: bool,

        /// Tick interval in milliseconds
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
    },

    /// Follow the active session log and print events as they land
    Watch,

    /// Serve built assets over HTTP for local test runs
    Serve {
        /// Port to listen on (0 picks a free port); overrides config
        #[arg(long)]
        port: Option<u16>,

        /// Asset directory to serve; overrides config
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Start a new session
    Start {
        /// Optional session label, recorded in the log and the file name
        #[arg(long)]
        name: Option<String>,
    },

    /// Pause the current session
    Pause,

    /// Stop the current session
    Stop,
}
