mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "stint")]
#[command(about = "Track work sessions and serve built assets for local testing", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace root. Defaults to $STINT_WORKSPACE, then the current
    /// directory.
    #[arg(long, global = true)]
    pub workspace: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}
