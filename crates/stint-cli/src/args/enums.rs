use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (colored when stdout is a terminal)
    Plain,
    /// One JSON object per result
    Json,
}
