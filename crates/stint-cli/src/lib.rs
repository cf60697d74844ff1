mod args;
mod commands;
mod handlers;

pub use args::{Cli, Commands, OutputFormat, SessionCommand};
pub use commands::run;
