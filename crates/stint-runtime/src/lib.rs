pub mod config;
pub mod error;
pub mod ops;
pub mod status;
pub mod watcher;
pub mod workspace;

pub use config::Config;
pub use error::{Error, Result};
pub use status::{Clock, DirSource, LogSource, Status, StatusTimer, SystemClock};
pub use watcher::{SessionWatcher, WatchEvent};
pub use workspace::resolve_workspace_root;
