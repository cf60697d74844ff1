pub mod elapsed;
pub mod error;
pub mod event;
pub mod parser;
pub mod timestamp;

pub use elapsed::Elapsed;
pub use error::{Error, Result};
pub use event::{SessionEvent, SessionEventKind};
pub use parser::session_start;
pub use timestamp::{format_timestamp, parse_timestamp};
