use std::fmt;

/// Result type for stint-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A timestamp field could not be parsed
    Timestamp { value: String, line: usize },

    /// A log line is structurally invalid for the requested operation
    Line { value: String, line: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Timestamp { value, line } => {
                write!(f, "unparseable timestamp '{}' on line {}", value, line)
            }
            Error::Line { value, line } => {
                write!(f, "malformed session log line '{}' on line {}", value, line)
            }
        }
    }
}

impl std::error::Error for Error {}
