use crate::timestamp::{format_timestamp, parse_timestamp};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a session log event.
///
/// The set of labels is open-ended: writers emit `Start`, `Pause` and
/// `Stop`, but readers must tolerate labels they do not know. Only the
/// literal `Start` carries meaning for elapsed-time computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEventKind {
    Start,
    Pause,
    Stop,
    Other(String),
}

impl SessionEventKind {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Start" => SessionEventKind::Start,
            "Pause" => SessionEventKind::Pause,
            "Stop" => SessionEventKind::Stop,
            other => SessionEventKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for SessionEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionEventKind::Start => write!(f, "Start"),
            SessionEventKind::Pause => write!(f, "Pause"),
            SessionEventKind::Stop => write!(f, "Stop"),
            SessionEventKind::Other(label) => write!(f, "{}", label),
        }
    }
}

/// One line of a session log: `timestamp,kind[,name]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: SessionEventKind,
    pub name: Option<String>,
}

impl SessionEvent {
    pub fn new(timestamp: DateTime<Utc>, kind: SessionEventKind, name: Option<String>) -> Self {
        Self {
            timestamp,
            kind,
            name,
        }
    }

    /// Parse a single log line into an event.
    ///
    /// `line_no` is 1-based and only used for error reporting.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self> {
        let mut fields = line.splitn(3, ',');

        let ts_field = fields.next().unwrap_or_default();
        let kind_field = fields.next().ok_or_else(|| Error::Line {
            value: line.to_string(),
            line: line_no,
        })?;

        let timestamp = parse_timestamp(ts_field).ok_or_else(|| Error::Timestamp {
            value: ts_field.to_string(),
            line: line_no,
        })?;

        Ok(Self {
            timestamp,
            kind: SessionEventKind::from_label(kind_field),
            name: fields.next().map(|s| s.to_string()),
        })
    }
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", format_timestamp(self.timestamp), self.kind)?;
        if let Some(name) = &self.name {
            write!(f, ",{}", name)?;
        }
        Ok(())
    }
}
