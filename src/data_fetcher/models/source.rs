use crate::error::AppError;
use std::fmt;

/// Why a fetch cycle ended up showing the fallback fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The server answered with a non-success status.
    HttpStatus(u16),
    /// Timeout, refused connection or any other transport failure.
    Transport,
    /// The body was not JSON or not the expected shape.
    MalformedPayload,
    /// The body parsed but `events` was absent, `null` or empty.
    NoEvents,
}

impl FallbackReason {
    /// Classifies a fetch error into one of the three failure families.
    pub fn from_error(error: &AppError) -> Self {
        if let Some(status) = error.http_status() {
            FallbackReason::HttpStatus(status)
        } else if error.is_payload_error() {
            FallbackReason::MalformedPayload
        } else {
            FallbackReason::Transport
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::HttpStatus(status) => write!(f, "HTTP status {status}"),
            FallbackReason::Transport => f.write_str("transport failure"),
            FallbackReason::MalformedPayload => f.write_str("malformed payload"),
            FallbackReason::NoEvents => f.write_str("no events"),
        }
    }
}

/// Where the matches of a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Fallback(FallbackReason),
}

impl DataSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, DataSource::Fallback(_))
    }
}
