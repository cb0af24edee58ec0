//! Error taxonomy for remote translation attempts.

use std::fmt;

/// Why a remote translation attempt failed.
///
/// These never reach callers of the translation service. The orchestrator
/// logs the classification and answers with the offline fallback instead.
#[derive(Debug)]
pub enum BackendError {
    /// No API key is available, so no remote call can be made.
    Unconfigured,
    /// The HTTP request could not be completed.
    Transport(reqwest::Error),
    /// The service answered with a non-success status.
    Http { status: u16, message: String },
    /// The response decoded but carried no usable translation.
    MalformedResponse(String),
    /// The caller abandoned the request before a response arrived.
    Cancelled,
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconfigured => {
                write!(f, "no API key configured")
            }
            Self::Transport(err) => {
                write!(f, "request failed: {err}")
            }
            Self::Http { status, message } => {
                write!(f, "API request failed with status {status}: {message}")
            }
            Self::MalformedResponse(detail) => {
                write!(f, "empty or malformed translation response: {detail}")
            }
            Self::Cancelled => {
                write!(f, "request was cancelled")
            }
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}
