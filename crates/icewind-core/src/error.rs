//! Errors surfaced by history persistence.
//!
//! Read-side failures never reach callers (a broken value reads as empty
//! history); these cover the write side and store construction.

use std::fmt;

#[derive(Debug)]
pub enum HistoryError {
    /// Backend I/O failed (permission denied, disk full, ...).
    Io(std::io::Error),
    /// JSON encoding or decoding failed.
    Json(serde_json::Error),
    /// Bincode encoding or decoding failed.
    Bincode(Box<bincode::ErrorKind>),
    /// A storage key that the backend cannot address.
    InvalidKey(String),
    /// Store configuration rejected at construction.
    InvalidConfig(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "IO error: {e}"),
            HistoryError::Json(e) => write!(f, "JSON error: {e}"),
            HistoryError::Bincode(e) => write!(f, "Bincode error: {e}"),
            HistoryError::InvalidKey(key) => write!(f, "Invalid storage key: {key:?}"),
            HistoryError::InvalidConfig(msg) => write!(f, "Invalid history config: {msg}"),
        }
    }
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryError::Io(e) => Some(e),
            HistoryError::Json(e) => Some(e),
            HistoryError::Bincode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HistoryError {
    fn from(e: std::io::Error) -> Self {
        HistoryError::Io(e)
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(e: serde_json::Error) -> Self {
        HistoryError::Json(e)
    }
}

impl From<Box<bincode::ErrorKind>> for HistoryError {
    fn from(e: Box<bincode::ErrorKind>) -> Self {
        HistoryError::Bincode(e)
    }
}
