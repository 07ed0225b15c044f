//! Errors raised when text does not name a member of one of the model sets.

use std::fmt;

/// Text that does not correspond to any direction, strength, or shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Direction(String),
    Strength(String),
    Shape(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Direction(s) => write!(f, "unknown wind direction: {s:?}"),
            ParseError::Strength(s) => write!(f, "unknown wind strength: {s:?}"),
            ParseError::Shape(s) => write!(f, "unknown water body shape: {s:?}"),
        }
    }
}

impl std::error::Error for ParseError {}
