use std::fmt;

/// Error returned when an encoded hash record cannot be decoded.
#[derive(Debug, PartialEq, Eq)]
pub enum FormatError {
    FieldCount(usize),
    UnknownAlgorithm(String),
    InvalidRounds(String),
    EmptyField(&'static str),
    InvalidHex(&'static str),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FieldCount(n) => write!(f, "expected 4 fields, found {n}"),
            FormatError::UnknownAlgorithm(tag) => write!(f, "unknown algorithm tag '{tag}'"),
            FormatError::InvalidRounds(field) => write!(f, "invalid rounds field '{field}'"),
            FormatError::EmptyField(name) => write!(f, "empty {name} field"),
            FormatError::InvalidHex(name) => write!(f, "{name} field is not valid hex"),
        }
    }
}

impl std::error::Error for FormatError {}
