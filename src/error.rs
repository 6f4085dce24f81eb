use std::fmt;
use thiserror::Error;

/// What kind of value was handed to a conversion function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Absent,
    Text,
    Number,
    Boolean,
    Object,
    Array,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Absent => write!(f, "null"),
            InputKind::Text => write!(f, "string"),
            InputKind::Number => write!(f, "number"),
            InputKind::Boolean => write!(f, "boolean"),
            InputKind::Object => write!(f, "object"),
            InputKind::Array => write!(f, "array"),
        }
    }
}

/// The only failure a conversion can report: the input was not a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Input must be a string")]
pub struct InvalidInputError {
    received: InputKind,
}

impl InvalidInputError {
    pub(crate) fn new(received: InputKind) -> Self {
        Self { received }
    }

    /// The kind of value that was rejected.
    pub fn received(&self) -> InputKind {
        self.received
    }
}
