#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};

/// Specifies a category of the error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input data violates an operation precondition, e.g. an empty point set passed to tour construction.
    InvalidInput,
    /// A user supplied argument cannot be accepted, e.g. a non numeric or negative operand.
    InvalidArgument,
}

/// An error type used across the crate: a category plus a human readable message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExerciseError {
    kind: ErrorKind,
    message: String,
}

/// A type alias for result type with `ExerciseError`.
pub type ExerciseResult<T> = Result<T, ExerciseError>;

impl ExerciseError {
    /// Creates a new instance of `ExerciseError`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Creates an error of `ErrorKind::InvalidInput` kind.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// Creates an error of `ErrorKind::InvalidArgument` kind.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Returns error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns error message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "invalid input"),
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
        }
    }
}

impl Display for ExerciseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ExerciseError {}

impl From<std::io::Error> for ExerciseError {
    fn from(value: std::io::Error) -> Self {
        Self::invalid_argument(value.to_string())
    }
}

impl From<serde_json::Error> for ExerciseError {
    fn from(value: serde_json::Error) -> Self {
        if value.is_io() {
            Self::invalid_argument(format!("cannot transfer json: '{value}'"))
        } else {
            Self::invalid_input(format!("cannot process json: '{value}'"))
        }
    }
}
