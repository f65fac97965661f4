//! Error types for varstore.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! The lenient accessors on [`Value`](crate::Value) and the lookup helpers
//! never produce these; only the checked (`try_*`) surfaces and the typed
//! accessor layers do.

use std::fmt;

use thiserror::Error;

use crate::kind::Kind;

/// The main error type for varstore operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Kind, actual: Kind) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates a not-found error for a variable name.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound(name.into()))
    }

    /// Creates a naming conflict error.
    #[must_use]
    pub fn name_conflict(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::NameConflict(name.into()))
    }

    /// Creates a dimension mismatch error.
    #[must_use]
    pub fn dimension_mismatch(rows: usize, cols: usize, len: usize) -> Self {
        Self::new(ErrorKind::DimensionMismatch { rows, cols, len })
    }

    /// Creates a constraint violation error.
    #[must_use]
    pub fn constraint(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConstraintViolation {
            name: name.into(),
            message: message.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value was accessed as a kind it does not hold.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected kind.
        expected: Kind,
        /// The kind actually held.
        actual: Kind,
    },

    /// No variable with this name exists.
    #[error("variable not found: {0}")]
    NotFound(String),

    /// A variable with this name already exists.
    #[error("name already in use: {0}")]
    NameConflict(String),

    /// Cell data does not fill the requested shape.
    #[error("dimension mismatch: {rows}x{cols} needs {} cells, got {len}", .rows * .cols)]
    DimensionMismatch {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
        /// Number of cells supplied.
        len: usize,
    },

    /// A value failed a declared validity constraint.
    #[error("constraint violated for {name}: {message}")]
    ConstraintViolation {
        /// Variable name.
        name: String,
        /// What was violated.
        message: String,
    },

    /// Binary stream could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Interchange serialization error.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File the data came from.
    pub source: Option<String>,
    /// Variable path, outermost first (e.g. `["inputs", "capacity"]`).
    pub path: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Appends a variable name to the path.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.path.push(name.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
            if !self.path.is_empty() {
                write!(f, " ")?;
            }
        }
        if !self.path.is_empty() {
            write!(f, "at {}", self.path.join("."))?;
        }
        Ok(())
    }
}

/// Result type alias for varstore operations.
pub type Result<T> = std::result::Result<T, Error>;
