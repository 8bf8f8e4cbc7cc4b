//! Error types for range parsing and variable evaluation.

use smol_str::SmolStr;
use thiserror::Error;

use crate::algorithm::Algorithm;
use crate::range::Range;
use crate::value::Status;

/// A `start:end` substring that cannot be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Not two non-negative decimal integers separated by `:`.
    #[error("invalid substring \"{0}\"")]
    Syntax(String),

    /// `start` is not less than `end`.
    #[error("invalid substring \"{start}:{end}\": start must be less than end")]
    Empty {
        /// Configured window start.
        start: usize,
        /// Configured window end.
        end: usize,
    },

    /// The window does not fit into the digest of the bound algorithm.
    #[error("substring \"{range}\" exceeds {hex_len} characters of {algorithm} digest")]
    OutOfBounds {
        /// Offending window.
        range: Range,
        /// Algorithm the window was checked against.
        algorithm: Algorithm,
        /// Width of the formatted digest.
        hex_len: usize,
    },
}

/// Unknown algorithm name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown hash algorithm \"{0}\"")]
pub struct UnknownAlgorithm(pub String);

/// The input value of a hash variable could not be produced.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SourceError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SourceError {
    /// Creates an error with a message only.
    pub fn new(message: impl Into<String>) -> Self {
        SourceError {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error wrapping an underlying cause.
    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SourceError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Hard failure of a variable evaluation.
///
/// Resource exhaustion is not an error: it is reported as a
/// [`VariableValue::not_found`](crate::VariableValue::not_found) value.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// The input value could not be resolved.
    #[error("failed to resolve input value: {0}")]
    Source(#[from] SourceError),

    /// The configured window exceeds the digest width.
    #[error("substring \"{range}\" exceeds {hex_len} characters of {algorithm} digest")]
    RangeOutOfBounds {
        /// Offending window.
        range: Range,
        /// Algorithm of the evaluated variable.
        algorithm: Algorithm,
        /// Width of the formatted digest.
        hex_len: usize,
    },

    /// No variable is registered under this name.
    #[error("unknown variable \"{0}\"")]
    UnknownVariable(SmolStr),

    /// The output buffer does not match the digest width.
    #[error(transparent)]
    Format(#[from] hex::FromHexError),
}

impl EvaluationError {
    /// Evaluation status of this failure, always [`Status::Error`].
    pub fn status(&self) -> Status {
        Status::Error
    }
}
