//! Evaluated variable values.
//!
//! A [`VariableValue`] carries the evaluated bytes together with three
//! independent flags:
//!
//! - **valid** - the value may be used (and cached by the caller)
//! - **not found** - the variable has no value for this evaluation
//! - **no cacheable** - the caller must re-evaluate on every reference
//!
//! A successful hash evaluation yields `valid` without the other two flags.
//! Allocation failure yields a not-found value, which consumers treat as an
//! unset variable rather than an error.

use bytes::Bytes;

/// Outcome of a variable evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// A value was produced.
    Ok,
    /// The variable has no value for this evaluation.
    NotFound,
    /// Evaluation failed.
    Error,
}

/// The value of a variable for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableValue {
    data: Option<Bytes>,
    valid: bool,
    not_found: bool,
    no_cacheable: bool,
}

impl VariableValue {
    /// A valid, cacheable value.
    pub fn found(data: impl Into<Bytes>) -> Self {
        VariableValue {
            data: Some(data.into()),
            valid: true,
            not_found: false,
            no_cacheable: false,
        }
    }

    /// An absent value.
    pub fn not_found() -> Self {
        VariableValue {
            data: None,
            valid: false,
            not_found: true,
            no_cacheable: false,
        }
    }

    /// Returns the value bytes, if any.
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Returns the value as text when it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.data().and_then(|data| std::str::from_utf8(data).ok())
    }

    /// Consumes the value, returning its bytes.
    pub fn into_bytes(self) -> Option<Bytes> {
        self.data
    }

    /// Value length in bytes, zero when absent.
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, Bytes::len)
    }

    /// Whether the value is absent or empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the value may be used.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether the variable has no value.
    pub fn is_not_found(&self) -> bool {
        self.not_found
    }

    /// Whether the value must be recomputed on every reference.
    pub fn is_no_cacheable(&self) -> bool {
        self.no_cacheable
    }

    /// Evaluation status of this value.
    pub fn status(&self) -> Status {
        if self.not_found {
            Status::NotFound
        } else {
            Status::Ok
        }
    }
}
