//! Substring windows over a formatted digest.
//!
//! A [`Range`] is written as `start:end` and selects the characters
//! `[start, end)` of the hex string. Both bounds are non-negative decimal
//! integers and `start < end` always holds for a constructed `Range`.
//!
//! ```
//! use hashvar_core::{Algorithm, Range};
//!
//! let range: Range = "0:8".parse().unwrap();
//! assert_eq!((range.start(), range.end()), (0, 8));
//! assert!(range.validate_for(Algorithm::Crc32).is_ok());
//!
//! assert!("8:4".parse::<Range>().is_err());
//! assert!("4:12".parse::<Range>().unwrap().validate_for(Algorithm::Crc32).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::algorithm::Algorithm;
use crate::error::RangeError;

/// A `[start, end)` window with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: usize,
    end: usize,
}

impl Range {
    /// Creates a window, rejecting `start >= end`.
    pub fn new(start: usize, end: usize) -> Result<Self, RangeError> {
        if start >= end {
            return Err(RangeError::Empty { start, end });
        }
        Ok(Range { start, end })
    }

    /// First selected character.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last selected character.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of selected characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always `false`: a window selects at least one character.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the window fits into a string of `hex_len` characters.
    pub fn fits(&self, hex_len: usize) -> bool {
        self.start < hex_len && self.end <= hex_len
    }

    /// Checks the window against the digest width of `algorithm`.
    pub fn validate_for(self, algorithm: Algorithm) -> Result<Self, RangeError> {
        let hex_len = algorithm.hex_len();
        if !self.fits(hex_len) {
            return Err(RangeError::OutOfBounds {
                range: self,
                algorithm,
                hex_len,
            });
        }
        Ok(self)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// Parses a plain decimal number: ASCII digits only, no sign or spaces.
fn parse_decimal(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for Range {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || RangeError::Syntax(s.to_owned());
        let (start, end) = s.split_once(':').ok_or_else(syntax)?;
        let start = parse_decimal(start).ok_or_else(syntax)?;
        let end = parse_decimal(end).ok_or_else(syntax)?;
        Range::new(start, end)
    }
}
