//! Complex values: literal text interleaved with request variables.
//!
//! An expression such as `"$request_method:${uri}.html"` is compiled once
//! into a [`ComplexValue`] and resolved for every request by concatenating
//! its literal segments with the current values of its variables.
//!
//! # Syntax
//!
//! - `$name` references a variable; `name` is made of ASCII letters,
//!   digits and `_`
//! - `${name}` references a variable followed directly by name characters
//! - everything else is literal text
//!
//! ```
//! use hashvar_http::ComplexValue;
//!
//! let value = ComplexValue::compile("${uri}-$arg_id").unwrap();
//! assert!(!value.is_constant());
//!
//! assert!(ComplexValue::compile("$").is_err());
//! assert!(ComplexValue::compile("$no_such_variable").is_err());
//! ```

use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;
use hashvar_core::{SourceError, ValueSource};
use http::request::Parts;
use thiserror::Error;

use crate::variables::RequestVariable;

/// Expression compilation error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A `$` not followed by a valid variable name.
    #[error("invalid variable name in \"{expression}\"")]
    InvalidName {
        /// The whole expression.
        expression: String,
    },

    /// A well-formed reference to a variable that does not exist.
    #[error("unknown \"{name}\" variable")]
    UnknownVariable {
        /// Referenced name, without `$`.
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(Bytes),
    Variable(RequestVariable),
}

/// A compiled input expression.
#[derive(Clone, PartialEq, Eq)]
pub struct ComplexValue {
    expression: String,
    segments: Vec<Segment>,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl ComplexValue {
    /// Compiles an expression.
    pub fn compile(expression: &str) -> Result<Self, CompileError> {
        let invalid = || CompileError::InvalidName {
            expression: expression.to_owned(),
        };

        let mut segments = Vec::new();
        let mut rest = expression;

        while let Some(dollar) = rest.find('$') {
            if dollar > 0 {
                segments.push(Segment::Literal(Bytes::copy_from_slice(
                    rest[..dollar].as_bytes(),
                )));
            }

            let after = &rest[dollar + 1..];
            let (name, remaining) = match after.strip_prefix('{') {
                Some(braced) => {
                    let close = braced.find('}').ok_or_else(invalid)?;
                    (&braced[..close], &braced[close + 1..])
                }
                None => {
                    let end = after
                        .find(|c: char| !is_name_char(c))
                        .unwrap_or(after.len());
                    after.split_at(end)
                }
            };

            if name.is_empty() || !name.chars().all(is_name_char) {
                return Err(invalid());
            }

            let variable =
                RequestVariable::lookup(name).ok_or_else(|| CompileError::UnknownVariable {
                    name: name.to_owned(),
                })?;
            segments.push(Segment::Variable(variable));
            rest = remaining;
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(Bytes::copy_from_slice(rest.as_bytes())));
        }

        Ok(ComplexValue {
            expression: expression.to_owned(),
            segments,
        })
    }

    /// The source text of the expression.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Whether the expression references no variables.
    pub fn is_constant(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, Segment::Literal(_)))
    }

    /// Variables referenced by the expression, in order.
    pub fn variables(&self) -> impl Iterator<Item = &RequestVariable> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Variable(variable) => Some(variable),
            Segment::Literal(_) => None,
        })
    }
}

impl ValueSource for ComplexValue {
    type Subject = Parts;

    fn resolve<'a>(&'a self, parts: &'a Parts) -> Result<Cow<'a, [u8]>, SourceError> {
        match self.segments.as_slice() {
            [] => Ok(Cow::Borrowed(&[][..])),
            [Segment::Literal(literal)] => Ok(Cow::Borrowed(literal.as_ref())),
            [Segment::Variable(variable)] => variable.get(parts),
            segments => {
                let mut value = Vec::new();
                for segment in segments {
                    match segment {
                        Segment::Literal(literal) => value.extend_from_slice(literal),
                        Segment::Variable(variable) => {
                            value.extend_from_slice(&variable.get(parts)?)
                        }
                    }
                }
                Ok(Cow::Owned(value))
            }
        }
    }
}

impl fmt::Debug for ComplexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComplexValue")
            .field(&self.expression)
            .finish()
    }
}

impl fmt::Display for ComplexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}
