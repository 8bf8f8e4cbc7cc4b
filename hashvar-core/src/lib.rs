#![warn(missing_docs)]
//! # hashvar-core
//!
//! Core types of the hash variable engine.
//!
//! A hash variable turns a per-request input value into a short, fixed-width,
//! uppercase hexadecimal digest. This crate is **protocol-agnostic**: the
//! input is produced by a [`ValueSource`] over any subject type, and
//! protocol crates (like `hashvar-http`) provide sources for their requests.
//!
//! ## Pipeline
//!
//! Evaluating a [`HashContext`] runs these steps:
//!
//! 1. **Resolve** the input bytes through the context's [`ValueSource`]
//! 2. **Check** the configured [`Range`] against the digest width
//! 3. **Reserve** an output buffer of exactly the digest width
//! 4. **Digest** the input with the bound [`Algorithm`] and format it as hex
//! 5. **Slice** the configured `[start, end)` window, if any
//!
//! The outcome is either a [`VariableValue`] (found or not found) or an
//! [`EvaluationError`].
//!
//! ```
//! use hashvar_core::{Algorithm, Constant, HashContext, Range};
//!
//! let ctx = HashContext::new(Algorithm::Md5, Constant::<()>::new("test"))
//!     .with_range("0:8".parse::<Range>().unwrap());
//!
//! let value = ctx.evaluate(&()).unwrap();
//! assert_eq!(value.as_str(), Some("098F6BCD"));
//! ```
//!
//! ## Feature Flags
//!
//! - `lookup3` (default) - Bob Jenkins' lookup3 algorithm
//! - `metrics` - Evaluation counters through the `metrics` crate
//!

pub mod algorithm;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod format;
#[cfg(feature = "lookup3")]
pub mod lookup3;
pub mod metrics;
pub mod range;
pub mod registry;
pub mod source;
pub mod value;

pub use algorithm::{Algorithm, Digest};
pub use context::HashContext;
pub use error::{EvaluationError, RangeError, SourceError, UnknownAlgorithm};
pub use range::Range;
pub use registry::{Registry, RegistryBuilder};
pub use source::{BoxSource, Constant, ValueSource};
pub use value::{Status, VariableValue};
