//! Configured hash variables.
//!
//! A [`HashContext`] is created once per configured directive and is
//! immutable afterwards. It binds an [`Algorithm`], an input
//! [`ValueSource`] and an optional [`Range`]. Contexts hold no interior
//! state, so one context can be evaluated from many requests at once
//! without locking.

use std::fmt;

use crate::algorithm::Algorithm;
use crate::error::EvaluationError;
use crate::evaluator;
use crate::range::Range;
use crate::source::{BoxSource, ValueSource};
use crate::value::VariableValue;

/// A hash variable bound to one algorithm and one input source.
#[derive(Clone)]
pub struct HashContext<Src> {
    algorithm: Algorithm,
    source: Src,
    range: Option<Range>,
}

impl<Src> HashContext<Src> {
    /// Creates a context returning the full formatted digest.
    pub fn new(algorithm: Algorithm, source: Src) -> Self {
        HashContext {
            algorithm,
            source,
            range: None,
        }
    }

    /// Restricts the result to a `[start, end)` window.
    ///
    /// The window is not checked here; use [`Range::validate_for`] at
    /// configuration time. A window exceeding the digest width fails every
    /// evaluation with [`EvaluationError::RangeOutOfBounds`].
    pub fn with_range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }

    /// Bound algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Input value source.
    pub fn source(&self) -> &Src {
        &self.source
    }

    /// Configured window, if any.
    pub fn range(&self) -> Option<Range> {
        self.range
    }

    /// Erases the source type for storage in a registry.
    pub fn boxed<S>(self) -> HashContext<BoxSource<S>>
    where
        Src: ValueSource<Subject = S> + Send + Sync + 'static,
    {
        HashContext {
            algorithm: self.algorithm,
            source: Box::new(self.source),
            range: self.range,
        }
    }
}

impl<Src> HashContext<Src>
where
    Src: ValueSource,
{
    /// Evaluates the variable for one subject.
    ///
    /// See [`evaluator::evaluate`] for the exact steps.
    pub fn evaluate(&self, subject: &Src::Subject) -> Result<VariableValue, EvaluationError> {
        evaluator::evaluate(self, subject)
    }
}

impl<Src> fmt::Debug for HashContext<Src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashContext")
            .field("algorithm", &self.algorithm)
            .field("source", &"...")
            .field("range", &self.range)
            .finish()
    }
}
