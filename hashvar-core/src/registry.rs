//! Named hash variables.
//!
//! A [`Registry`] maps variable names to their [`HashContext`]s. It is
//! built once at startup through a [`RegistryBuilder`] and never changes
//! afterwards; share it with `Arc<Registry<S>>` and pass it to whatever
//! evaluates variables per request.
//!
//! ```
//! use hashvar_core::{Algorithm, Constant, HashContext, Registry};
//!
//! let registry = Registry::builder()
//!     .variable("empty_md5", HashContext::new(Algorithm::Md5, Constant::<()>::new("")))
//!     .build();
//!
//! let value = registry.evaluate("empty_md5", &()).unwrap();
//! assert_eq!(value.as_str(), Some("D41D8CD98F00B204E9800998ECF8427E"));
//! assert!(registry.evaluate("missing", &()).is_err());
//! ```

use std::fmt;

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::warn;

use crate::context::HashContext;
use crate::error::EvaluationError;
use crate::source::{BoxSource, ValueSource};
use crate::value::VariableValue;

/// Immutable set of named hash variables over subjects of type `S`.
///
/// Variables keep their registration order.
pub struct Registry<S> {
    variables: IndexMap<SmolStr, HashContext<BoxSource<S>>>,
}

impl<S> Registry<S> {
    /// Creates a builder for a new registry.
    pub fn builder() -> RegistryBuilder<S> {
        RegistryBuilder::new()
    }

    /// Returns the variable registered under `name`.
    pub fn get(&self, name: &str) -> Option<&HashContext<BoxSource<S>>> {
        self.variables.get(name)
    }

    /// Whether a variable is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(SmolStr::as_str)
    }

    /// Registered variables in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashContext<BoxSource<S>>)> {
        self.variables
            .iter()
            .map(|(name, ctx)| (name.as_str(), ctx))
    }

    /// Number of registered variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variables are registered.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Evaluates the variable `name` for `subject`.
    pub fn evaluate(&self, name: &str, subject: &S) -> Result<VariableValue, EvaluationError> {
        self.get(name)
            .ok_or_else(|| EvaluationError::UnknownVariable(SmolStr::new(name)))?
            .evaluate(subject)
    }
}

impl<S> Default for Registry<S> {
    fn default() -> Self {
        Registry {
            variables: IndexMap::new(),
        }
    }
}

impl<S> fmt::Debug for Registry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.variables.iter()).finish()
    }
}

/// Builder for [`Registry`].
pub struct RegistryBuilder<S> {
    variables: IndexMap<SmolStr, HashContext<BoxSource<S>>>,
}

impl<S> RegistryBuilder<S> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        RegistryBuilder {
            variables: IndexMap::new(),
        }
    }

    /// Registers `ctx` under `name`, returning the definition it replaces.
    ///
    /// A redefinition keeps the original position of the name.
    pub fn register(
        &mut self,
        name: impl Into<SmolStr>,
        ctx: HashContext<BoxSource<S>>,
    ) -> Option<HashContext<BoxSource<S>>> {
        let name = name.into();
        let replaced = self.variables.insert(name.clone(), ctx);
        if replaced.is_some() {
            warn!(variable = %name, "hash variable redefined");
        }
        replaced
    }

    /// Registers a variable with any source type.
    pub fn variable<Src>(mut self, name: impl Into<SmolStr>, ctx: HashContext<Src>) -> Self
    where
        Src: ValueSource<Subject = S> + Send + Sync + 'static,
    {
        self.register(name, ctx.boxed());
        self
    }

    /// Whether a variable is already registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Finishes the registry.
    pub fn build(self) -> Registry<S> {
        Registry {
            variables: self.variables,
        }
    }
}

impl<S> Default for RegistryBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for RegistryBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.variables.iter()).finish()
    }
}
