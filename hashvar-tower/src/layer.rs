use std::sync::Arc;

use hashvar_http::HttpRegistry;
use http::HeaderName;
use smol_str::SmolStr;
use thiserror::Error;
use tower::Layer;

use crate::service::HashVariablesService;

/// Layer construction error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayerError {
    /// The exposed variable is not in the registry.
    #[error("unknown hash variable \"{0}\"")]
    UnknownVariable(SmolStr),
}

/// A variable evaluated for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Exposed {
    pub(crate) name: SmolStr,
    pub(crate) header: Option<HeaderName>,
}

/// Tower layer evaluating hash variables before the inner service runs.
///
/// Exposed variables are evaluated in the order they were added and stored
/// in an [`EvaluatedVariables`](crate::EvaluatedVariables) request
/// extension. Variables added with [`HashVariables::header`] are also set
/// as request headers.
#[derive(Debug, Clone)]
pub struct HashVariables {
    registry: Arc<HttpRegistry>,
    exposed: Vec<Exposed>,
}

impl HashVariables {
    /// Creates a layer exposing nothing yet.
    pub fn new(registry: Arc<HttpRegistry>) -> Self {
        HashVariables {
            registry,
            exposed: Vec::new(),
        }
    }

    /// Exposes every registered variable.
    pub fn expose_all(mut self) -> Self {
        self.exposed = self
            .registry
            .names()
            .map(|name| Exposed {
                name: SmolStr::new(name),
                header: None,
            })
            .collect();
        self
    }

    /// Evaluates `name` for every request.
    pub fn expose(self, name: impl Into<SmolStr>) -> Result<Self, LayerError> {
        self.push(name.into(), None)
    }

    /// Evaluates `name` for every request and sets it as header `header`.
    pub fn header(self, name: impl Into<SmolStr>, header: HeaderName) -> Result<Self, LayerError> {
        self.push(name.into(), Some(header))
    }

    fn push(mut self, name: SmolStr, header: Option<HeaderName>) -> Result<Self, LayerError> {
        if !self.registry.contains(&name) {
            return Err(LayerError::UnknownVariable(name));
        }
        match self.exposed.iter_mut().find(|exposed| exposed.name == name) {
            Some(exposed) => exposed.header = header.or(exposed.header.take()),
            None => self.exposed.push(Exposed { name, header }),
        }
        Ok(self)
    }
}

impl<S> Layer<S> for HashVariables {
    type Service = HashVariablesService<S>;

    fn layer(&self, upstream: S) -> Self::Service {
        HashVariablesService::new(
            upstream,
            Arc::clone(&self.registry),
            self.exposed.clone().into(),
        )
    }
}
