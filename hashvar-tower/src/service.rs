use std::sync::Arc;
use std::task::{Context, Poll};

use hashvar_core::EvaluationError;
use hashvar_http::HttpRegistry;
use http::request::Parts;
use http::{HeaderValue, Request, Response, StatusCode};
use smol_str::SmolStr;
use tower::Service;
use tracing::{trace, warn};

use crate::extension::EvaluatedVariables;
use crate::future::HashVariablesFuture;
use crate::layer::Exposed;

/// Service produced by [`HashVariables`](crate::HashVariables).
pub struct HashVariablesService<S> {
    upstream: S,
    registry: Arc<HttpRegistry>,
    exposed: Arc<[Exposed]>,
}

impl<S> HashVariablesService<S> {
    pub(crate) fn new(upstream: S, registry: Arc<HttpRegistry>, exposed: Arc<[Exposed]>) -> Self {
        HashVariablesService {
            upstream,
            registry,
            exposed,
        }
    }

    fn evaluate(&self, parts: &mut Parts) -> Result<(), (SmolStr, EvaluationError)> {
        let mut evaluated = EvaluatedVariables::with_capacity(self.exposed.len());

        for Exposed { name, header } in self.exposed.iter() {
            let value = self
                .registry
                .evaluate(name, parts)
                .map_err(|error| (name.clone(), error))?
                .into_bytes();

            if let (Some(header), Some(value)) = (header, &value)
                && let Ok(value) = HeaderValue::from_maybe_shared(value.clone())
            {
                parts.headers.insert(header.clone(), value);
            }

            trace!(variable = %name, found = value.is_some(), "hash variable evaluated");
            evaluated.insert(name.clone(), value);
        }

        parts.extensions.insert(evaluated);
        Ok(())
    }
}

impl<S> Clone for HashVariablesService<S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            registry: Arc::clone(&self.registry),
            exposed: Arc::clone(&self.exposed),
        }
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for HashVariablesService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    ResBody: Default,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = HashVariablesFuture<S::Future, ResBody, S::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.upstream.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let (mut parts, body) = req.into_parts();

        match self.evaluate(&mut parts) {
            Ok(()) => HashVariablesFuture::upstream(
                self.upstream.call(Request::from_parts(parts, body)),
            ),
            Err((variable, error)) => {
                warn!(
                    variable = %variable,
                    error = %error,
                    uri = %parts.uri,
                    "hash variable evaluation failed"
                );
                let mut response = Response::new(ResBody::default());
                *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                HashVariablesFuture::rejected(response)
            }
        }
    }
}
