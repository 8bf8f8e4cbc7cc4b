use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Future;
use futures::future::Ready;
use http::Response;
use pin_project::pin_project;

/// Response future of [`HashVariablesService`](crate::service::HashVariablesService).
///
/// Either the inner service future, or a ready error response when a
/// variable failed to evaluate.
#[pin_project(project = HashVariablesFutureProj)]
pub enum HashVariablesFuture<F, ResBody, E> {
    /// Waiting for the inner service.
    Upstream {
        /// Inner service future.
        #[pin]
        inner: F,
    },
    /// Evaluation failed before the inner service was called.
    Rejected {
        /// Error response.
        #[pin]
        response: Ready<Result<Response<ResBody>, E>>,
    },
}

impl<F, ResBody, E> HashVariablesFuture<F, ResBody, E> {
    /// Wraps the inner service future.
    pub fn upstream(inner: F) -> Self {
        HashVariablesFuture::Upstream { inner }
    }

    /// Completes immediately with `response`.
    pub fn rejected(response: Response<ResBody>) -> Self {
        HashVariablesFuture::Rejected {
            response: futures::future::ready(Ok(response)),
        }
    }
}

impl<F, ResBody, E> Future for HashVariablesFuture<F, ResBody, E>
where
    F: Future<Output = Result<Response<ResBody>, E>>,
{
    type Output = Result<Response<ResBody>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            HashVariablesFutureProj::Upstream { inner } => inner.poll(cx),
            HashVariablesFutureProj::Rejected { response } => response.poll(cx),
        }
    }
}
