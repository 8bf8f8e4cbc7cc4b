//! Producers of per-request input values.
//!
//! This module provides the [`ValueSource`] trait: the input expression of
//! a hash variable, compiled once at configuration time and resolved for
//! every evaluation.
//!
//! ## Overview
//!
//! Sources are **protocol-agnostic**. The `Subject` associated type is
//! whatever the host evaluates variables against (an HTTP request head,
//! a message envelope, a plain string in tests). Protocol-specific crates
//! like `hashvar-http` provide sources for their subjects.
//!
//! ## Example
//!
//! ```
//! use std::borrow::Cow;
//!
//! use hashvar_core::{SourceError, ValueSource};
//!
//! #[derive(Debug)]
//! struct UserName;
//!
//! struct Session {
//!     user: String,
//! }
//!
//! impl ValueSource for UserName {
//!     type Subject = Session;
//!
//!     fn resolve<'a>(&'a self, session: &'a Session) -> Result<Cow<'a, [u8]>, SourceError> {
//!         Ok(Cow::Borrowed(session.user.as_bytes()))
//!     }
//! }
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use bytes::Bytes;

use crate::error::SourceError;

/// Produces the input bytes of a hash variable from a subject.
///
/// Resolution is synchronous and must not block: it runs inline on
/// whatever thread is processing the request.
///
/// # Blanket Implementations
///
/// This trait is implemented for:
/// - `&T` where `T: ValueSource`
/// - `Box<T>` where `T: ValueSource`
/// - `Arc<T>` where `T: ValueSource`
pub trait ValueSource {
    /// The type input values are resolved against.
    type Subject;

    /// Resolves the input value for one evaluation.
    fn resolve<'a>(&'a self, subject: &'a Self::Subject) -> Result<Cow<'a, [u8]>, SourceError>;
}

impl<T> ValueSource for &T
where
    T: ValueSource + ?Sized,
{
    type Subject = T::Subject;

    fn resolve<'a>(&'a self, subject: &'a T::Subject) -> Result<Cow<'a, [u8]>, SourceError> {
        (**self).resolve(subject)
    }
}

impl<T> ValueSource for Box<T>
where
    T: ValueSource + ?Sized,
{
    type Subject = T::Subject;

    fn resolve<'a>(&'a self, subject: &'a T::Subject) -> Result<Cow<'a, [u8]>, SourceError> {
        self.as_ref().resolve(subject)
    }
}

impl<T> ValueSource for Arc<T>
where
    T: ValueSource + ?Sized,
{
    type Subject = T::Subject;

    fn resolve<'a>(&'a self, subject: &'a T::Subject) -> Result<Cow<'a, [u8]>, SourceError> {
        self.as_ref().resolve(subject)
    }
}

/// Boxed source for dynamic dispatch.
pub type BoxSource<S> = Box<dyn ValueSource<Subject = S> + Send + Sync>;

/// A source that resolves to the same bytes for every subject.
pub struct Constant<S> {
    value: Bytes,
    _subject: PhantomData<fn(&S)>,
}

impl<S> Constant<S> {
    /// Creates a constant source.
    pub fn new(value: impl Into<Bytes>) -> Self {
        Constant {
            value: value.into(),
            _subject: PhantomData,
        }
    }

    /// Returns the constant bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

impl<S> Clone for Constant<S> {
    fn clone(&self) -> Self {
        Constant::new(self.value.clone())
    }
}

impl<S> fmt::Debug for Constant<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Constant").field(&self.value).finish()
    }
}

impl<S> ValueSource for Constant<S> {
    type Subject = S;

    fn resolve<'a>(&'a self, _subject: &'a S) -> Result<Cow<'a, [u8]>, SourceError> {
        Ok(Cow::Borrowed(&self.value))
    }
}
