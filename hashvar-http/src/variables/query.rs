//! Query string variables.

use std::borrow::Cow;

use hashvar_core::SourceError;
use http::request::Parts;

use crate::query;

/// The raw query string, empty when absent.
pub fn args(parts: &Parts) -> Cow<'_, [u8]> {
    Cow::Borrowed(parts.uri.query().unwrap_or_default().as_bytes())
}

/// `?` when the URI carries a query string.
pub fn is_args(parts: &Parts) -> Cow<'static, [u8]> {
    match parts.uri.query() {
        Some(_) => Cow::Borrowed(&b"?"[..]),
        None => Cow::Borrowed(&b""[..]),
    }
}

/// First decoded value of the query parameter `name`.
///
/// A missing parameter is empty. Repeated keys yield the first value and
/// unrelated nested parameters are ignored; only a pair for `name` that
/// cannot be decoded is an error.
pub fn arg(parts: &Parts, name: &str) -> Result<Cow<'static, [u8]>, SourceError> {
    let Some(raw) = parts.uri.query() else {
        return Ok(Cow::Borrowed(&b""[..]));
    };
    let value = query::first_value(raw, name)
        .map_err(|error| {
            SourceError::with_source(format!("invalid query string for $arg_{name}"), error)
        })?
        .unwrap_or_default();
    Ok(Cow::Owned(value.into_bytes()))
}
