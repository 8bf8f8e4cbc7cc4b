use std::borrow::Cow;

use http::request::Parts;

/// The request method, e.g. `GET` or `POST`.
pub fn method(parts: &Parts) -> Cow<'_, [u8]> {
    Cow::Borrowed(parts.method.as_str().as_bytes())
}
