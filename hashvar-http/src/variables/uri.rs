//! URI derived variables.

use std::borrow::Cow;

use http::header::HOST;
use http::request::Parts;

/// The URI path.
pub fn path(parts: &Parts) -> Cow<'_, [u8]> {
    Cow::Borrowed(parts.uri.path().as_bytes())
}

/// Path and query, as received.
pub fn request_uri(parts: &Parts) -> Cow<'_, [u8]> {
    let request_uri = parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path(), |path_and_query| path_and_query.as_str());
    Cow::Borrowed(request_uri.as_bytes())
}

/// The URI scheme, `http` when the request target has none.
pub fn scheme(parts: &Parts) -> Cow<'_, [u8]> {
    Cow::Borrowed(parts.uri.scheme_str().unwrap_or("http").as_bytes())
}

/// Host from the request target, else from the `Host` header.
///
/// The port is removed and the name lowercased.
pub fn host(parts: &Parts) -> Cow<'_, [u8]> {
    let raw = match parts.uri.host() {
        Some(host) => host.as_bytes(),
        None => parts
            .headers
            .get(HOST)
            .map_or(&[][..], |value| value.as_bytes()),
    };
    let host = strip_port(raw);
    if host.iter().any(u8::is_ascii_uppercase) {
        Cow::Owned(host.to_ascii_lowercase())
    } else {
        Cow::Borrowed(host)
    }
}

fn strip_port(host: &[u8]) -> &[u8] {
    // IPv6 literal: keep everything up to the closing bracket
    if host.first() == Some(&b'[') {
        return match host.iter().position(|&b| b == b']') {
            Some(close) => &host[..=close],
            None => host,
        };
    }
    match host.iter().position(|&b| b == b':') {
        Some(colon) => &host[..colon],
        None => host,
    }
}
