//! Request variables available to input expressions.
//!
//! Each variable reads one component of an HTTP request head. They are the
//! building blocks of a [`ComplexValue`](crate::ComplexValue) and can also
//! be used directly as a [`ValueSource`].
//!
//! # Available Variables
//!
//! | Variable | Value |
//! |----------|-------|
//! | `$uri`, `$document_uri` | URI path |
//! | `$request_uri` | Path and query |
//! | `$args`, `$query_string` | Raw query string |
//! | `$is_args` | `?` when the URI has a query, empty otherwise |
//! | `$arg_<name>` | First value of a query parameter |
//! | `$http_<name>` | Request header, `_` standing for `-` |
//! | `$cookie_<name>` | Request cookie |
//! | `$content_type`, `$content_length` | Those request headers |
//! | `$request_method` | HTTP method |
//! | `$host` | Lowercased host without port |
//! | `$scheme` | URI scheme, `http` by default |
//! | `$server_protocol` | `HTTP/1.1`, `HTTP/2.0`, ... |
//!
//! A component missing from the request resolves to an empty value.

use std::borrow::Cow;

use hashvar_core::{SourceError, ValueSource};
use http::HeaderName;
use http::request::Parts;
use smol_str::SmolStr;

pub mod header;
pub mod method;
pub mod query;
pub mod uri;
pub mod version;

/// A single request variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestVariable {
    /// `$uri`: the URI path.
    Uri,
    /// `$request_uri`: path and query.
    RequestUri,
    /// `$args`: the raw query string.
    Args,
    /// `$is_args`: `?` if the URI has a query.
    IsArgs,
    /// `$arg_<name>`: a query parameter.
    Arg(SmolStr),
    /// `$http_<name>`: a request header.
    Header(HeaderName),
    /// `$cookie_<name>`: a cookie.
    Cookie(SmolStr),
    /// `$request_method`: the HTTP method.
    Method,
    /// `$host`: the request host.
    Host,
    /// `$scheme`: the URI scheme.
    Scheme,
    /// `$server_protocol`: the HTTP version.
    ServerProtocol,
}

impl RequestVariable {
    /// Looks up a variable by name, without the leading `$`.
    ///
    /// Returns `None` for unknown names.
    pub fn lookup(name: &str) -> Option<Self> {
        let variable = match name {
            "uri" | "document_uri" => RequestVariable::Uri,
            "request_uri" => RequestVariable::RequestUri,
            "args" | "query_string" => RequestVariable::Args,
            "is_args" => RequestVariable::IsArgs,
            "request_method" => RequestVariable::Method,
            "host" => RequestVariable::Host,
            "scheme" => RequestVariable::Scheme,
            "server_protocol" => RequestVariable::ServerProtocol,
            "content_type" => RequestVariable::Header(http::header::CONTENT_TYPE),
            "content_length" => RequestVariable::Header(http::header::CONTENT_LENGTH),
            _ => {
                if let Some(arg) = name.strip_prefix("arg_").filter(|arg| !arg.is_empty()) {
                    RequestVariable::Arg(SmolStr::new(arg))
                } else if let Some(cookie) =
                    name.strip_prefix("cookie_").filter(|cookie| !cookie.is_empty())
                {
                    RequestVariable::Cookie(SmolStr::new(cookie))
                } else if let Some(header) = name.strip_prefix("http_") {
                    RequestVariable::Header(header::header_name(header)?)
                } else {
                    return None;
                }
            }
        };
        Some(variable)
    }

    /// Resolves the variable against a request head.
    pub fn get<'a>(&'a self, parts: &'a Parts) -> Result<Cow<'a, [u8]>, SourceError> {
        match self {
            RequestVariable::Uri => Ok(uri::path(parts)),
            RequestVariable::RequestUri => Ok(uri::request_uri(parts)),
            RequestVariable::Args => Ok(query::args(parts)),
            RequestVariable::IsArgs => Ok(query::is_args(parts)),
            RequestVariable::Arg(name) => query::arg(parts, name),
            RequestVariable::Header(name) => Ok(header::header(parts, name)),
            RequestVariable::Cookie(name) => Ok(header::cookie(parts, name)),
            RequestVariable::Method => Ok(method::method(parts)),
            RequestVariable::Host => Ok(uri::host(parts)),
            RequestVariable::Scheme => Ok(uri::scheme(parts)),
            RequestVariable::ServerProtocol => Ok(version::server_protocol(parts)),
        }
    }
}

impl ValueSource for RequestVariable {
    type Subject = Parts;

    fn resolve<'a>(&'a self, parts: &'a Parts) -> Result<Cow<'a, [u8]>, SourceError> {
        self.get(parts)
    }
}
