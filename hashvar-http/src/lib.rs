//! HTTP input values for hash variables.
//!
//! This crate compiles `$variable` expressions over HTTP request heads
//! into [`ValueSource`](hashvar_core::ValueSource)s:
//!
//! - [`variables::RequestVariable`] - a single request variable such as
//!   `$uri`, `$arg_id` or `$http_user_agent`
//! - [`ComplexValue`] - literal text interleaved with request variables
//!
//! Sources resolve against [`http::request::Parts`], so a request body is
//! never touched.
//!
//! ```
//! use hashvar_core::{Algorithm, HashContext};
//! use hashvar_http::ComplexValue;
//!
//! let value = ComplexValue::compile("$request_method $uri").unwrap();
//! let ctx = HashContext::new(Algorithm::Crc32, value);
//!
//! let (parts, _) = http::Request::get("/index.html").body(()).unwrap().into_parts();
//! assert_eq!(ctx.evaluate(&parts).unwrap().len(), 8);
//! ```

pub mod complex;
pub mod query;
pub mod variables;

pub use complex::{CompileError, ComplexValue};
pub use variables::RequestVariable;

/// Registry of hash variables evaluated against HTTP request heads.
pub type HttpRegistry = hashvar_core::Registry<http::request::Parts>;

/// Registry builder for [`HttpRegistry`].
pub type HttpRegistryBuilder = hashvar_core::RegistryBuilder<http::request::Parts>;
