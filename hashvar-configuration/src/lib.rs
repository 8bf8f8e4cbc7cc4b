//! Configuration of hash variables.
//!
//! Turns directive text or a YAML document into a
//! [`HttpRegistry`](hashvar_http::HttpRegistry):
//!
//! ```
//! use hashvar_configuration::Config;
//!
//! let config = Config::from_directives(
//!     "md5_hash $request_hash 0:8 \"$request_method$request_uri\";",
//! )
//! .unwrap();
//!
//! let registry = config.into_registry();
//! assert!(registry.contains("request_hash"));
//! ```
//!
//! Every argument is validated while loading. A configuration that loads
//! never fails at request time because of a bad range or expression.

pub mod binder;
pub mod config;
pub mod directive;
pub mod error;

pub use config::{Config, HashVariableConfig, VariablesConfig};
pub use error::{ConfigError, DirectiveError};
