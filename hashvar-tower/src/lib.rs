//! Tower middleware for hash variables.
//!
//! [`HashVariables`] is a Tower [`Layer`](tower::Layer) evaluating
//! configured hash variables for every request before the inner service
//! sees it.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use hashvar_configuration::Config;
//! use hashvar_tower::HashVariables;
//! use http::HeaderName;
//!
//! let registry = Config::from_directives("md5_hash $uri_md5 0:8 $uri;")
//!     .unwrap()
//!     .into_registry();
//!
//! let layer = HashVariables::new(Arc::new(registry))
//!     .header("uri_md5", HeaderName::from_static("x-uri-hash"))
//!     .unwrap();
//! # let _ = layer;
//! ```
//!
//! # Request Handling
//!
//! | Outcome | Effect |
//! |---------|--------|
//! | value found | recorded in [`EvaluatedVariables`], header set if configured |
//! | value not found | recorded as absent, no header |
//! | evaluation error | `500 Internal Server Error`, inner service not called |

#![warn(missing_docs)]

/// Per-request evaluated variables.
pub mod extension;
/// Response future.
pub mod future;
/// Tower layer.
pub mod layer;
/// Tower service evaluating variables.
pub mod service;

pub use extension::EvaluatedVariables;
pub use layer::{HashVariables, LayerError};
pub use service::HashVariablesService;
