//! Configuration front ends.
//!
//! Variables can be declared as directive text:
//!
//! ```text
//! md5_hash $request_hash 0:8 "$request_method$request_uri";
//! ```
//!
//! or as YAML:
//!
//! ```yaml
//! variables:
//!   - algorithm: md5
//!     name: $request_hash
//!     range: "0:8"
//!     value: "$request_method$request_uri"
//! ```
//!
//! Both go through the same binder and produce a [`Config`].

use hashvar_core::Algorithm;
use hashvar_http::{HttpRegistry, HttpRegistryBuilder};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tracing::debug;

use crate::binder;
use crate::directive;
use crate::error::{ConfigError, DirectiveError};

/// Algorithms as their names: `md5`, `crc32`, `lookup3`.
mod algorithm_name {
    use hashvar_core::Algorithm;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(algorithm: &Algorithm, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(algorithm.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Algorithm, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// One hash variable, the YAML form of a hash directive.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HashVariableConfig {
    #[serde(with = "algorithm_name")]
    pub algorithm: Algorithm,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    pub value: String,
}

impl HashVariableConfig {
    fn args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(3);
        args.push(self.name.clone());
        args.extend(self.range.clone());
        args.push(self.value.clone());
        args
    }

    /// Registers this variable in `builder`.
    pub fn bind(&self, builder: &mut HttpRegistryBuilder) -> Result<SmolStr, DirectiveError> {
        binder::bind(builder, self.algorithm, &self.args())
    }
}

/// YAML configuration document.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct VariablesConfig {
    #[serde(default)]
    pub variables: Vec<HashVariableConfig>,
}

impl VariablesConfig {
    /// Binds every variable in declaration order.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let mut builder = HttpRegistry::builder();
        for (index, variable) in self.variables.iter().enumerate() {
            variable
                .bind(&mut builder)
                .map_err(|source| ConfigError::Variable {
                    index: index + 1,
                    source,
                })?;
        }
        Ok(Config::new(builder.build()))
    }
}

/// Loaded hash variable configuration.
#[derive(Debug, Default)]
pub struct Config {
    registry: HttpRegistry,
}

impl Config {
    fn new(registry: HttpRegistry) -> Self {
        debug!(variables = registry.len(), "hash variables configured");
        Config { registry }
    }

    /// Loads hash directives from text.
    pub fn from_directives(input: &str) -> Result<Self, ConfigError> {
        let mut builder = HttpRegistry::builder();
        for directive in directive::parse(input)? {
            binder::bind_directive(&mut builder, &directive.name, &directive.args).map_err(
                |source| ConfigError::Directive {
                    line: directive.line,
                    source,
                },
            )?;
        }
        Ok(Config::new(builder.build()))
    }

    /// Loads a YAML document.
    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        let document: VariablesConfig =
            serde_saphyr::from_str(input).map_err(|err| ConfigError::Yaml(err.to_string()))?;
        document.into_config()
    }

    /// Configured variables.
    pub fn registry(&self) -> &HttpRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> HttpRegistry {
        self.registry
    }
}
