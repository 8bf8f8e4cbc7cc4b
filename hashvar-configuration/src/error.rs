use hashvar_core::RangeError;
use hashvar_http::CompileError;
use thiserror::Error;

/// A single directive that cannot be bound.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("unknown directive \"{0}\"")]
    UnknownDirective(String),

    #[error("invalid number of arguments in \"{directive}\" directive: expected 2 or 3, got {count}")]
    ArgumentCount { directive: String, count: usize },

    #[error("invalid variable name \"{name}\" in \"{directive}\" directive")]
    InvalidName { directive: String, name: String },

    #[error("invalid range \"{argument}\" in \"{directive}\" directive: {source}")]
    Range {
        directive: String,
        argument: String,
        #[source]
        source: RangeError,
    },

    #[error("invalid value \"{argument}\" in \"{directive}\" directive: {source}")]
    Expression {
        directive: String,
        argument: String,
        #[source]
        source: CompileError,
    },
}

impl DirectiveError {
    /// Name of the directive that failed.
    pub fn directive(&self) -> &str {
        match self {
            DirectiveError::UnknownDirective(directive)
            | DirectiveError::ArgumentCount { directive, .. }
            | DirectiveError::InvalidName { directive, .. }
            | DirectiveError::Range { directive, .. }
            | DirectiveError::Expression { directive, .. } => directive,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("line {line}: {source}")]
    Directive {
        line: usize,
        #[source]
        source: DirectiveError,
    },

    #[error("variable #{index}: {source}")]
    Variable {
        index: usize,
        #[source]
        source: DirectiveError,
    },

    #[error("invalid yaml: {0}")]
    Yaml(String),
}

impl ConfigError {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        ConfigError::Syntax {
            line,
            message: message.into(),
        }
    }

    /// The directive error behind this configuration error, if any.
    pub fn directive_error(&self) -> Option<&DirectiveError> {
        match self {
            ConfigError::Directive { source, .. } | ConfigError::Variable { source, .. } => {
                Some(source)
            }
            ConfigError::Syntax { .. } | ConfigError::Yaml(_) => None,
        }
    }

    /// 1-based line of directive text the error refers to.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConfigError::Syntax { line, .. } | ConfigError::Directive { line, .. } => Some(*line),
            ConfigError::Variable { .. } | ConfigError::Yaml(_) => None,
        }
    }
}
