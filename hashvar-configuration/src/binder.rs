//! Binding of hash directives to registry entries.
//!
//! Every hash directive takes the same arguments:
//!
//! ```text
//! <directive> $name [start:end] value;
//! ```
//!
//! and goes through [`bind`] with the [`Algorithm`] the directive stands
//! for. Arguments are checked once here, so evaluation never sees an
//! unparsed range or expression.

use hashvar_core::{Algorithm, HashContext, Range};
use hashvar_http::{ComplexValue, HttpRegistryBuilder};
use smol_str::SmolStr;
use tracing::debug;

use crate::error::DirectiveError;

/// Binds a directive by name.
pub fn bind_directive(
    builder: &mut HttpRegistryBuilder,
    directive: &str,
    args: &[String],
) -> Result<SmolStr, DirectiveError> {
    let algorithm = Algorithm::from_directive(directive)
        .ok_or_else(|| DirectiveError::UnknownDirective(directive.to_owned()))?;
    bind(builder, algorithm, args)
}

/// Parses `args` for `algorithm` and registers the resulting variable.
///
/// Returns the registered variable name, without `$`.
pub fn bind(
    builder: &mut HttpRegistryBuilder,
    algorithm: Algorithm,
    args: &[String],
) -> Result<SmolStr, DirectiveError> {
    let directive = algorithm.directive();

    let (name, range, value) = match args {
        [name, value] => (name, None, value),
        [name, range, value] => (name, Some(range), value),
        _ => {
            return Err(DirectiveError::ArgumentCount {
                directive: directive.to_owned(),
                count: args.len(),
            });
        }
    };

    let variable = variable_name(name).ok_or_else(|| DirectiveError::InvalidName {
        directive: directive.to_owned(),
        name: name.clone(),
    })?;

    let range = range
        .map(|argument| {
            argument
                .parse::<Range>()
                .and_then(|range| range.validate_for(algorithm))
                .map_err(|source| DirectiveError::Range {
                    directive: directive.to_owned(),
                    argument: argument.clone(),
                    source,
                })
        })
        .transpose()?;

    let source = ComplexValue::compile(value).map_err(|source| DirectiveError::Expression {
        directive: directive.to_owned(),
        argument: value.clone(),
        source,
    })?;

    let mut ctx = HashContext::new(algorithm, source);
    if let Some(range) = range {
        ctx = ctx.with_range(range);
    }

    debug!(
        variable = %variable,
        algorithm = %algorithm,
        range = ?range,
        value = %value,
        "hash variable bound"
    );
    builder.register(variable.clone(), ctx.boxed());
    Ok(variable)
}

/// Strips the leading `$`; an empty remainder is not a name.
fn variable_name(arg: &str) -> Option<SmolStr> {
    let name = arg.strip_prefix('$').unwrap_or(arg);
    (!name.is_empty()).then(|| SmolStr::new(name))
}
