//! Hash variable evaluation.
//!
//! [`evaluate`] is the single pipeline shared by every algorithm:
//!
//! 1. resolve the input value (failure is an [`EvaluationError::Source`])
//! 2. check the window against the digest width
//!    (failure is an [`EvaluationError::RangeOutOfBounds`])
//! 3. reserve exactly `hex_len` bytes for the output; when the reservation
//!    fails the variable is reported as not found
//! 4. digest the input in one pass and format it as uppercase hex
//! 5. return the `[start, end)` window or the whole string
//!
//! Evaluation is synchronous, bounded by the input length and free of I/O.

use bytes::Bytes;
use tracing::{debug, trace};

use crate::context::HashContext;
use crate::error::EvaluationError;
use crate::format;
use crate::metrics;
use crate::source::ValueSource;
use crate::value::VariableValue;

/// Evaluates `ctx` against `subject`.
pub fn evaluate<Src>(
    ctx: &HashContext<Src>,
    subject: &Src::Subject,
) -> Result<VariableValue, EvaluationError>
where
    Src: ValueSource,
{
    let result = evaluate_inner(ctx, subject);
    metrics::record_evaluation(ctx.algorithm(), &result);
    result
}

fn evaluate_inner<Src>(
    ctx: &HashContext<Src>,
    subject: &Src::Subject,
) -> Result<VariableValue, EvaluationError>
where
    Src: ValueSource,
{
    let algorithm = ctx.algorithm();

    let input = ctx.source().resolve(subject).inspect_err(|error| {
        debug!(%algorithm, %error, "hash variable input resolution failed");
    })?;

    let hex_len = algorithm.hex_len();

    if let Some(range) = ctx.range()
        && !range.fits(hex_len)
    {
        debug!(%algorithm, %range, hex_len, "hash variable range exceeds digest");
        return Err(EvaluationError::RangeOutOfBounds {
            range,
            algorithm,
            hex_len,
        });
    }

    let mut buffer = Vec::new();
    if buffer.try_reserve_exact(hex_len).is_err() {
        debug!(%algorithm, hex_len, "hash variable buffer allocation failed");
        return Ok(VariableValue::not_found());
    }
    buffer.resize(hex_len, 0);

    let digest = algorithm.digest(&input);
    format::encode_upper(digest.as_bytes(), &mut buffer)?;

    let formatted = Bytes::from(buffer);
    let data = match ctx.range() {
        Some(range) => formatted.slice(range.start()..range.end()),
        None => formatted,
    };

    trace!(
        %algorithm,
        input.len = input.len(),
        output.len = data.len(),
        "hash variable evaluated"
    );

    Ok(VariableValue::found(data))
}
