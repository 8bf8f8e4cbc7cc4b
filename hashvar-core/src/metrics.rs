//! Metrics declaration and recording.

use crate::algorithm::Algorithm;
use crate::error::EvaluationError;
use crate::value::VariableValue;

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
lazy_static! {
    /// Track number of hash variable evaluations per algorithm and outcome.
    pub static ref EVALUATIONS_TOTAL: &'static str = {
        metrics::describe_counter!(
            "hashvar_evaluations_total",
            "Total number of hash variable evaluations."
        );
        "hashvar_evaluations_total"
    };
}

/// Outcome label of an evaluation result.
pub fn outcome(result: &Result<VariableValue, EvaluationError>) -> &'static str {
    match result {
        Ok(value) if value.is_not_found() => "not_found",
        Ok(_) => "ok",
        Err(_) => "error",
    }
}

/// Record one evaluation.
#[cfg(feature = "metrics")]
#[inline]
pub fn record_evaluation(algorithm: Algorithm, result: &Result<VariableValue, EvaluationError>) {
    metrics::counter!(
        *EVALUATIONS_TOTAL,
        "algorithm" => algorithm.as_str(),
        "outcome" => outcome(result)
    )
    .increment(1);
}

/// Record one evaluation (no-op when `metrics` feature disabled).
#[cfg(not(feature = "metrics"))]
#[inline]
pub fn record_evaluation(_algorithm: Algorithm, _result: &Result<VariableValue, EvaluationError>) {}
