//! Aggregation error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    #[error("No day buckets to summarize")]
    EmptyInput,

    #[error("Total macro grams are zero; percentages are undefined")]
    DivideByZero,
}

/// Result type for aggregation passes
pub type AggregateResult<T> = Result<T, AggregateError>;
