//! Errors.

use std::fmt::{self, Display};

use thiserror::Error;

/// An error from constructing a queueing model.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum QueueError {
    /// A rate was outside its domain.
    ///
    /// Rates must be positive, finite numbers.
    #[error("{parameter} must be a positive, finite rate, got {value}")]
    InvalidParameter {
        /// Which parameter was rejected.
        parameter: Parameter,
        /// The rejected value.
        value: f64,
    },

    /// The queue has no steady state: the server cannot keep up with arrivals.
    ///
    /// Only the unbounded model requires μ > λ. A bounded queue always
    /// reaches a steady state, because excess arrivals are turned away.
    #[error(
        "no steady state: arrival rate {arrival_rate} must be less than service rate {service_rate}"
    )]
    Unstable {
        /// The arrival rate (λ).
        arrival_rate: f64,
        /// The service rate (μ).
        service_rate: f64,
    },
}

/// A model input, named for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Parameter {
    /// The arrival rate (λ).
    ArrivalRate,
    /// The service rate (μ).
    ServiceRate,
}

impl Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Parameter::ArrivalRate => "arrival rate (λ)",
            Parameter::ServiceRate => "service rate (μ)",
        })
    }
}

/// Result type for model construction.
pub type QueueResult<T> = std::result::Result<T, QueueError>;

/// Comparisons with NaN are false, so `value > 0.0` also rejects NaN.
pub(crate) fn check_rate(parameter: Parameter, value: f64) -> QueueResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(QueueError::InvalidParameter { parameter, value })
    }
}
