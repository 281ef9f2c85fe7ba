/// Errors raised when a pricing input violates one of its constraints.
///
/// Every variant carries the name of the offending field so that callers can
/// report which input was rejected and why.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A field was NaN
    #[error("{field} is NaN")]
    NotANumber {
        /// The offending field
        field: &'static str,
    },
    /// A field that must be finite was infinite
    #[error("{field} must be finite, got {value}")]
    NotFinite {
        /// The offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },
    /// A field that must be strictly positive was not
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// The offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },
    /// A field that must be non-negative was negative
    #[error("{field} must be non-negative, got {value}")]
    Negative {
        /// The offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },
    /// A field fell outside of its permitted interval
    #[error("{field} must lie in {range}, got {value}")]
    OutOfRange {
        /// The offending field
        field: &'static str,
        /// The rejected value
        value: f64,
        /// The permitted interval, in interval notation
        range: &'static str,
    },
    /// The sweep bounds were given in the wrong order
    #[error("min_price ({min}) exceeds max_price ({max})")]
    ReversedRange {
        /// The requested lower bound
        min: f64,
        /// The requested upper bound
        max: f64,
    },
    /// The step is too fine to be represented at the magnitude of the prices
    #[error("step {step} is too small to separate prices near {magnitude}")]
    StepTooSmall {
        /// The requested step
        step: f64,
        /// The largest absolute price bound
        magnitude: f64,
    },
    /// The sweep would produce an unreasonable number of points
    #[error("sweep would produce {points} points, exceeding the limit of {limit}")]
    SweepTooLarge {
        /// The number of points requested
        points: f64,
        /// The maximum number of points permitted
        limit: usize,
    },
    /// A margin-constrained objective was requested without a cost model
    #[error("the margin floor objective requires a cost model")]
    MissingCostModel,
}

/// Reject NaN and infinite values for `field`.
pub fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_nan() {
        Err(ConfigError::NotANumber { field })
    } else if value.is_infinite() {
        Err(ConfigError::NotFinite { field, value })
    } else {
        Ok(value)
    }
}

/// Require a finite, strictly positive `value`.
pub fn positive(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if finite(field, value)? > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Require a finite, non-negative `value`.
pub fn non_negative(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if finite(field, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
