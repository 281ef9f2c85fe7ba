use fare_core::ConfigError;

/// Errors that can occur while evaluating the pricing pipeline
///
/// All of these are raised before any output is produced; a pipeline either
/// returns the full curve and recommendation or one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// An input violated one of its constraints
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// The demand multiplier would be a fractional power of a negative number
    #[error("demand is not real at price {price}: {base} raised to the power {exponent}")]
    Domain {
        /// The price being evaluated
        price: f64,
        /// The (negative) base of the demand multiplier
        base: f64,
        /// The (fractional) effective elasticity
        exponent: f64,
    },
    /// Demand is unbounded at this price and there is no market cap to clamp it
    #[error("demand diverges at price {price}")]
    Divergent {
        /// The price being evaluated
        price: f64,
    },
    /// The optimizer was handed no points
    #[error("cannot optimize an empty price curve")]
    EmptyCurve,
    /// A strict margin floor could not be met anywhere in the sweep
    #[error("no swept price meets the target margin of {target_margin}")]
    NoEligiblePrice {
        /// The margin floor that could not be met
        target_margin: f64,
    },
}

impl PricingError {
    /// True for errors caused by a non-real or unbounded demand value
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::Domain { .. } | Self::Divergent { .. })
    }
}
