//! Maps a candidate price to expected demand.
//!
//! Demand is `reference_demand * base ^ e * seasonal_factor`, clamped to
//! `[0, market_cap]`, where `e` is the effective elasticity and `base` depends
//! on the configured [`DemandForm`].

use crate::PricingError;
use fare_core::models::{DemandForm, ElasticityConfig};

/// Expected demand at `price`.
///
/// The config is validated first. Negative prices are not rejected outright;
/// they only fail when they would require a fractional power of a negative
/// number.
///
/// # Errors
///
/// * [`PricingError::InvalidConfig`] if the config violates a constraint
/// * [`PricingError::Domain`] if the result would not be a real number
/// * [`PricingError::Divergent`] if demand is infinite and there is no market cap
pub fn demand(price: f64, config: &ElasticityConfig) -> Result<f64, PricingError> {
    config.validate()?;
    evaluate(price, config)
}

/// The base that the effective elasticity is applied to
pub fn multiplier_base(form: DemandForm, price: f64, reference_price: f64) -> f64 {
    match form {
        DemandForm::Ratio => price / reference_price,
        DemandForm::Offset => 1.0 + (price - reference_price) / reference_price,
    }
}

// Assumes the config has already been validated.
pub(crate) fn evaluate(price: f64, config: &ElasticityConfig) -> Result<f64, PricingError> {
    let exponent = config.effective_elasticity();
    let base = multiplier_base(config.form, price, config.reference_price);

    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(PricingError::Domain {
            price,
            base,
            exponent,
        });
    }

    // No demand anywhere, even where the multiplier blows up
    if config.reference_demand == 0.0 {
        return Ok(0.0);
    }

    let raw = config.reference_demand * base.powf(exponent) * config.seasonal_factor;
    if raw.is_nan() {
        return Err(PricingError::Domain {
            price,
            base,
            exponent,
        });
    }

    let demand = raw.clamp(0.0, config.market_cap_or_inf());
    if demand.is_infinite() {
        return Err(PricingError::Divergent { price });
    }

    Ok(demand)
}
