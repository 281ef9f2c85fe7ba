//! Classifies a recommended price change by its size.

use fare_core::models::RiskTier;

/// Price changes up to this size (inclusive) are low risk
pub const LOW_RISK_MAX_CHANGE: f64 = 2.0;

/// Price changes up to this size (inclusive) are medium risk
pub const MEDIUM_RISK_MAX_CHANGE: f64 = 5.0;

/// The risk of moving from `current_price` to `recommended_price`.
///
/// Only the absolute size of the change matters. Boundaries belong to the
/// lower tier. This is total: a NaN change is treated as high risk.
pub fn classify(current_price: f64, recommended_price: f64) -> RiskTier {
    let change = (recommended_price - current_price).abs();
    if change <= LOW_RISK_MAX_CHANGE {
        RiskTier::Low
    } else if change <= MEDIUM_RISK_MAX_CHANGE {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}
