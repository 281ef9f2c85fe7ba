//! Selects a price from a generated curve.

use crate::{CURRENT_PRICE_TOLERANCE, PricingError};
use fare_core::{
    ConfigError,
    models::{FloorFallback, MarginFloor, Objective, PricePoint},
};
use tracing::{Level, event};

/// The point chosen by [`optimize`]
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Position of the chosen point in the input slice
    pub index: usize,
    /// The chosen point
    pub point: PricePoint,
    /// The value of the maximized metric at the chosen point
    pub objective_value: f64,
    /// False if the point was chosen by a margin floor fallback
    pub floor_satisfied: bool,
}

/// Pick the point of `points` that maximizes `objective`.
///
/// * [`Objective::MaximizeRevenue`] picks the largest revenue.
/// * [`Objective::MaximizeProfitWithMarginFloor`] picks the largest revenue
///   among points whose margin is at least `floor.target_margin`. If no point
///   qualifies, `floor.fallback` decides the outcome; the current price
///   fallback matches swept prices within [`CURRENT_PRICE_TOLERANCE`] of
///   `floor.current_price`.
///
/// Ties always go to the lowest price. The objective value reported is the
/// revenue of the chosen point in both cases.
///
/// # Errors
///
/// * [`PricingError::EmptyCurve`] if `points` is empty
/// * [`PricingError::InvalidConfig`] if the margin floor objective is used without a floor
/// * [`PricingError::NoEligiblePrice`] if the floor cannot be met and the fallback is strict
pub fn optimize(
    points: &[PricePoint],
    objective: Objective,
    floor: Option<&MarginFloor>,
) -> Result<Selection, PricingError> {
    if points.is_empty() {
        return Err(PricingError::EmptyCurve);
    }

    match objective {
        Objective::MaximizeRevenue => {
            let index = argmax(points, |p| Some(p.revenue)).ok_or(PricingError::EmptyCurve)?;
            select(points, index, true)
        }
        Objective::MaximizeProfitWithMarginFloor => {
            let floor = floor.ok_or(ConfigError::MissingCostModel)?;
            let target = floor.target_margin;

            let eligible = argmax(points, |p| {
                p.margin
                    .filter(|margin| *margin >= target)
                    .map(|_| p.revenue)
            });
            if let Some(index) = eligible {
                return select(points, index, true);
            }

            event!(
                Level::WARN,
                target_margin = target,
                fallback = ?floor.fallback,
                "no swept price meets the margin floor"
            );

            let index = match floor.fallback {
                FloorFallback::FirstPoint => 0,
                FloorFallback::HighestMargin => argmax(points, |p| p.margin).unwrap_or(0),
                FloorFallback::CurrentPrice => floor
                    .current_price
                    .and_then(|current| {
                        points
                            .iter()
                            .position(|p| (p.price - current).abs() < CURRENT_PRICE_TOLERANCE)
                    })
                    .unwrap_or(0),
                FloorFallback::Strict => {
                    return Err(PricingError::NoEligiblePrice {
                        target_margin: target,
                    });
                }
            };
            select(points, index, false)
        }
    }
}

fn select(
    points: &[PricePoint],
    index: usize,
    floor_satisfied: bool,
) -> Result<Selection, PricingError> {
    let point = points.get(index).cloned().ok_or(PricingError::EmptyCurve)?;
    Ok(Selection {
        index,
        objective_value: point.revenue,
        point,
        floor_satisfied,
    })
}

// The index of the largest key, breaking ties towards the lowest price.
// Points without a key (or with a NaN key) are skipped.
fn argmax(points: &[PricePoint], key: impl Fn(&PricePoint) -> Option<f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, point) in points.iter().enumerate() {
        let Some(value) = key(point).filter(|v| !v.is_nan()) else {
            continue;
        };
        best = match best {
            Some((current, best_value))
                if value < best_value
                    || (value == best_value && point.price >= points[current].price) =>
            {
                Some((current, best_value))
            }
            _ => Some((index, value)),
        };
    }
    best.map(|(index, _)| index)
}
