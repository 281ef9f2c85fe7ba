//! A simple what-if model for surge multipliers.
//!
//! Unlike the elasticity model, demand here falls linearly as the multiplier
//! rises above 1x, and revenue is the surged fare times that demand.

use crate::PricingError;
use fare_core::{
    ConfigError,
    check::{non_negative, positive},
    models::SweepSpec,
};
use tracing::{Level, event};

/// Above this multiplier, surge pricing is likely to push riders away
pub const REDUCE_ABOVE: f64 = 2.0;

/// Below this multiplier, there is room to raise prices
pub const RAISE_BELOW: f64 = 1.3;

/// Parameters of the linear surge response
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurgeModel {
    /// Rides demanded at 1x
    pub base_demand: f64,
    /// Rides lost per unit of multiplier above 1x
    pub demand_drop_per_multiplier: f64,
    /// The unsurged fare
    pub base_fare: f64,
}

impl Default for SurgeModel {
    fn default() -> Self {
        Self {
            base_demand: 2000.0,
            demand_drop_per_multiplier: 800.0,
            base_fare: 12.0,
        }
    }
}

/// Guidance on a surge multiplier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SurgeAdvice {
    /// The multiplier is low enough to raise
    RoomForIncrease,
    /// The multiplier is in a reasonable range
    OptimalRange,
    /// The multiplier is high enough to consider lowering
    ConsiderReducing,
}

impl SurgeAdvice {
    /// Advice for `multiplier`
    pub fn of(multiplier: f64) -> Self {
        if multiplier > REDUCE_ABOVE {
            Self::ConsiderReducing
        } else if multiplier < RAISE_BELOW {
            Self::RoomForIncrease
        } else {
            Self::OptimalRange
        }
    }
}

/// The simulated effect of one multiplier
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurgeOutcome {
    /// The simulated multiplier
    pub multiplier: f64,
    /// Expected rides
    pub demand: f64,
    /// `demand * base_fare * multiplier`
    pub revenue: f64,
    /// Guidance on the multiplier
    pub advice: SurgeAdvice,
}

/// The result of simulating a range of multipliers
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurgeSweep {
    /// Every simulated multiplier, ascending
    pub outcomes: Vec<SurgeOutcome>,
    /// The revenue-maximizing multiplier (lowest on ties)
    pub best: SurgeOutcome,
}

impl SurgeModel {
    /// Checks every field against its constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("base_demand", self.base_demand)?;
        non_negative("demand_drop_per_multiplier", self.demand_drop_per_multiplier)?;
        positive("base_fare", self.base_fare)?;
        Ok(())
    }

    /// Simulate a single multiplier
    pub fn simulate(&self, multiplier: f64) -> Result<SurgeOutcome, PricingError> {
        self.validate()?;
        positive("multiplier", multiplier)?;
        Ok(self.outcome(multiplier))
    }

    /// Simulate every multiplier visited by `multipliers`
    pub fn sweep(&self, multipliers: &SweepSpec) -> Result<SurgeSweep, PricingError> {
        self.validate()?;
        positive("multiplier", multipliers.min_price())?;

        let outcomes = multipliers
            .prices()
            .map(|m| self.outcome(m))
            .collect::<Vec<_>>();

        // Multipliers ascend, so the first maximum is the lowest one
        let best = outcomes
            .iter()
            .fold(None::<&SurgeOutcome>, |best, outcome| match best {
                Some(best) if best.revenue >= outcome.revenue => Some(best),
                _ => Some(outcome),
            })
            .cloned()
            .ok_or(PricingError::EmptyCurve)?;

        event!(
            Level::DEBUG,
            multipliers = outcomes.len(),
            best = best.multiplier,
            "simulated surge multipliers"
        );

        Ok(SurgeSweep { outcomes, best })
    }

    fn outcome(&self, multiplier: f64) -> SurgeOutcome {
        let demand =
            (self.base_demand - (multiplier - 1.0) * self.demand_drop_per_multiplier).max(0.0);
        SurgeOutcome {
            multiplier,
            demand,
            revenue: demand * self.base_fare * multiplier,
            advice: SurgeAdvice::of(multiplier),
        }
    }
}
