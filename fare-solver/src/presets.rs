//! Ready-made requests for the two standard pricing analyses: a plain
//! elasticity calculator and a margin-constrained revenue optimizer.

use crate::PricingRequest;
use fare_core::{
    ConfigError,
    models::{CostModel, DemandForm, ElasticityConfig, FloorFallback, Objective, SweepSpec},
};
use std::{fmt, str::FromStr};

/// A named, built-in pricing request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Revenue maximization over a percentage-change demand curve capped at the market size
    ElasticityCalculator,
    /// Margin-constrained optimization with competition and fixed costs
    RevenueOptimizer,
}

impl Preset {
    /// Every preset, in a stable order
    pub const ALL: [Preset; 2] = [Preset::ElasticityCalculator, Preset::RevenueOptimizer];

    /// The kebab-case name of the preset
    pub fn name(self) -> &'static str {
        match self {
            Self::ElasticityCalculator => "elasticity-calculator",
            Self::RevenueOptimizer => "revenue-optimizer",
        }
    }

    /// Builds the request
    pub fn request(self) -> Result<PricingRequest, ConfigError> {
        let request = match self {
            Self::ElasticityCalculator => PricingRequest::new(
                ElasticityConfig::new(15.0, 2000.0, -1.2)
                    .with_market_cap(50000.0)
                    .with_form(DemandForm::Offset),
                SweepSpec::new(5.0, 30.0, 0.5)?,
            ),
            Self::RevenueOptimizer => PricingRequest::new(
                ElasticityConfig::new(16.0, 2500.0, -1.3)
                    .with_seasonal_factor(1.0)
                    .with_competition_level(0.5)
                    .with_form(DemandForm::Ratio),
                SweepSpec::new(8.0, 30.0, 0.5)?,
            )
            .with_cost_model(CostModel::new(8.0, 50000.0, 0.3))
            .with_objective(Objective::MaximizeProfitWithMarginFloor)
            .with_fallback(FloorFallback::FirstPoint),
        };
        Ok(request)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| UnknownPreset(s.to_owned()))
    }
}

/// Error for a preset name that does not exist
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("unknown preset: {0}")]
pub struct UnknownPreset(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for preset in Preset::ALL {
            let request = preset.request().unwrap();
            assert_eq!(request.config.validate(), Ok(()));
        }
    }

    #[test]
    fn test_parse_names() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
        }
        assert_eq!(
            "surge".parse::<Preset>(),
            Err(UnknownPreset("surge".to_owned()))
        );
    }
}
