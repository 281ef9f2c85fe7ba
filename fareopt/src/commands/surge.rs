use clap::Args;
use fare_solver::{
    PricingError, SweepSpec,
    surge::{SurgeModel, SurgeOutcome, SurgeSweep},
};
use serde::Serialize;

use crate::Round;

// The range of the sweep when no bounds are given
const DEFAULT_MIN: f64 = 1.0;
const DEFAULT_MAX: f64 = 3.0;
const DEFAULT_STEP: f64 = 0.1;

#[derive(Args, Debug)]
pub struct SurgeArgs {
    /// The multiplier to simulate
    #[arg(required_unless_present = "sweep", conflicts_with = "sweep")]
    multiplier: Option<f64>,

    /// Simulate a range of multipliers and report the best one
    #[arg(long)]
    sweep: bool,

    /// Lowest multiplier of the sweep [default: 1]
    #[arg(long, requires = "sweep")]
    min: Option<f64>,

    /// Highest multiplier of the sweep [default: 3]
    #[arg(long, requires = "sweep")]
    max: Option<f64>,

    /// Distance between swept multipliers [default: 0.1]
    #[arg(long, requires = "sweep")]
    step: Option<f64>,

    /// Rides demanded at 1x
    #[arg(long, default_value_t = SurgeModel::default().base_demand)]
    base_demand: f64,

    /// Rides lost per unit of multiplier above 1x
    #[arg(long, default_value_t = SurgeModel::default().demand_drop_per_multiplier)]
    demand_drop: f64,

    /// The unsurged fare
    #[arg(long, default_value_t = SurgeModel::default().base_fare)]
    base_fare: f64,
}

/// What the `surge` subcommand reports
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SurgeReport {
    Single(SurgeOutcome),
    Sweep(SurgeSweep),
}

impl Round for SurgeReport {
    fn round(&mut self) {
        match self {
            Self::Single(outcome) => outcome.round(),
            Self::Sweep(sweep) => sweep.round(),
        }
    }
}

impl SurgeArgs {
    fn model(&self) -> SurgeModel {
        SurgeModel {
            base_demand: self.base_demand,
            demand_drop_per_multiplier: self.demand_drop,
            base_fare: self.base_fare,
        }
    }

    pub fn run(&self) -> Result<SurgeReport, PricingError> {
        let model = self.model();
        match self.multiplier {
            Some(multiplier) if !self.sweep => model.simulate(multiplier).map(SurgeReport::Single),
            _ => {
                let multipliers = SweepSpec::new(
                    self.min.unwrap_or(DEFAULT_MIN),
                    self.max.unwrap_or(DEFAULT_MAX),
                    self.step.unwrap_or(DEFAULT_STEP),
                )?;
                model.sweep(&multipliers).map(SurgeReport::Sweep)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BaseArgs, Commands};
    use clap::Parser as _;

    fn surge_args(argv: &[&str]) -> SurgeArgs {
        let args = BaseArgs::try_parse_from(["fareopt", "surge"].iter().chain(argv)).unwrap();
        match args.command {
            Commands::Surge { args, .. } => args,
            other => panic!("parsed {other:?}"),
        }
    }

    #[test]
    fn test_single() {
        let SurgeReport::Single(outcome) = surge_args(&["1.5"]).run().unwrap() else {
            panic!("expected a single outcome");
        };
        assert_eq!(outcome.demand, 1600.0);
        assert_eq!(outcome.revenue, 28800.0);
    }

    #[test]
    fn test_sweep() {
        let SurgeReport::Sweep(sweep) = surge_args(&["--sweep"]).run().unwrap() else {
            panic!("expected a sweep");
        };
        assert_eq!(sweep.outcomes.len(), 21);
        // 1.7 and 1.8 tie in exact arithmetic; the rounding error of 1.0 + 7 * 0.1 favours 1.7
        assert!((sweep.best.multiplier - 1.7).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_bounds() {
        let SurgeReport::Sweep(sweep) = surge_args(&["--sweep", "--min", "1.5", "--max", "2"])
            .run()
            .unwrap()
        else {
            panic!("expected a sweep");
        };
        assert_eq!(sweep.outcomes.len(), 6);
        assert_eq!(sweep.outcomes[0].multiplier, 1.5);
        assert_eq!(sweep.best.multiplier, 1.7);
    }

    #[test]
    fn test_custom_model() {
        let args = surge_args(&["2", "--base-demand", "1000", "--demand-drop", "100"]);
        let SurgeReport::Single(outcome) = args.run().unwrap() else {
            panic!("expected a single outcome");
        };
        assert_eq!(outcome.demand, 900.0);
        assert_eq!(outcome.revenue, 900.0 * 12.0 * 2.0);
    }

    #[test]
    fn test_multiplier_or_sweep() {
        assert!(BaseArgs::try_parse_from(["fareopt", "surge"]).is_err());
        assert!(BaseArgs::try_parse_from(["fareopt", "surge", "1.5", "--sweep"]).is_err());
        assert!(BaseArgs::try_parse_from(["fareopt", "surge", "1.5", "--min", "2"]).is_err());
        assert!(BaseArgs::try_parse_from(["fareopt", "surge", "1.5", "--step", "0.5"]).is_err());
    }
}
