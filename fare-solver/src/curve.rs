//! Sweeps the demand model over a price range.

use crate::{PricingError, demand};
use fare_core::models::{CostModel, ElasticityConfig, PricePoint, SweepSpec};
use tracing::{Level, event};

/// Sweeps at least this long are split across threads
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Evaluate the demand model (and, if given, the cost model) at every price of the sweep.
///
/// The result is ordered by ascending price, has exactly
/// [`SweepSpec::point_count`] rows, and is a pure function of the inputs:
/// evaluating the same inputs twice yields bit-identical rows.
///
/// All inputs are validated before any point is evaluated, and the first
/// point that fails aborts the whole sweep; there is no partial output.
pub fn generate(
    config: &ElasticityConfig,
    sweep: &SweepSpec,
    cost_model: Option<&CostModel>,
) -> Result<Vec<PricePoint>, PricingError> {
    config.validate()?;
    if let Some(model) = cost_model {
        model.validate()?;
    }

    let points = evaluate_all(config, sweep, cost_model)?;

    event!(
        Level::DEBUG,
        points = points.len(),
        min_price = sweep.min_price(),
        max_price = sweep.max_price(),
        step = sweep.step(),
        "generated price curve"
    );

    Ok(points)
}

fn point_at(
    price: f64,
    config: &ElasticityConfig,
    cost_model: Option<&CostModel>,
) -> Result<PricePoint, PricingError> {
    let demand = demand::evaluate(price, config)?;
    Ok(PricePoint::evaluate(price, demand, cost_model))
}

fn evaluate_all(
    config: &ElasticityConfig,
    sweep: &SweepSpec,
    cost_model: Option<&CostModel>,
) -> Result<Vec<PricePoint>, PricingError> {
    // Each point is independent, so a long sweep can be evaluated in parallel;
    // collecting an indexed parallel iterator preserves the price order.
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if sweep.point_count() >= PARALLEL_THRESHOLD {
            let prices = sweep.prices().collect::<Vec<_>>();
            return prices
                .into_par_iter()
                .map(|price| point_at(price, config, cost_model))
                .collect();
        }
    }

    sweep
        .prices()
        .map(|price| point_at(price, config, cost_model))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fare_core::ConfigError;

    #[test]
    fn test_length_and_order() {
        let config = ElasticityConfig::new(15.0, 2000.0, -1.2);
        let sweep = SweepSpec::new(5.0, 30.0, 0.5).unwrap();
        let points = generate(&config, &sweep, None).unwrap();

        assert_eq!(points.len(), 51);
        assert_eq!(points.first().map(|p| p.price), Some(5.0));
        assert_eq!(points.last().map(|p| p.price), Some(30.0));
        assert!(points.windows(2).all(|w| w[0].price < w[1].price));
        assert!(points.iter().all(|p| p.profit.is_none()));
    }

    #[test]
    fn test_invalid_cost_model_rejected_up_front() {
        let config = ElasticityConfig::new(15.0, 2000.0, -1.2);
        let sweep = SweepSpec::new(5.0, 30.0, 0.5).unwrap();
        let cost = CostModel::new(8.0, 100.0, 1.2);

        assert!(matches!(
            generate(&config, &sweep, Some(&cost)),
            Err(PricingError::InvalidConfig(ConfigError::OutOfRange {
                field: "target_margin",
                ..
            }))
        ));
    }

    #[test]
    fn test_domain_error_aborts_sweep() {
        let config = ElasticityConfig::new(15.0, 2000.0, -1.2);
        let sweep = SweepSpec::new(-2.0, 10.0, 1.0).unwrap();
        assert!(generate(&config, &sweep, None).unwrap_err().is_domain_error());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let config = ElasticityConfig::new(15.0, 2000.0, -1.2).with_market_cap(50000.0);
        let cost = CostModel::new(6.0, 1000.0, 0.2);
        let sweep = SweepSpec::new(1.0, 100.0, 0.01).unwrap();
        assert!(sweep.point_count() >= PARALLEL_THRESHOLD);

        let parallel = generate(&config, &sweep, Some(&cost)).unwrap();
        let sequential = sweep
            .prices()
            .map(|price| point_at(price, &config, Some(&cost)).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(parallel, sequential);
    }
}
