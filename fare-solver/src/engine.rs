use crate::{PricingError, curve, optimize::optimize, risk::classify};
use fare_core::{
    ConfigError,
    check::positive,
    models::{
        CostModel, ElasticityClass, ElasticityConfig, FloorFallback, MarginFloor, Objective,
        PricePoint, Recommendation, SweepSpec,
    },
};
use tracing::{Level, event};

/// A swept price within this distance of the current price stands in for it
/// when measuring the profit improvement
pub const CURRENT_PRICE_TOLERANCE: f64 = 0.1;

/// Everything needed to run the pricing pipeline once
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingRequest {
    /// The demand model parameters
    pub config: ElasticityConfig,
    /// The prices to evaluate
    #[cfg_attr(feature = "schemars", schemars(with = "fare_core::models::SweepSpecDto"))]
    pub sweep: SweepSpec,
    /// The cost structure, if profit and margin should be reported
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub cost_model: Option<CostModel>,
    /// The metric to maximize
    #[cfg_attr(feature = "serde", serde(default))]
    pub objective: Objective,
    /// What to recommend if the margin floor cannot be met
    #[cfg_attr(feature = "serde", serde(default))]
    pub fallback: FloorFallback,
    /// The price currently charged, defaulting to the reference price
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub current_price: Option<f64>,
}

/// The full output of the pricing pipeline
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingOutcome {
    /// Every swept price, in ascending order
    pub points: Vec<PricePoint>,
    /// The selected price
    pub recommendation: Recommendation,
    /// How price-sensitive the modelled demand is
    pub elasticity_class: ElasticityClass,
}

/// Sweep, optimize and classify in one call.
///
/// The current price is taken to be `config.reference_price` and a margin
/// floor that cannot be met falls back to the first swept price. Use
/// [`PricingRequest`] to control either.
pub fn compute_pricing(
    config: &ElasticityConfig,
    sweep: &SweepSpec,
    cost_model: Option<&CostModel>,
    objective: Objective,
) -> Result<PricingOutcome, PricingError> {
    PricingRequest {
        config: config.clone(),
        sweep: sweep.clone(),
        cost_model: cost_model.cloned(),
        objective,
        fallback: FloorFallback::default(),
        current_price: None,
    }
    .evaluate()
}

impl PricingRequest {
    /// Creates a revenue-maximizing request with no cost model
    pub fn new(config: ElasticityConfig, sweep: SweepSpec) -> Self {
        Self {
            config,
            sweep,
            cost_model: None,
            objective: Objective::default(),
            fallback: FloorFallback::default(),
            current_price: None,
        }
    }

    /// Attaches a cost model
    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = Some(cost_model);
        self
    }

    /// Selects the objective
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Selects the margin floor fallback
    pub fn with_fallback(mut self, fallback: FloorFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Measures risk and profit improvement against `current_price`
    pub fn with_current_price(mut self, current_price: f64) -> Self {
        self.current_price = Some(current_price);
        self
    }

    /// The price the recommendation is compared against
    pub fn current_price(&self) -> f64 {
        self.current_price.unwrap_or(self.config.reference_price)
    }

    /// Run the pipeline.
    ///
    /// All inputs are validated before the sweep starts, so an error is
    /// always returned in place of, never alongside, partial results.
    pub fn evaluate(&self) -> Result<PricingOutcome, PricingError> {
        if let Some(price) = self.current_price {
            positive("current_price", price)?;
        }
        if self.objective == Objective::MaximizeProfitWithMarginFloor && self.cost_model.is_none()
        {
            return Err(ConfigError::MissingCostModel.into());
        }

        let points = curve::generate(&self.config, &self.sweep, self.cost_model.as_ref())?;

        let current_price = self.current_price();
        let floor = self.cost_model.as_ref().map(|model| {
            MarginFloor::new(model.target_margin, self.fallback).with_current_price(current_price)
        });
        let selection = optimize(&points, self.objective, floor.as_ref())?;

        let risk_tier = classify(current_price, selection.point.price);
        let profit_improvement_pct = profit_improvement(&points, &selection.point, current_price);

        event!(
            Level::DEBUG,
            recommended_price = selection.point.price,
            current_price,
            risk = %risk_tier,
            floor_satisfied = selection.floor_satisfied,
            "selected price"
        );

        Ok(PricingOutcome {
            recommendation: Recommendation {
                recommended_price: selection.point.price,
                point: selection.point,
                risk_tier,
                objective_value: selection.objective_value,
                current_price,
                floor_satisfied: selection.floor_satisfied,
                profit_improvement_pct,
            },
            points,
            elasticity_class: self.config.elasticity_class(),
        })
    }
}

// Percentage change in profit from the current price to the recommended one.
// The current price is represented by the first swept point within
// tolerance, falling back to the first point; the denominator is floored at 1
// so that a loss-making current price does not flip the sign.
fn profit_improvement(
    points: &[PricePoint],
    recommended: &PricePoint,
    current_price: f64,
) -> Option<f64> {
    let current = points
        .iter()
        .find(|p| (p.price - current_price).abs() < CURRENT_PRICE_TOLERANCE)
        .or(points.first())?;
    let (optimal, current) = (recommended.profit?, current.profit?);
    Some((optimal - current) / current.max(1.0) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fare_core::models::RiskTier;

    fn sweep() -> SweepSpec {
        SweepSpec::new(5.0, 30.0, 0.5).unwrap()
    }

    #[test]
    fn test_compute_pricing_revenue() {
        let config = ElasticityConfig::new(15.0, 2000.0, -1.2);
        let outcome = compute_pricing(&config, &sweep(), None, Objective::MaximizeRevenue).unwrap();

        assert_eq!(outcome.points.len(), 51);
        assert_eq!(outcome.recommendation.recommended_price, 5.0);
        assert_eq!(outcome.recommendation.current_price, 15.0);
        assert_eq!(outcome.recommendation.risk_tier, RiskTier::High);
        assert_eq!(outcome.recommendation.profit_improvement_pct, None);
        assert_eq!(outcome.elasticity_class, ElasticityClass::UnitElastic);
    }

    #[test]
    fn test_margin_floor_without_costs() {
        let config = ElasticityConfig::new(15.0, 2000.0, -1.2);
        assert_eq!(
            compute_pricing(
                &config,
                &sweep(),
                None,
                Objective::MaximizeProfitWithMarginFloor
            ),
            Err(PricingError::InvalidConfig(ConfigError::MissingCostModel))
        );
    }

    #[test]
    fn test_current_price_must_be_positive() {
        let request = PricingRequest::new(ElasticityConfig::new(15.0, 2000.0, -1.2), sweep())
            .with_current_price(0.0);
        assert!(matches!(
            request.evaluate(),
            Err(PricingError::InvalidConfig(ConfigError::NonPositive {
                field: "current_price",
                ..
            }))
        ));
    }

    #[test]
    fn test_profit_improvement() {
        let cost = CostModel::new(2.0, 0.0, 0.0);
        let points = [5.0, 10.0, 15.0]
            .map(|price| PricePoint::evaluate(price, 100.0, Some(&cost)))
            .to_vec();

        // Profits are 300, 800, 1300
        let improvement = profit_improvement(&points, &points[2], 10.0).unwrap();
        assert_relative_eq!(improvement, 62.5);

        // No swept point near 12, so the first point is used
        let improvement = profit_improvement(&points, &points[2], 12.0).unwrap();
        assert_relative_eq!(improvement, 1000.0 / 300.0 * 100.0);

        let revenue_only = [PricePoint::evaluate(5.0, 100.0, None)];
        assert_eq!(
            profit_improvement(&revenue_only, &revenue_only[0], 5.0),
            None
        );
    }
}
