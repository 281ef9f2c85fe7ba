use crate::models::{PricePoint, RiskTier};

/// The optimizer's pick, annotated for the consumer
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// The recommended price
    pub recommended_price: f64,
    /// The sweep row at the recommended price
    pub point: PricePoint,
    /// The risk of moving from `current_price` to `recommended_price`
    pub risk_tier: RiskTier,
    /// The value of the metric that was maximized
    pub objective_value: f64,
    /// The price the risk tier is measured against
    pub current_price: f64,
    /// False if the recommendation came from a margin floor fallback
    pub floor_satisfied: bool,
    /// Percentage change in profit relative to the current price, if costs are known
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub profit_improvement_pct: Option<f64>,
}
