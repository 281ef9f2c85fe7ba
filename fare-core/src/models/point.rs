use crate::models::CostModel;

/// One row of a price sweep: the demand at a price and everything derived from it.
///
/// Values are unrounded; rounding to cents or whole rides is a presentation
/// concern for whoever consumes the curve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePoint {
    /// The candidate price
    pub price: f64,
    /// Expected demand at `price`
    pub demand: f64,
    /// `price * demand`
    pub revenue: f64,
    /// Total cost of serving `demand`, if a cost model was supplied
    pub cost: Option<f64>,
    /// `revenue - cost`, if a cost model was supplied
    pub profit: Option<f64>,
    /// `profit / revenue` (zero when there is no revenue), if a cost model was supplied
    pub margin: Option<f64>,
}

impl PricePoint {
    /// Derives revenue, and cost/profit/margin when `cost_model` is present
    pub fn evaluate(price: f64, demand: f64, cost_model: Option<&CostModel>) -> Self {
        let revenue = price * demand;
        let (cost, profit, margin) = match cost_model {
            Some(model) => {
                let cost = model.cost(demand);
                let profit = revenue - cost;
                let margin = if revenue > 0.0 { profit / revenue } else { 0.0 };
                (Some(cost), Some(profit), Some(margin))
            }
            None => (None, None, None),
        };

        Self {
            price,
            demand,
            revenue,
            cost,
            profit,
            margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_only() {
        let point = PricePoint::evaluate(15.0, 2000.0, None);
        assert_eq!(point.revenue, 30000.0);
        assert_eq!(point.cost, None);
        assert_eq!(point.profit, None);
        assert_eq!(point.margin, None);
    }

    #[test]
    fn test_with_costs() {
        let model = CostModel::new(8.0, 10000.0, 0.3);
        let point = PricePoint::evaluate(16.0, 2500.0, Some(&model));
        assert_eq!(point.revenue, 40000.0);
        assert_eq!(point.cost, Some(30000.0));
        assert_eq!(point.profit, Some(10000.0));
        assert_eq!(point.margin, Some(0.25));
    }

    #[test]
    fn test_zero_revenue_margin() {
        let model = CostModel::new(8.0, 10000.0, 0.3);
        let point = PricePoint::evaluate(16.0, 0.0, Some(&model));
        assert_eq!(point.revenue, 0.0);
        assert_eq!(point.profit, Some(-10000.0));
        assert_eq!(point.margin, Some(0.0));
    }
}
