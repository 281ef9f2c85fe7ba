use crate::{
    ConfigError,
    error::{finite, non_negative},
};

/// The cost structure of serving demand.
///
/// Supplying a cost model turns a revenue-only sweep into one that also
/// reports cost, profit and margin, and enables the margin-floor objective.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    /// Cost incurred per unit of demand served (non-negative)
    pub variable_cost_per_unit: f64,
    /// Cost incurred regardless of demand (non-negative)
    pub fixed_cost: f64,
    /// The minimum acceptable profit margin, in [0, 1)
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_margin: f64,
}

impl CostModel {
    /// Creates a cost model without validation
    pub fn new(variable_cost_per_unit: f64, fixed_cost: f64, target_margin: f64) -> Self {
        Self {
            variable_cost_per_unit,
            fixed_cost,
            target_margin,
        }
    }

    /// Checks every field against its constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("variable_cost_per_unit", self.variable_cost_per_unit)?;
        non_negative("fixed_cost", self.fixed_cost)?;
        let margin = finite("target_margin", self.target_margin)?;
        if !(0.0..1.0).contains(&margin) {
            return Err(ConfigError::OutOfRange {
                field: "target_margin",
                value: margin,
                range: "[0, 1)",
            });
        }
        Ok(())
    }

    /// Total cost of serving `demand` units
    pub fn cost(&self, demand: f64) -> f64 {
        self.variable_cost_per_unit * demand + self.fixed_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost() {
        let model = CostModel::new(8.0, 50000.0, 0.3);
        assert_eq!(model.cost(0.0), 50000.0);
        assert_eq!(model.cost(2500.0), 70000.0);
    }

    #[test]
    fn test_valid() {
        assert_eq!(CostModel::new(0.0, 0.0, 0.0).validate(), Ok(()));
        assert_eq!(CostModel::new(8.0, 50000.0, 0.3).validate(), Ok(()));
    }

    #[test]
    fn test_target_margin_excludes_one() {
        assert_eq!(
            CostModel::new(8.0, 0.0, 1.0).validate(),
            Err(ConfigError::OutOfRange {
                field: "target_margin",
                value: 1.0,
                range: "[0, 1)",
            })
        );
        assert!(CostModel::new(8.0, 0.0, -0.1).validate().is_err());
    }

    #[test]
    fn test_negative_costs() {
        assert!(matches!(
            CostModel::new(-1.0, 0.0, 0.2).validate(),
            Err(ConfigError::Negative {
                field: "variable_cost_per_unit",
                ..
            })
        ));
        assert!(matches!(
            CostModel::new(1.0, -10.0, 0.2).validate(),
            Err(ConfigError::Negative {
                field: "fixed_cost",
                ..
            })
        ));
    }

    #[test]
    fn test_deserialize_without_margin() {
        let raw = r#"{ "variable_cost_per_unit": 8.0, "fixed_cost": 50000.0 }"#;
        let model = serde_json::from_str::<CostModel>(raw).unwrap();
        assert_eq!(model, CostModel::new(8.0, 50000.0, 0.0));
    }
}
