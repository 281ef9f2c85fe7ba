use crate::{
    ConfigError,
    error::{finite, non_negative, positive},
};

/// How strongly the competition level steepens the elasticity.
///
/// A fully competitive market (`competition_level = 1`) makes demand
/// `COMPETITION_SENSITIVITY` more elastic than the operator-supplied value.
pub const COMPETITION_SENSITIVITY: f64 = 0.5;

/// The formula used to turn a candidate price into a demand multiplier.
///
/// The two formulas are algebraically the same curve but round differently,
/// and existing pricing tools use one or the other. Both are kept as explicit
/// strategies; they coincide at the reference price.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DemandForm {
    /// Constant elasticity: `(price / reference_price) ^ e`
    #[default]
    Ratio,
    /// Percentage change: `(1 + (price - reference_price) / reference_price) ^ e`
    Offset,
}

/// A coarse reading of how price-sensitive demand is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ElasticityClass {
    /// `e > -1`: demand is relatively insensitive to price changes
    Inelastic,
    /// `-2 <= e <= -1`
    UnitElastic,
    /// `e < -2`
    HighlyElastic,
}

impl ElasticityClass {
    /// Classify an elasticity coefficient
    pub fn of(elasticity: f64) -> Self {
        if elasticity > -1.0 {
            Self::Inelastic
        } else if elasticity < -2.0 {
            Self::HighlyElastic
        } else {
            Self::UnitElastic
        }
    }
}

/// The parameters of the demand model.
///
/// Demand is anchored at `(reference_price, reference_demand)` and scaled away
/// from it according to the (effective) elasticity, the seasonal factor, and
/// an optional cap on the size of the market.
///
/// The fields are public plain data; call [`ElasticityConfig::validate`] (the
/// solver does so on every entry point) before trusting them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElasticityConfig {
    /// The price at which `reference_demand` is observed (positive)
    pub reference_price: f64,
    /// Demand at the reference price (non-negative)
    pub reference_demand: f64,
    /// Percentage change in demand per percentage change in price, typically negative
    pub elasticity: f64,
    /// An upper bound on demand, unbounded if omitted
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub market_cap: Option<f64>,
    /// A linear multiplier on demand (positive)
    #[cfg_attr(feature = "serde", serde(default = "unit"))]
    pub seasonal_factor: f64,
    /// The degree of competition in [0, 1]; steepens the effective elasticity
    #[cfg_attr(feature = "serde", serde(default))]
    pub competition_level: f64,
    /// Which demand formula to evaluate
    #[cfg_attr(feature = "serde", serde(default))]
    pub form: DemandForm,
}

#[cfg(feature = "serde")]
fn unit() -> f64 {
    1.0
}

impl ElasticityConfig {
    /// Creates a config with no market cap, no seasonality and no competition
    pub fn new(reference_price: f64, reference_demand: f64, elasticity: f64) -> Self {
        Self {
            reference_price,
            reference_demand,
            elasticity,
            market_cap: None,
            seasonal_factor: 1.0,
            competition_level: 0.0,
            form: DemandForm::default(),
        }
    }

    /// Caps demand at `market_cap`
    pub fn with_market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = Some(market_cap);
        self
    }

    /// Scales demand by `seasonal_factor`
    pub fn with_seasonal_factor(mut self, seasonal_factor: f64) -> Self {
        self.seasonal_factor = seasonal_factor;
        self
    }

    /// Steepens the elasticity according to `competition_level`
    pub fn with_competition_level(mut self, competition_level: f64) -> Self {
        self.competition_level = competition_level;
        self
    }

    /// Selects the demand formula
    pub fn with_form(mut self, form: DemandForm) -> Self {
        self.form = form;
        self
    }

    /// Checks every field against its constraint
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint, in field declaration order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("reference_price", self.reference_price)?;
        non_negative("reference_demand", self.reference_demand)?;
        finite("elasticity", self.elasticity)?;
        if let Some(cap) = self.market_cap {
            // An explicit infinite cap is the same as no cap at all
            if cap.is_nan() {
                return Err(ConfigError::NotANumber {
                    field: "market_cap",
                });
            }
            if cap < 0.0 {
                return Err(ConfigError::Negative {
                    field: "market_cap",
                    value: cap,
                });
            }
        }
        positive("seasonal_factor", self.seasonal_factor)?;
        let competition = finite("competition_level", self.competition_level)?;
        if !(0.0..=1.0).contains(&competition) {
            return Err(ConfigError::OutOfRange {
                field: "competition_level",
                value: competition,
                range: "[0, 1]",
            });
        }
        Ok(())
    }

    /// The elasticity after accounting for competition
    pub fn effective_elasticity(&self) -> f64 {
        self.elasticity - self.competition_level * COMPETITION_SENSITIVITY
    }

    /// The market cap, or positive infinity if there is none
    pub fn market_cap_or_inf(&self) -> f64 {
        self.market_cap.unwrap_or(f64::INFINITY)
    }

    /// Classifies the effective elasticity
    pub fn elasticity_class(&self) -> ElasticityClass {
        ElasticityClass::of(self.effective_elasticity())
    }
}
