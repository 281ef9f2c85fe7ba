use crate::{
    ConfigError,
    error::{finite, positive},
};

/// The largest number of prices a single sweep may visit
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// How close the last stepped price must be to `max_price` to count as hitting it
pub const SNAP_TOLERANCE: f64 = 1e-9;

// A stepped price carries at most 1.5 ulps of rounding error (product plus
// sum), so steps above this many ulps keep the prices strictly ascending.
const MIN_STEP_ULPS: f64 = 4.0;

// Distance from |x| to the next larger f64
fn ulp(x: f64) -> f64 {
    let x = x.abs();
    f64::from_bits(x.to_bits() + 1) - x
}

/// An evenly stepped scan over a closed price interval.
///
/// The sweep visits `min_price + i * step` for every `i` that stays within the
/// interval. If the interval is not an exact multiple of the step, `max_price`
/// itself is appended so that both endpoints are always included.
///
/// A `SweepSpec` can only be obtained through validation, so downstream code
/// may rely on `min_price <= max_price` and a positive, finite step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SweepSpecDto", into = "SweepSpecDto")
)]
pub struct SweepSpec {
    min_price: f64,
    max_price: f64,
    step: f64,
    // floor((max - min) / step), cached at validation time
    steps: usize,
    // whether max_price must be appended after the last step
    snap: bool,
}

impl SweepSpec {
    /// Creates a new sweep, validating the bounds and step
    pub fn new(min_price: f64, max_price: f64, step: f64) -> Result<Self, ConfigError> {
        Self::try_from(SweepSpecDto {
            min_price,
            max_price,
            step,
        })
    }

    /// The first price visited
    pub fn min_price(&self) -> f64 {
        self.min_price
    }

    /// The last price visited
    pub fn max_price(&self) -> f64 {
        self.max_price
    }

    /// The spacing between consecutive prices (except possibly the snapped final one)
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The number of prices the sweep visits (always at least one)
    pub fn point_count(&self) -> usize {
        self.steps + 1 + usize::from(self.snap)
    }

    /// The visited prices, in ascending order
    ///
    /// Each price is computed directly from its index rather than by repeated
    /// addition, so long sweeps do not accumulate drift.
    pub fn prices(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        (0..=self.steps)
            .map(|i| (self.min_price + i as f64 * self.step).min(self.max_price))
            .chain(self.snap.then_some(self.max_price))
    }
}

/// DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct SweepSpecDto {
    /// The lowest price to evaluate
    pub min_price: f64,
    /// The highest price to evaluate
    pub max_price: f64,
    /// The spacing between evaluated prices (positive)
    pub step: f64,
}

impl From<SweepSpec> for SweepSpecDto {
    fn from(value: SweepSpec) -> Self {
        Self {
            min_price: value.min_price,
            max_price: value.max_price,
            step: value.step,
        }
    }
}

impl TryFrom<SweepSpecDto> for SweepSpec {
    type Error = ConfigError;

    /// Validates the DTO and precomputes the grid shape
    ///
    /// # Validation
    ///
    /// 1. Both bounds are finite
    /// 2. The step is finite and positive
    /// 3. `min_price <= max_price`
    /// 4. The grid has at most [`MAX_SWEEP_POINTS`] points
    /// 5. The step is coarse enough that every price is distinct
    fn try_from(value: SweepSpecDto) -> Result<Self, Self::Error> {
        let SweepSpecDto {
            min_price,
            max_price,
            step,
        } = value;

        finite("min_price", min_price)?;
        finite("max_price", max_price)?;
        positive("step", step)?;

        if min_price > max_price {
            return Err(ConfigError::ReversedRange {
                min: min_price,
                max: max_price,
            });
        }

        let quotient = ((max_price - min_price) / step).floor();
        // The +1 accounts for min_price itself; the snapped endpoint is checked below
        if !(quotient + 1.0 <= MAX_SWEEP_POINTS as f64) {
            return Err(ConfigError::SweepTooLarge {
                points: quotient + 1.0,
                limit: MAX_SWEEP_POINTS,
            });
        }

        let magnitude = min_price.abs().max(max_price.abs());
        if min_price < max_price && step <= MIN_STEP_ULPS * ulp(magnitude) {
            return Err(ConfigError::StepTooSmall { step, magnitude });
        }

        let steps = quotient as usize;
        let last = (min_price + steps as f64 * step).min(max_price);
        let snap = (max_price - last).abs() > SNAP_TOLERANCE;

        if snap && steps + 2 > MAX_SWEEP_POINTS {
            return Err(ConfigError::SweepTooLarge {
                points: quotient + 2.0,
                limit: MAX_SWEEP_POINTS,
            });
        }

        Ok(Self {
            min_price,
            max_price,
            step,
            steps,
            snap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        let sweep = SweepSpec::new(5.0, 30.0, 0.5).unwrap();
        let prices = sweep.prices().collect::<Vec<_>>();
        assert_eq!(sweep.point_count(), 51);
        assert_eq!(prices.len(), 51);
        assert_eq!(prices[0], 5.0);
        assert_eq!(prices[1], 5.5);
        assert_eq!(prices[50], 30.0);
    }

    #[test]
    fn test_snaps_to_max_price() {
        let sweep = SweepSpec::new(0.0, 1.0, 0.3).unwrap();
        let prices = sweep.prices().collect::<Vec<_>>();
        assert_eq!(sweep.point_count(), 5);
        assert_eq!(prices.len(), 5);
        assert_eq!(prices.last(), Some(&1.0));
        assert!(prices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_single_point() {
        let sweep = SweepSpec::new(12.0, 12.0, 1.0).unwrap();
        assert_eq!(sweep.prices().collect::<Vec<_>>(), vec![12.0]);
    }

    #[test]
    fn test_step_wider_than_range() {
        let sweep = SweepSpec::new(10.0, 11.0, 5.0).unwrap();
        assert_eq!(sweep.prices().collect::<Vec<_>>(), vec![10.0, 11.0]);
    }

    #[test]
    fn test_reversed_range() {
        assert_eq!(
            SweepSpec::new(30.0, 5.0, 0.5).unwrap_err(),
            ConfigError::ReversedRange {
                min: 30.0,
                max: 5.0
            }
        );
    }

    #[test]
    fn test_bad_step() {
        for step in [0.0, -0.5] {
            assert!(matches!(
                SweepSpec::new(5.0, 30.0, step).unwrap_err(),
                ConfigError::NonPositive { field: "step", .. }
            ));
        }
        assert_eq!(
            SweepSpec::new(5.0, 30.0, f64::NAN).unwrap_err(),
            ConfigError::NotANumber { field: "step" }
        );
    }

    #[test]
    fn test_infinite_bounds() {
        assert!(matches!(
            SweepSpec::new(f64::NEG_INFINITY, 30.0, 0.5).unwrap_err(),
            ConfigError::NotFinite {
                field: "min_price",
                ..
            }
        ));
    }

    #[test]
    fn test_too_many_points() {
        assert!(matches!(
            SweepSpec::new(0.0, 1.0, 1e-9).unwrap_err(),
            ConfigError::SweepTooLarge { .. }
        ));
    }

    #[test]
    fn test_step_below_resolution() {
        // Adjacent f64 values near 1e16 are 2 apart
        assert_eq!(
            SweepSpec::new(1e16, 1e16 + 4.0, 1.0).unwrap_err(),
            ConfigError::StepTooSmall {
                step: 1.0,
                magnitude: 1e16 + 4.0
            }
        );
        assert!(matches!(
            SweepSpec::new(1e16, 1e16 + 30.0, 1.5).unwrap_err(),
            ConfigError::StepTooSmall { .. }
        ));

        // A degenerate range has nothing to separate
        assert!(SweepSpec::new(1e16, 1e16, 1.0).is_ok());
    }

    #[test]
    fn test_large_prices_stay_ascending() {
        let sweep = SweepSpec::new(1e12, 1e12 + 10.0, 0.01).unwrap();
        let prices = sweep.prices().collect::<Vec<_>>();
        assert_eq!(prices.len(), sweep.point_count());
        assert!(prices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_deserialize_validates() {
        let raw = r#"{ "min_price": 5.0, "max_price": 30.0, "step": 0.5 }"#;
        assert!(serde_json::from_str::<SweepSpec>(raw).is_ok());

        let raw = r#"{ "min_price": 5.0, "max_price": 30.0, "step": 0.0 }"#;
        assert!(serde_json::from_str::<SweepSpec>(raw).is_err());
    }

    #[test]
    fn test_serialize_omits_cache() {
        let sweep = SweepSpec::new(8.0, 30.0, 0.5).unwrap();
        let json = serde_json::to_value(&sweep).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "min_price": 8.0, "max_price": 30.0, "step": 0.5 })
        );
    }
}
