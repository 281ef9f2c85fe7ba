/// The quantity the optimizer maximizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Objective {
    /// Pick the price with the largest revenue
    #[default]
    MaximizeRevenue,
    /// Pick the price with the largest revenue among those meeting the target margin
    MaximizeProfitWithMarginFloor,
}

/// What to recommend when no swept price meets the margin floor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FloorFallback {
    /// Recommend the first (lowest) price of the sweep.
    ///
    /// The first point rarely meets any business goal; prefer
    /// [`FloorFallback::HighestMargin`] or [`FloorFallback::Strict`] when the
    /// floor matters.
    #[default]
    FirstPoint,
    /// Recommend the price with the highest margin, i.e. the one closest to the floor
    HighestMargin,
    /// Keep the current price: recommend the swept point at the current
    /// price, or the first point if the current price is not on the grid
    CurrentPrice,
    /// Refuse to recommend anything
    Strict,
}

/// A minimum-margin constraint for the margin floor objective
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarginFloor {
    /// Points with a margin below this are ineligible
    pub target_margin: f64,
    /// What to do when every point is ineligible
    pub fallback: FloorFallback,
    /// The price charged today, used by [`FloorFallback::CurrentPrice`]
    pub current_price: Option<f64>,
}

impl MarginFloor {
    /// Creates a margin floor
    pub fn new(target_margin: f64, fallback: FloorFallback) -> Self {
        Self {
            target_margin,
            fallback,
            current_price: None,
        }
    }

    /// Records the price charged today
    pub fn with_current_price(mut self, current_price: f64) -> Self {
        self.current_price = Some(current_price);
        self
    }
}
