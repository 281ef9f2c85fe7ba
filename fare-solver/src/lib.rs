#![warn(missing_docs)]
//! The pricing pipeline: a demand model, a curve generator that sweeps it over
//! a price range, an optimizer that picks a price from the curve, and a risk
//! classifier for the recommended change.
//!
//! Every stage is a pure function of its inputs. [`compute_pricing`] and
//! [`PricingRequest::evaluate`] chain the stages together.

/**
 * The demand model and the price sweep built on top of it.
 */
pub mod demand;
pub mod curve;

/**
 * Price selection and the risk assessment of the selected price.
 */
pub mod optimize;
pub mod risk;

/**
 * The end-to-end pipeline and the ready-made requests it ships with.
 */
mod engine;
pub use engine::*;
pub mod presets;

/// The linear surge-multiplier simulator
pub mod surge;

/// Named scenario files, for use with serde
#[cfg(feature = "io")]
pub mod io;

mod error;
pub use error::PricingError;

pub use fare_core::{ConfigError, models::*};

// We use non-std collections here for their ordering semantics and performance
/// An insertion-ordered map
pub type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
