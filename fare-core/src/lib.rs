#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Domain models for the pricing pipeline.
///
/// These are data structures with validation and a little classification
/// logic; the demand model, curve generation and optimization that operate
/// on them are implemented by `fare-solver`.
pub mod models;

mod error;
pub use error::ConfigError;

/// Field-level validation helpers shared by every model.
///
/// Each helper takes the name of the field it is checking so that the
/// resulting [`ConfigError`] identifies the offending input.
pub mod check {
    pub use crate::error::{finite, non_negative, positive};
}
