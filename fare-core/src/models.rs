mod config;
mod cost;
mod objective;
mod point;
mod recommendation;
mod risk;
mod sweep;

pub use config::{COMPETITION_SENSITIVITY, DemandForm, ElasticityClass, ElasticityConfig};
pub use cost::CostModel;
pub use objective::{FloorFallback, MarginFloor, Objective};
pub use point::PricePoint;
pub use recommendation::Recommendation;
pub use risk::RiskTier;
pub use sweep::{MAX_SWEEP_POINTS, SNAP_TOLERANCE, SweepSpec, SweepSpecDto};
