use crate::{Map, PricingError, PricingOutcome, PricingRequest, presets::Preset};
use fare_core::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{Level, event, span};

macro_rules! string_wrapper {
    ($struct:ident) => {
        #[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
        #[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
        #[serde(transparent)]
        #[doc = concat!("A newtype wrapper for ", stringify!($struct))]
        pub struct $struct(String);

        impl fmt::Display for $struct {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $struct {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

string_wrapper!(ScenarioId);

/// A collection of named pricing requests, as read from a scenario file
///
/// Scenarios are evaluated and reported in the order they appear in the file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct ScenarioSet(pub Map<ScenarioId, PricingRequest>);

/// The outcome of every scenario in a set, keyed like the input
pub type ScenarioOutcomes = Map<ScenarioId, PricingOutcome>;

/// A scenario that failed to evaluate
#[derive(Debug, thiserror::Error)]
#[error("scenario {id}: {source}")]
pub struct ScenarioError {
    /// The failing scenario
    pub id: ScenarioId,
    /// Why it failed
    #[source]
    pub source: PricingError,
}

impl ScenarioSet {
    /// A set containing the given presets, named after themselves
    pub fn from_presets(presets: impl IntoIterator<Item = Preset>) -> Result<Self, ConfigError> {
        presets
            .into_iter()
            .map(|preset| {
                preset
                    .request()
                    .map(|request| (ScenarioId::from(preset.name()), request))
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }

    /// Evaluate every scenario, stopping at the first failure
    pub fn evaluate(&self) -> Result<ScenarioOutcomes, ScenarioError> {
        event!(Level::INFO, scenarios = self.0.len(), "evaluating scenarios");
        self.0
            .iter()
            .map(|(id, request)| {
                let span = span!(Level::INFO, "scenario", %id);
                let _guard = span.enter();
                request
                    .evaluate()
                    .map(|outcome| (id.clone(), outcome))
                    .map_err(|source| {
                        event!(Level::ERROR, error = %source, "scenario failed");
                        ScenarioError {
                            id: id.clone(),
                            source,
                        }
                    })
            })
            .collect()
    }
}
