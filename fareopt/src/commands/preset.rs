use clap::ValueEnum;
use fare_solver::{ConfigError, io::ScenarioSet, presets::Preset};

// Mirrors `Preset` so that clap can list and complete the names
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum PresetName {
    ElasticityCalculator,
    RevenueOptimizer,
}

impl From<PresetName> for Preset {
    fn from(value: PresetName) -> Self {
        match value {
            PresetName::ElasticityCalculator => Preset::ElasticityCalculator,
            PresetName::RevenueOptimizer => Preset::RevenueOptimizer,
        }
    }
}

impl PresetName {
    /// The scenario set for `names`, or for every preset if `names` is empty
    pub fn scenarios(names: &[PresetName]) -> Result<ScenarioSet, ConfigError> {
        if names.is_empty() {
            ScenarioSet::from_presets(Preset::ALL)
        } else {
            ScenarioSet::from_presets(names.iter().copied().map(Preset::from))
        }
    }
}
