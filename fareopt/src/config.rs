//! Layered settings for the command line tools.
//!
//! Values are taken from, in increasing order of precedence, the defaults
//! below, an optional TOML file and `FARE_`-prefixed environment variables.

use crate::CliError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the command line tools can be configured with
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Settings {
    /// How outcomes are written
    #[serde(default)]
    pub output: OutputSettings,
}

/// Presentation of the JSON written by every subcommand
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    /// Indent the JSON output
    pub pretty: bool,
    /// Round money to cents and rides to whole numbers before writing
    pub round: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            pretty: true,
            round: false,
        }
    }
}

impl Settings {
    /// Load the settings, layering an optional file and the environment over
    /// the defaults.
    ///
    /// Environment variables are mapped using the pattern
    /// `FARE_<SECTION>__<KEY>`, e.g. `FARE_OUTPUT__ROUND=true` sets
    /// `output.round`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            if !path.exists() {
                return Err(CliError::MissingConfig(path.to_owned()).into());
            }
            config = config.add_source(config::File::from(path));
        }

        config = config.add_source(
            config::Environment::with_prefix("FARE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        config.build()?.try_deserialize().map_err(Into::into)
    }
}
