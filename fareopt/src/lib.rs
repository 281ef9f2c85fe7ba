use clap::Parser;
use fare_solver::io::ScenarioSet;
use std::path::PathBuf;
use tracing::{Level, event};

mod io;
pub use io::*;

mod config;
pub use config::{OutputSettings, Settings};

mod round;
pub use round::Round;

mod commands;
pub use commands::*;

// The top-level arguments: where to find settings, and which subcommand to execute
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to a TOML settings file
    #[arg(short, long, global = true, env = "FARE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let Settings { output: settings } = Settings::load(self.config.as_deref())?;
        event!(
            Level::DEBUG,
            pretty = settings.pretty,
            round = settings.round,
            "loaded settings"
        );

        match self.command {
            Commands::Solve { io } => {
                let input = io.read()?;
                let scenarios = serde_json::from_reader::<_, ScenarioSet>(input)?;
                let mut outcomes = scenarios.evaluate()?;
                if settings.round {
                    outcomes.round();
                }
                io.output.emit(&outcomes, settings.pretty)?;
            }
            Commands::Preset {
                names,
                emit,
                output,
            } => {
                let scenarios = PresetName::scenarios(&names)?;
                if emit {
                    output.emit(&scenarios, settings.pretty)?;
                } else {
                    let mut outcomes = scenarios.evaluate()?;
                    if settings.round {
                        outcomes.round();
                    }
                    output.emit(&outcomes, settings.pretty)?;
                }
            }
            Commands::Surge { args, output } => {
                let mut report = args.run()?;
                if settings.round {
                    report.round();
                }
                output.emit(&report, settings.pretty)?;
            }
            Commands::Schema { output } => {
                let schema = schemars::schema_for!(ScenarioSet);
                output.emit(&schema, settings.pretty)?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Config file {} does not exist", .0.display())]
    MissingConfig(PathBuf),
}
