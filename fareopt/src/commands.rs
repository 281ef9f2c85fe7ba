use super::{IOArgs, OutputArgs};
use clap::Subcommand;

mod preset;
mod surge;
pub use preset::PresetName;
pub use surge::{SurgeArgs, SurgeReport};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate every scenario in a scenario file and report the outcomes
    Solve {
        #[command(flatten)]
        io: IOArgs,
    },

    /// Evaluate the built-in scenarios
    Preset {
        /// The presets to evaluate (all of them if omitted)
        #[arg(value_enum)]
        names: Vec<PresetName>,

        /// Write the scenario file instead of its outcomes
        #[arg(long)]
        emit: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Simulate the effect of surge multipliers on demand and revenue
    Surge {
        #[command(flatten)]
        args: SurgeArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write the JSON schema of scenario files
    Schema {
        #[command(flatten)]
        output: OutputArgs,
    },
}
