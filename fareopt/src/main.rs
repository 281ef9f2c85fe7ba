use clap::Parser as _;
use fareopt::BaseArgs;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

pub fn main() -> anyhow::Result<()> {
    // Outcomes go to stdout, so diagnostics are kept on stderr.
    // Set RUST_LOG (e.g. `RUST_LOG=fare_solver=debug`) to see them.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = BaseArgs::parse();
    args.evaluate()
}
