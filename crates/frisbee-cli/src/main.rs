//! Frisbee - flying-disc equations of motion from the command line

use clap::Parser;
use frisbee_cli::cli::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");
    frisbee_cli::run(cli)
}
