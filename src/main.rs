use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod artifact;
mod cli;
mod manifest;
mod output_xml;
mod paths;
mod slug;
mod staging;
mod steps;
mod timestamp;
mod workflow;

fn main() -> Result<()> {
    init_tracing();
    let args = cli::Args::parse();
    workflow::run(&args)?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
