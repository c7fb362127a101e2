mod cli;
mod commands;
mod config;
mod file_io;
mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::*;

fn init_tracing(verbose: bool) {
    let default = if verbose { "d2sockets=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Configure { set_manifest, show } => {
            commands::configure::handle(set_manifest, show)?;
        }

        Commands::Inspect {
            profile,
            instance,
            json,
        } => {
            commands::inspect::handle(
                cli.manifest.as_deref(),
                &profile,
                instance.as_deref(),
                json,
            )?;
        }

        Commands::Definition { hash, json } => {
            commands::definition::handle(cli.manifest.as_deref(), hash, json)?;
        }
    }

    Ok(())
}
