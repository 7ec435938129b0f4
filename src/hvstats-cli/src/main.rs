mod cli;
mod commands;
mod config;
mod file_io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hvstats=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Configure { ranges, show } => {
            commands::configure::handle(ranges, show)?;
        }

        Commands::Infer {
            records,
            ranges,
            compact,
        } => {
            commands::infer::infer(&records, ranges, compact)?;
        }

        Commands::Explain {
            record,
            category,
            stat,
            ranges,
        } => {
            commands::infer::explain(&record, category, &stat, ranges)?;
        }

        Commands::Name { name, json } => {
            commands::name::name(&name, json)?;
        }

        Commands::Paths { name, json } => {
            commands::name::paths(&name, json)?;
        }
    }

    Ok(())
}
