mod app;
mod cli;
mod commands;
mod feed;
mod mcp;
mod paths;
mod settings;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // stdout carries JSON-RPC when serving, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => commands::serve::run(&cli.sources),
        Commands::Targets { filters } => commands::targets::run(&cli.sources, filters.into()),
        Commands::Prompt {
            location,
            day_range,
        } => commands::prompt::run(&location, &day_range),
        Commands::Version => commands::version::run(),
    }
}
