use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };
    // Logs go to stderr so --json output stays parseable.
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Commands::Fetch { command } => commands::handle_fetch(cli.json, command),
        Commands::Check {
            artifact,
            min_rating,
            max_violations,
            config,
        } => commands::handle_check(
            cli.json,
            artifact,
            *min_rating,
            *max_violations,
            config.as_deref(),
        ),
        Commands::Show { artifact } => commands::handle_show(cli.json, artifact),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            services::output::print_failure(cli.json, &err);
            ExitCode::FAILURE
        }
    }
}
