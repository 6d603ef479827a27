mod cli;
mod config;
mod error;
mod execution;
mod output;
mod package_managers;
mod prompt;
mod scaffold;
mod templates;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::Cli;
use crate::error::ScaffoldError;
use crate::output::Output;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(err) = cli.execute() {
        Output::new(false).error(&format!("{:#}", err));
        let code = err
            .downcast_ref::<ScaffoldError>()
            .map_or(1, ScaffoldError::exit_code);
        std::process::exit(code);
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                0 => EnvFilter::new("warn"),
                1 => EnvFilter::new("debug"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
