use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;

use args::{Cli, Command};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // stdout carries the JSON result, logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match cli.command {
        Command::Analyze(args) => commands::analyze(args, cli.pretty),
        Command::Entities(args) => commands::entities(args, cli.pretty),
        Command::Classify(args) => commands::classify(args, cli.pretty),
        Command::Rubric(args) => commands::rubric(args, cli.pretty),
    }
}
