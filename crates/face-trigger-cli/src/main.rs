//! Face Trigger CLI - Replay facial signal recordings as trigger events.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{evaluators, replay, Cli, Commands, ExitCode};
use config::AppConfig;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = AppConfig::load();

    let exit_code = match cli.command {
        Some(Commands::Replay(args)) => run_replay(args, &config),
        Some(Commands::Evaluators(args)) => {
            let args = evaluators::EvaluatorsArgs::with_config(args, &config);
            match evaluators::run(&args) {
                Ok(()) => ExitCode::Success,
                Err(e) => {
                    eprintln!("error: {e:#}");
                    ExitCode::Error
                }
            }
        }
        // Default behavior: replay with flattened args
        None => run_replay(cli.replay, &config),
    };

    exit_code.into()
}

fn run_replay(args: replay::ReplayArgs, config: &AppConfig) -> ExitCode {
    let args = replay::ReplayArgs::with_config(args, config);
    match replay::run(&args) {
        Ok(result) => result.exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::Error
        }
    }
}
