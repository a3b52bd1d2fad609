//! CLI command definitions and handlers.

pub mod evaluators;
pub mod replay;

use clap::{Parser, Subcommand};

/// Face Trigger - Turn facial expression signals into discrete events
#[derive(Parser)]
#[command(name = "face-trigger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared replay arguments (paths, thresholds, flags).
    #[command(flatten)]
    pub replay: replay::ReplayArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Replay recorded snapshots and print trigger events
    Replay(replay::ReplayArgs),
    /// List enabled evaluators and their thresholds
    Evaluators(evaluators::EvaluatorsArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every frame was read.
    Success = 0,
    /// One or more frames could not be read and were skipped.
    FramesSkipped = 1,
    /// The command failed.
    Error = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}
