// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `train` — runs an interactive training session
//   2. `list`  — prints the cases matching a set of filters

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ListArgs, TrainArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "rzp-trainer",
    version = "0.1.0",
    about = "Practice randomized RZP cases from a precomputed solution database."
)]
pub struct Cli {
    /// The subcommand to run (train or list)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::Train(args) => self.run_train(args.clone()),
            Commands::List(args)  => self.run_list(args.clone()),
        }
    }

    /// Handles the `train` subcommand.
    fn run_train(&self, args: TrainArgs) -> Result<()> {
        use crate::application::train_use_case::TrainUseCase;

        tracing::info!("starting interactive session, data dir: {}", args.data_dir);

        let use_case = TrainUseCase::new(args.into());
        use_case.execute()
    }

    /// Handles the `list` subcommand.
    fn run_list(&self, args: ListArgs) -> Result<()> {
        use crate::application::list_use_case::ListUseCase;

        let use_case = ListUseCase::new(args.data_dir.clone(), args.params());
        use_case.execute()
    }
}
