// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `list`
// and all their configurable flags.
//
// Filter flags on `train` are optional on purpose: anything not
// passed keeps the value from the saved settings file, so the
// conversion target is a partial ParamsUpdate rather than full
// parameters.

use clap::{Args, Subcommand};

use crate::application::train_use_case::TrainSessionConfig;
use crate::domain::params::{ParamsUpdate, TrainingParameters};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an interactive training session
    Train(TrainArgs),

    /// List the cases matching a set of filters and exit
    List(ListArgs),
}

/// All arguments for the `train` command.
#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    /// Directory containing the `<rzp>_db_input.csv` dataset files
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    /// Directory for the persisted parameter settings
    #[arg(long, default_value = ".")]
    pub settings_dir: String,

    /// Puzzle-configuration tag to train (e.g. 4c4e)
    #[arg(long)]
    pub rzp: Option<String>,

    /// Longest acceptable solution, in moves
    #[arg(long)]
    pub max_length: Option<u32>,

    /// Smallest acceptable trigger count
    #[arg(long)]
    pub min_trigger: Option<u32>,

    /// Largest acceptable trigger count
    #[arg(long)]
    pub max_trigger: Option<u32>,

    /// Maximum number of solutions shown on reveal
    #[arg(long)]
    pub max_display: Option<u32>,
}

/// Convert CLI TrainArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 — the
/// application layer never sees clap types.
impl From<TrainArgs> for TrainSessionConfig {
    fn from(a: TrainArgs) -> Self {
        TrainSessionConfig {
            data_dir:     a.data_dir,
            settings_dir: a.settings_dir,
            overrides: ParamsUpdate {
                rzp:         a.rzp,
                max_length:  a.max_length,
                min_trigger: a.min_trigger,
                max_trigger: a.max_trigger,
                max_display: a.max_display,
            },
        }
    }
}

/// All arguments for the `list` command
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Directory containing the dataset files
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    /// Puzzle-configuration tag to query
    #[arg(long, default_value = "4c4e")]
    pub rzp: String,

    /// Longest acceptable solution, in moves
    #[arg(long, default_value_t = 5)]
    pub max_length: u32,

    /// Smallest acceptable trigger count
    #[arg(long, default_value_t = 1)]
    pub min_trigger: u32,

    /// Largest acceptable trigger count
    #[arg(long, default_value_t = 4)]
    pub max_trigger: u32,
}

impl ListArgs {
    /// The full parameters for the one-shot query (max_display
    /// is irrelevant for listing and keeps its default)
    pub fn params(&self) -> TrainingParameters {
        TrainingParameters {
            rzp:         self.rzp.clone(),
            max_length:  self.max_length,
            min_trigger: self.min_trigger,
            max_trigger: self.max_trigger,
            max_display: TrainingParameters::default().max_display,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_train_flags_stay_unset() {
        let args = TrainArgs {
            data_dir:     "data".to_string(),
            settings_dir: ".".to_string(),
            rzp:          None,
            max_length:   Some(7),
            min_trigger:  None,
            max_trigger:  None,
            max_display:  None,
        };
        let config = TrainSessionConfig::from(args);
        assert_eq!(config.overrides.max_length, Some(7));
        assert_eq!(config.overrides.rzp, None);
    }

    #[test]
    fn test_list_args_build_full_params() {
        let args = ListArgs {
            data_dir:    "data".to_string(),
            rzp:         "2c2e".to_string(),
            max_length:  6,
            min_trigger: 2,
            max_trigger: 3,
        };
        let params = args.params();
        assert_eq!(params.rzp, "2c2e");
        assert_eq!(params.min_trigger, 2);
    }
}
