// ============================================================
// Layer 2 — Application Events
// ============================================================
// Everything that can happen to the state machine: collaborator
// readiness, user commands, and load results. Each user-facing
// command maps 1:1 to one of these events.
//
// Load results carry the parameter snapshot that initiated the
// load. A result whose snapshot no longer matches the state's
// parameters is stale (the user reset or edited in the meantime)
// and is discarded instead of overwriting newer state.

use crate::domain::case::Case;
use crate::domain::params::{ParamsUpdate, TrainingParameters};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Data source and cube algebra both reported ready
    FinishedInit,

    /// User edited some training parameters
    SetTrainingParams(ParamsUpdate),

    /// User asked to start a training session
    StartTraining,

    /// The load tagged with `snapshot` finished with candidates
    DataLoaded {
        snapshot: TrainingParameters,
        cases: Vec<Case>,
    },

    /// The load tagged with `snapshot` failed
    LoadFailed {
        snapshot: TrainingParameters,
        message: String,
    },

    /// The selector picked a case and synthesized its scramble
    SetTrainingCase { case: Case, scramble: String },

    /// User asked to reveal the solutions
    SeeSolutions,

    /// User asked to go back to the options screen
    ChangeOptions,

    /// Reinitialize to defaults (valid in every state)
    Reset,
}

impl AppEvent {
    /// Stable event name for logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::FinishedInit          => "finished_init",
            Self::SetTrainingParams(_)  => "set_training_params",
            Self::StartTraining         => "start_training",
            Self::DataLoaded { .. }     => "data_loaded",
            Self::LoadFailed { .. }     => "load_failed",
            Self::SetTrainingCase { .. } => "set_training_case",
            Self::SeeSolutions          => "see_solutions",
            Self::ChangeOptions         => "change_options",
            Self::Reset                 => "reset",
        }
    }
}
