// ============================================================
// Layer 2 — Application State
// ============================================================
// The lifecycle of one trainer run as a sum type, one variant
// per phase. Each variant carries ONLY the fields meaningful in
// that phase, so no code can ever read a field that is undefined
// for the current phase:
//
//   Initializing ─ready─> Options ─start─> LoadingData
//        ^                                     │ data loaded
//        └──────── reset (from anywhere)       v
//   Options <─change options─ Idle ─case picked─> Training
//                              ^                     │ reveal
//                              └─── ShowingSolution <┘
//
// Candidate cases exist from Idle onward; the active training
// pair exists only in Training and ShowingSolution. All mutation
// goes through the transition function in machine.rs.

use crate::domain::case::Case;
use crate::domain::params::TrainingParameters;

/// The case/scramble pair currently being practiced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTraining {
    pub case: Case,
    pub scramble: String,
}

/// One variant per lifecycle phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for the data source and cube algebra to both
    /// report ready
    Initializing {
        params: TrainingParameters,
    },

    /// User edits training parameters. `load_error` carries the
    /// message of a failed load so the user can adjust and retry.
    Options {
        params: TrainingParameters,
        load_error: Option<String>,
    },

    /// Corpus query in flight for the current parameters. The
    /// params in this variant are the snapshot that tagged the
    /// load; results with a different snapshot are stale.
    LoadingData {
        params: TrainingParameters,
    },

    /// Candidate set loaded, no case selected yet. An empty
    /// candidate list is a valid, user-visible outcome here.
    Idle {
        params: TrainingParameters,
        cases: Vec<Case>,
    },

    /// A case/scramble pair is active, solution hidden
    Training {
        params: TrainingParameters,
        cases: Vec<Case>,
        current: ActiveTraining,
    },

    /// Same pair, solution revealed
    ShowingSolution {
        params: TrainingParameters,
        cases: Vec<Case>,
        current: ActiveTraining,
    },
}

impl AppState {
    /// The initial state with default parameters
    pub fn initial() -> Self {
        Self::Initializing {
            params: TrainingParameters::default(),
        }
    }

    /// The (phase, sub-phase) pair, for logging and the UI header
    pub fn phase(&self) -> (&'static str, &'static str) {
        match self {
            Self::Initializing { .. }    => ("setup", "initializing"),
            Self::Options { .. }         => ("options", "options"),
            Self::LoadingData { .. }     => ("options", "loading_data"),
            Self::Idle { .. }            => ("training", "idle"),
            Self::Training { .. }        => ("training", "training"),
            Self::ShowingSolution { .. } => ("training", "showing_solution"),
        }
    }

    /// The parameters as seen in the current phase
    pub fn params(&self) -> &TrainingParameters {
        match self {
            Self::Initializing { params }
            | Self::Options { params, .. }
            | Self::LoadingData { params }
            | Self::Idle { params, .. }
            | Self::Training { params, .. }
            | Self::ShowingSolution { params, .. } => params,
        }
    }

    /// The loaded candidate set (defined from Idle onward)
    pub fn training_cases(&self) -> Option<&[Case]> {
        match self {
            Self::Idle { cases, .. }
            | Self::Training { cases, .. }
            | Self::ShowingSolution { cases, .. } => Some(cases),
            _ => None,
        }
    }

    /// The active case/scramble pair (defined only while
    /// training or showing the solution)
    pub fn current_training(&self) -> Option<&ActiveTraining> {
        match self {
            Self::Training { current, .. } | Self::ShowingSolution { current, .. } => {
                Some(current)
            }
            _ => None,
        }
    }
}
