// ============================================================
// Layer 2 — State Machine Transition Function
// ============================================================
// The single place application state changes. A pure function
// from (state, event) to the next state:
//
//   - an event a state has no handler for is a programming or
//     UI-wiring defect and fails fast with InvalidTransition;
//     it is never silently ignored
//   - the one sanctioned exception: stale load results (snapshot
//     mismatch after a reset or parameter edit) are discarded
//     with a log line, leaving the state unchanged
//   - Reset is valid everywhere and returns to the initial phase
//
// No I/O, no randomness, no globals — fully testable without a
// UI harness.

use thiserror::Error;

use crate::application::event::AppEvent;
use crate::application::state::{ActiveTraining, AppState};
use crate::domain::params::ParamsError;

/// Defects in how the machine is driven.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The state defines no handler for this event
    #[error("event '{event}' is not valid in state {phase}/{sub}")]
    InvalidTransition {
        phase: &'static str,
        sub: &'static str,
        event: &'static str,
    },

    /// A parameter update violated the parameter invariants
    #[error(transparent)]
    InvalidParameters(#[from] ParamsError),
}

/// Compute the successor state for `event`.
pub fn transition(state: &AppState, event: AppEvent) -> Result<AppState, TransitionError> {
    let (phase, sub) = state.phase();
    let event_name = event.name();

    let next = match (state, event) {
        // Reset reinitializes to defaults from anywhere; the
        // machine cycles indefinitely across sessions.
        (_, AppEvent::Reset) => AppState::initial(),

        // Load results match against the snapshot that tagged the
        // load. Anything else holding a snapshot is stale output
        // of an abandoned load and is dropped, not an error.
        (AppState::LoadingData { params }, AppEvent::DataLoaded { snapshot, cases })
            if *params == snapshot =>
        {
            AppState::Idle {
                params: params.clone(),
                cases,
            }
        }
        (AppState::LoadingData { params }, AppEvent::LoadFailed { snapshot, message })
            if *params == snapshot =>
        {
            AppState::Options {
                params: params.clone(),
                load_error: Some(message),
            }
        }
        (_, AppEvent::DataLoaded { .. }) | (_, AppEvent::LoadFailed { .. }) => {
            tracing::debug!("discarding stale load result in state {}/{}", phase, sub);
            state.clone()
        }

        (AppState::Initializing { params }, AppEvent::FinishedInit) => AppState::Options {
            params: params.clone(),
            load_error: None,
        },

        (AppState::Options { params, .. }, AppEvent::SetTrainingParams(update)) => {
            AppState::Options {
                params: params.apply(update)?,
                load_error: None,
            }
        }
        (AppState::Options { params, .. }, AppEvent::StartTraining) => AppState::LoadingData {
            params: params.clone(),
        },

        // A new case may be picked from idle, while training, or
        // with the solution shown; it always lands in Training.
        (
            AppState::Idle { params, cases }
            | AppState::Training { params, cases, .. }
            | AppState::ShowingSolution { params, cases, .. },
            AppEvent::SetTrainingCase { case, scramble },
        ) => AppState::Training {
            params: params.clone(),
            cases: cases.clone(),
            current: ActiveTraining { case, scramble },
        },

        (AppState::Training { params, cases, current }, AppEvent::SeeSolutions) => {
            AppState::ShowingSolution {
                params: params.clone(),
                cases: cases.clone(),
                current: current.clone(),
            }
        }

        (
            AppState::Idle { params, .. } | AppState::ShowingSolution { params, .. },
            AppEvent::ChangeOptions,
        ) => AppState::Options {
            params: params.clone(),
            load_error: None,
        },

        _ => {
            return Err(TransitionError::InvalidTransition {
                phase,
                sub,
                event: event_name,
            })
        }
    };

    let (next_phase, next_sub) = next.phase();
    tracing::debug!(
        "{}/{} --{}--> {}/{}",
        phase,
        sub,
        event_name,
        next_phase,
        next_sub,
    );

    Ok(next)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::case::{Case, Solution};
    use crate::domain::params::{ParamsUpdate, TrainingParameters};

    fn sample_case(id: u32) -> Case {
        Case {
            id,
            rzp: "4c4e".to_string(),
            arm: "a".to_string(),
            pairs: 2,
            tetrad: None,
            corners: None,
            solutions: vec![Solution {
                case_id: id,
                length: 3,
                eo_breaking: false,
                trigger: 1,
                moves: "R U R'".to_string(),
            }],
        }
    }

    fn options_state() -> AppState {
        transition(&AppState::initial(), AppEvent::FinishedInit).unwrap()
    }

    fn idle_state(cases: Vec<Case>) -> AppState {
        let loading = transition(&options_state(), AppEvent::StartTraining).unwrap();
        let snapshot = loading.params().clone();
        transition(&loading, AppEvent::DataLoaded { snapshot, cases }).unwrap()
    }

    #[test]
    fn test_initial_state_is_setup_initializing() {
        assert_eq!(AppState::initial().phase(), ("setup", "initializing"));
    }

    #[test]
    fn test_finished_init_enters_options() {
        assert_eq!(options_state().phase(), ("options", "options"));
    }

    #[test]
    fn test_start_then_data_loaded_reaches_idle() {
        // options/options --start--> options/loading_data
        let loading = transition(&options_state(), AppEvent::StartTraining).unwrap();
        assert_eq!(loading.phase(), ("options", "loading_data"));

        // --data loaded--> training/idle with the candidate set
        // stored and no active case
        let snapshot = loading.params().clone();
        let idle = transition(
            &loading,
            AppEvent::DataLoaded {
                snapshot,
                cases: vec![sample_case(1)],
            },
        )
        .unwrap();
        assert_eq!(idle.phase(), ("training", "idle"));
        assert_eq!(idle.training_cases().unwrap().len(), 1);
        assert!(idle.current_training().is_none());
    }

    #[test]
    fn test_select_then_reveal_scenario() {
        let idle = idle_state(vec![sample_case(1)]);

        let training = transition(
            &idle,
            AppEvent::SetTrainingCase {
                case: sample_case(1),
                scramble: "U F2".to_string(),
            },
        )
        .unwrap();
        assert_eq!(training.phase(), ("training", "training"));
        assert_eq!(training.current_training().unwrap().case.id, 1);

        // reveal keeps the active pair untouched
        let shown = transition(&training, AppEvent::SeeSolutions).unwrap();
        assert_eq!(shown.phase(), ("training", "showing_solution"));
        assert_eq!(
            shown.current_training(),
            training.current_training()
        );
    }

    #[test]
    fn test_next_case_allowed_while_showing_solution() {
        let idle = idle_state(vec![sample_case(1), sample_case(2)]);
        let training = transition(
            &idle,
            AppEvent::SetTrainingCase {
                case: sample_case(1),
                scramble: "U".to_string(),
            },
        )
        .unwrap();
        let shown = transition(&training, AppEvent::SeeSolutions).unwrap();

        let next = transition(
            &shown,
            AppEvent::SetTrainingCase {
                case: sample_case(2),
                scramble: "D".to_string(),
            },
        )
        .unwrap();
        assert_eq!(next.phase(), ("training", "training"));
        assert_eq!(next.current_training().unwrap().case.id, 2);
    }

    #[test]
    fn test_parameter_update_merges_partials() {
        let updated = transition(
            &options_state(),
            AppEvent::SetTrainingParams(ParamsUpdate {
                max_length: Some(8),
                ..Default::default()
            }),
        )
        .unwrap();
        assert_eq!(updated.phase(), ("options", "options"));
        assert_eq!(updated.params().max_length, 8);
        assert_eq!(updated.params().rzp, "4c4e");
    }

    #[test]
    fn test_invalid_parameter_update_is_rejected() {
        let err = transition(
            &options_state(),
            AppEvent::SetTrainingParams(ParamsUpdate {
                min_trigger: Some(9),
                ..Default::default()
            }),
        )
        .unwrap_err();
        assert!(matches!(err, TransitionError::InvalidParameters(_)));
    }

    #[test]
    fn test_unhandled_event_fails_fast() {
        // see_solutions is meaningless in options/options
        let err = transition(&options_state(), AppEvent::SeeSolutions).unwrap_err();
        assert_eq!(
            err,
            TransitionError::InvalidTransition {
                phase: "options",
                sub: "options",
                event: "see_solutions",
            }
        );
    }

    #[test]
    fn test_reveal_from_idle_is_a_defect() {
        let idle = idle_state(vec![sample_case(1)]);
        assert!(transition(&idle, AppEvent::SeeSolutions).is_err());
    }

    #[test]
    fn test_reset_returns_to_initial_from_anywhere() {
        let shown = {
            let idle = idle_state(vec![sample_case(1)]);
            let training = transition(
                &idle,
                AppEvent::SetTrainingCase {
                    case: sample_case(1),
                    scramble: "U".to_string(),
                },
            )
            .unwrap();
            transition(&training, AppEvent::SeeSolutions).unwrap()
        };
        let reset = transition(&shown, AppEvent::Reset).unwrap();
        assert_eq!(reset, AppState::initial());
    }

    #[test]
    fn test_stale_load_result_is_discarded() {
        // Start a load, then edit parameters: the in-flight load
        // is now tagged with an outdated snapshot.
        let loading = transition(&options_state(), AppEvent::StartTraining).unwrap();
        let stale_snapshot = loading.params().clone();
        let reset = transition(&loading, AppEvent::Reset).unwrap();

        // The stale result must be dropped without a state change
        let after = transition(
            &reset,
            AppEvent::DataLoaded {
                snapshot: stale_snapshot,
                cases: vec![sample_case(1)],
            },
        )
        .unwrap();
        assert_eq!(after, reset);
    }

    #[test]
    fn test_mismatched_snapshot_is_stale_even_while_loading() {
        let loading = transition(&options_state(), AppEvent::StartTraining).unwrap();
        let mut other = TrainingParameters::default();
        other.max_length = 99;
        let after = transition(
            &loading,
            AppEvent::DataLoaded {
                snapshot: other,
                cases: vec![sample_case(1)],
            },
        )
        .unwrap();
        assert_eq!(after, loading);
    }

    #[test]
    fn test_load_failure_returns_to_options_with_message() {
        let loading = transition(&options_state(), AppEvent::StartTraining).unwrap();
        let snapshot = loading.params().clone();
        let back = transition(
            &loading,
            AppEvent::LoadFailed {
                snapshot,
                message: "file missing".to_string(),
            },
        )
        .unwrap();
        assert_eq!(back.phase(), ("options", "options"));
        match back {
            AppState::Options { load_error, .. } => {
                assert_eq!(load_error.as_deref(), Some("file missing"));
            }
            other => panic!("expected options, got {other:?}"),
        }
    }

    #[test]
    fn test_change_options_from_idle_and_shown() {
        let idle = idle_state(vec![sample_case(1)]);
        assert_eq!(
            transition(&idle, AppEvent::ChangeOptions).unwrap().phase(),
            ("options", "options")
        );

        let training = transition(
            &idle,
            AppEvent::SetTrainingCase {
                case: sample_case(1),
                scramble: "U".to_string(),
            },
        )
        .unwrap();
        let shown = transition(&training, AppEvent::SeeSolutions).unwrap();
        assert_eq!(
            transition(&shown, AppEvent::ChangeOptions).unwrap().phase(),
            ("options", "options")
        );

        // but not while the solution is still hidden
        assert!(transition(&training, AppEvent::ChangeOptions).is_err());
    }

    #[test]
    fn test_empty_candidate_set_is_a_modeled_idle_state() {
        let idle = idle_state(Vec::new());
        assert_eq!(idle.phase(), ("training", "idle"));
        assert!(idle.training_cases().unwrap().is_empty());
    }
}
