// ============================================================
// Layer 2 — Trainer Session
// ============================================================
// Owns the application state and the collaborators, and funnels
// every state change through the transition function. This is
// the explicitly-passed application context: no globals, no
// singletons — the UI layer holds a TrainerSession and calls
// methods that map 1:1 to user commands.
//
// Loading is an explicit operation: entering loading_data kicks
// off the load, and its outcome comes back as a DataLoaded or
// LoadFailed event tagged with the parameter snapshot, so a
// result that outlives a reset is discarded by the machine
// instead of overwriting newer state.

use anyhow::Result;
use rand::Rng;

use crate::application::event::AppEvent;
use crate::application::machine::{transition, TransitionError};
use crate::application::state::AppState;
use crate::data::corpus::{Corpus, Partition, QueryFilter};
use crate::domain::params::{ParamsUpdate, TrainingParameters};
use crate::domain::traits::{CaseSource, CubeAlgebra};
use crate::training::selector::{select_random, SelectError, TrainingSelection};

/// One trainer run: state machine + corpus + collaborators.
pub struct TrainerSession<S, A, R> {
    state: AppState,
    corpus: Corpus,
    source: S,
    algebra: A,
    rng: R,
}

impl<S, A, R> TrainerSession<S, A, R>
where
    S: CaseSource,
    A: CubeAlgebra,
    R: Rng,
{
    /// Build a session. The collaborators passed in must already
    /// be initialized; call `finish_init` to leave the setup
    /// phase once they are.
    pub fn new(source: S, algebra: A, rng: R, params: TrainingParameters) -> Self {
        Self {
            state: AppState::Initializing { params },
            corpus: Corpus::new(),
            source,
            algebra,
            rng,
        }
    }

    /// Current application state (read-only; all mutation goes
    /// through dispatch)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run one event through the transition function.
    pub fn dispatch(&mut self, event: AppEvent) -> Result<(), TransitionError> {
        self.state = transition(&self.state, event)?;
        Ok(())
    }

    /// Both collaborators are ready: leave the setup phase.
    pub fn finish_init(&mut self) -> Result<(), TransitionError> {
        self.dispatch(AppEvent::FinishedInit)
    }

    /// Merge a partial parameter edit (options phase only).
    pub fn update_params(&mut self, update: ParamsUpdate) -> Result<(), TransitionError> {
        self.dispatch(AppEvent::SetTrainingParams(update))
    }

    /// Start a training session: snapshot the parameters, enter
    /// loading_data, perform the load, and deliver its outcome
    /// back to the machine as an event.
    pub fn start_training(&mut self) -> Result<(), TransitionError> {
        let snapshot = self.state.params().clone();
        self.dispatch(AppEvent::StartTraining)?;

        // Load the partition on first use of this rzp tag. A
        // failure is an expected runtime condition: it becomes a
        // LoadFailed event, and partitions loaded earlier for
        // other tags stay intact.
        if !self.corpus.is_loaded(&snapshot.rzp) {
            match self.source.load(&snapshot.rzp) {
                Ok(cases) => self.corpus.insert(snapshot.rzp.clone(), Partition::new(cases)),
                Err(err) => {
                    tracing::warn!("partition '{}' failed to load: {:#}", snapshot.rzp, err);
                    return self.dispatch(AppEvent::LoadFailed {
                        snapshot,
                        message: format!("{err:#}"),
                    });
                }
            }
        }

        let filter = QueryFilter::from(&snapshot);
        match self.corpus.query(&snapshot.rzp, &filter) {
            Ok(cases) => self.dispatch(AppEvent::DataLoaded { snapshot, cases }),
            Err(err) => self.dispatch(AppEvent::LoadFailed {
                snapshot,
                message: err.to_string(),
            }),
        }
    }

    /// Pick the next random case and make it the active training.
    ///
    /// Returns Ok(None) when the candidate set is empty — a
    /// user-visible outcome, not a fault; the machine stays in
    /// its current phase.
    pub fn next_case(&mut self) -> Result<Option<TrainingSelection>> {
        let candidates = self
            .state
            .training_cases()
            .ok_or_else(|| {
                let (phase, sub) = self.state.phase();
                anyhow::anyhow!("no candidate set loaded in state {phase}/{sub}")
            })?
            .to_vec();

        match select_random(&candidates, &self.algebra, &mut self.rng) {
            Ok(selection) => {
                self.dispatch(AppEvent::SetTrainingCase {
                    case: selection.case.clone(),
                    scramble: selection.scramble.clone(),
                })?;
                Ok(Some(selection))
            }
            Err(SelectError::EmptyCandidateSet) => {
                tracing::info!("no cases match the current parameters");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Reveal the active case's solutions.
    pub fn reveal(&mut self) -> Result<(), TransitionError> {
        self.dispatch(AppEvent::SeeSolutions)
    }

    /// Back to the options screen.
    pub fn change_options(&mut self) -> Result<(), TransitionError> {
        self.dispatch(AppEvent::ChangeOptions)
    }

    /// Reinitialize to defaults. The collaborators are already
    /// ready, so the machine is re-armed into options right away.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        self.dispatch(AppEvent::Reset)?;
        self.finish_init()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::algebra::SequenceAlgebra;
    use crate::domain::case::{Case, Solution};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// In-memory CaseSource test double
    struct FakeSource {
        cases: Vec<Case>,
        fail: bool,
    }

    impl CaseSource for FakeSource {
        fn load(&self, _rzp: &str) -> Result<Vec<Case>> {
            if self.fail {
                anyhow::bail!("dataset unavailable");
            }
            Ok(self.cases.clone())
        }
    }

    fn sample_case(id: u32, length: u32, trigger: u32) -> Case {
        Case {
            id,
            rzp: "4c4e".to_string(),
            arm: "a".to_string(),
            pairs: 2,
            tetrad: None,
            corners: None,
            solutions: vec![Solution {
                case_id: id,
                length,
                eo_breaking: false,
                trigger,
                moves: "R U R'".to_string(),
            }],
        }
    }

    fn session(
        cases: Vec<Case>,
        fail: bool,
    ) -> TrainerSession<FakeSource, SequenceAlgebra, StdRng> {
        let mut s = TrainerSession::new(
            FakeSource { cases, fail },
            SequenceAlgebra::init().unwrap(),
            StdRng::seed_from_u64(11),
            TrainingParameters::default(),
        );
        s.finish_init().unwrap();
        s
    }

    #[test]
    fn test_full_session_cycle() {
        let mut s = session(vec![sample_case(1, 4, 2)], false);
        s.start_training().unwrap();
        assert_eq!(s.state().phase(), ("training", "idle"));

        let selection = s.next_case().unwrap().unwrap();
        assert_eq!(selection.case.id, 1);
        assert_eq!(s.state().phase(), ("training", "training"));

        s.reveal().unwrap();
        assert_eq!(s.state().phase(), ("training", "showing_solution"));

        // next case straight from the solution screen
        s.next_case().unwrap().unwrap();
        assert_eq!(s.state().phase(), ("training", "training"));
    }

    #[test]
    fn test_too_strict_filters_leave_idle_with_empty_set() {
        // Only solution has trigger 9, outside the default 1..=4
        let mut s = session(vec![sample_case(1, 4, 9)], false);
        s.start_training().unwrap();
        assert_eq!(s.state().phase(), ("training", "idle"));
        assert!(s.state().training_cases().unwrap().is_empty());

        // Selecting is a modeled outcome, not an error
        assert!(s.next_case().unwrap().is_none());
        assert_eq!(s.state().phase(), ("training", "idle"));
    }

    #[test]
    fn test_failed_load_returns_to_options_with_message() {
        let mut s = session(Vec::new(), true);
        s.start_training().unwrap();
        assert_eq!(s.state().phase(), ("options", "options"));
        match s.state() {
            AppState::Options { load_error, .. } => assert!(load_error.is_some()),
            other => panic!("expected options, got {other:?}"),
        }

        // Retry affordance: start can simply be issued again
        assert!(s.dispatch(AppEvent::StartTraining).is_ok());
    }

    #[test]
    fn test_change_options_and_retrain() {
        let mut s = session(vec![sample_case(1, 4, 2), sample_case(2, 9, 2)], false);
        s.start_training().unwrap();
        assert_eq!(s.state().training_cases().unwrap().len(), 1);

        s.change_options().unwrap();
        s.update_params(ParamsUpdate {
            max_length: Some(10),
            ..Default::default()
        })
        .unwrap();
        s.start_training().unwrap();
        assert_eq!(s.state().training_cases().unwrap().len(), 2);
    }

    #[test]
    fn test_reset_rearms_into_options() {
        let mut s = session(vec![sample_case(1, 4, 2)], false);
        s.start_training().unwrap();
        s.reset().unwrap();
        assert_eq!(s.state().phase(), ("options", "options"));
        assert_eq!(*s.state().params(), TrainingParameters::default());
    }
}
