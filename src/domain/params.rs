// ============================================================
// Layer 3 — Training Parameters
// ============================================================
// The user-chosen difficulty filters for a training session:
//   - rzp:         which partition of the corpus to train
//   - max_length:  longest acceptable solution
//   - min/max_trigger: trigger-count range
//   - max_display: how many solutions to print on reveal
//
// Invariant: min_trigger <= max_trigger. Parameters are only
// mutated through explicit ParamsUpdate events while the state
// machine is in the options phase; when training starts the
// machine captures an immutable snapshot, and load results are
// matched against that snapshot (stale-load guard).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The rzp tags the trainer ships data for.
pub const KNOWN_RZPS: &[&str] = &["4c4e", "4c2e", "2c4e", "2c2e", "3c2e"];

/// Rejected parameter updates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("min_trigger ({min}) must not exceed max_trigger ({max})")]
    TriggerRangeInverted { min: u32, max: u32 },
}

/// All difficulty filters for one training session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingParameters {
    /// Puzzle-configuration tag selecting the corpus partition
    pub rzp: String,

    /// Longest acceptable solution, in moves
    pub max_length: u32,

    /// Smallest acceptable trigger count
    pub min_trigger: u32,

    /// Largest acceptable trigger count
    pub max_trigger: u32,

    /// Maximum number of solutions shown when a case is revealed
    pub max_display: u32,
}

impl Default for TrainingParameters {
    fn default() -> Self {
        Self {
            rzp:         "4c4e".to_string(),
            max_length:  5,
            min_trigger: 1,
            max_trigger: 4,
            max_display: 6,
        }
    }
}

impl TrainingParameters {
    /// Apply a partial update, returning the merged parameters.
    ///
    /// Fails if the merged values would violate the
    /// min_trigger <= max_trigger invariant; the previous
    /// parameters are left untouched in that case.
    pub fn apply(&self, update: ParamsUpdate) -> Result<Self, ParamsError> {
        let merged = Self {
            rzp:         update.rzp.unwrap_or_else(|| self.rzp.clone()),
            max_length:  update.max_length.unwrap_or(self.max_length),
            min_trigger: update.min_trigger.unwrap_or(self.min_trigger),
            max_trigger: update.max_trigger.unwrap_or(self.max_trigger),
            max_display: update.max_display.unwrap_or(self.max_display),
        };
        if merged.min_trigger > merged.max_trigger {
            return Err(ParamsError::TriggerRangeInverted {
                min: merged.min_trigger,
                max: merged.max_trigger,
            });
        }
        Ok(merged)
    }
}

/// A partial parameter edit — only the fields the user touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamsUpdate {
    pub rzp:         Option<String>,
    pub max_length:  Option<u32>,
    pub min_trigger: Option<u32>,
    pub max_trigger: Option<u32>,
    pub max_display: Option<u32>,
}
