// ============================================================
// Layer 4 — Corpus and Difficulty Query
// ============================================================
// The corpus maps each rzp tag to a loaded-once, read-only
// Partition of cases. The one non-trivial operation is the
// difficulty query: return every distinct case owning at least
// one solution inside the requested length and trigger ranges.
//
// Query contract:
//   - O(number of solutions in the partition)
//   - deduplicated by case id, even when several qualifying
//     solutions belong to the same case
//   - never returns a case with zero qualifying solutions
//   - read-only, idempotent
//   - NotLoaded if the partition was never loaded

use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::domain::case::Case;
use crate::domain::params::TrainingParameters;

/// Errors from corpus queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    /// Query issued before the partition's load finished.
    /// Callers must wait for the load to complete and retry,
    /// not poll.
    #[error("corpus partition '{rzp}' is not loaded")]
    NotLoaded { rzp: String },
}

/// The numeric ranges a solution must fall into to qualify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    pub min_length:  u32,
    pub max_length:  u32,
    pub min_trigger: u32,
    pub max_trigger: u32,
}

impl From<&TrainingParameters> for QueryFilter {
    fn from(p: &TrainingParameters) -> Self {
        Self {
            min_length:  0,
            max_length:  p.max_length,
            min_trigger: p.min_trigger,
            max_trigger: p.max_trigger,
        }
    }
}

impl QueryFilter {
    fn matches(&self, length: u32, trigger: u32) -> bool {
        length >= self.min_length
            && length <= self.max_length
            && trigger >= self.min_trigger
            && trigger <= self.max_trigger
    }
}

/// Everything loaded for one rzp tag. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    /// Cases keyed by id (BTreeMap so iteration order is stable)
    cases: BTreeMap<u32, Case>,
}

impl Partition {
    /// Build a partition from loaded cases (solutions attached).
    pub fn new(cases: Vec<Case>) -> Self {
        Self {
            cases: cases.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    pub fn solution_count(&self) -> usize {
        self.cases.values().map(|c| c.solutions.len()).sum()
    }

    /// All distinct cases with at least one solution inside the
    /// filter ranges, in ascending id order.
    pub fn query(&self, filter: &QueryFilter) -> Vec<Case> {
        self.cases
            .values()
            .filter(|case| {
                case.solutions
                    .iter()
                    .any(|s| filter.matches(s.length, s.trigger))
            })
            .cloned()
            .collect()
    }
}

/// All loaded partitions, keyed by rzp tag.
#[derive(Debug, Default)]
pub struct Corpus {
    partitions: HashMap<String, Partition>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the partition for `rzp` has finished loading
    pub fn is_loaded(&self, rzp: &str) -> bool {
        self.partitions.contains_key(rzp)
    }

    /// Store a freshly loaded partition. A second load of the
    /// same tag replaces the first (the data is identical; this
    /// only happens on retry after a failure elsewhere).
    pub fn insert(&mut self, rzp: impl Into<String>, partition: Partition) {
        let rzp = rzp.into();
        tracing::info!(
            "corpus partition '{}' loaded: {} cases, {} solutions",
            rzp,
            partition.case_count(),
            partition.solution_count(),
        );
        self.partitions.insert(rzp, partition);
    }

    /// Run the difficulty query against one partition.
    pub fn query(&self, rzp: &str, filter: &QueryFilter) -> Result<Vec<Case>, CorpusError> {
        let partition = self.partitions.get(rzp).ok_or_else(|| CorpusError::NotLoaded {
            rzp: rzp.to_string(),
        })?;
        Ok(partition.query(filter))
    }
}
