// ============================================================
// Layer 2 — ListUseCase
// ============================================================
// One-shot, non-interactive path: load a partition, run the
// difficulty query, and print every matching case. Handy for
// checking what a set of filter values actually selects before
// sitting down to train.

use anyhow::Result;

use crate::data::corpus::{Corpus, Partition, QueryFilter};
use crate::data::loader::CsvCaseLoader;
use crate::domain::params::TrainingParameters;
use crate::domain::traits::CaseSource;

pub struct ListUseCase {
    data_dir: String,
    params: TrainingParameters,
}

impl ListUseCase {
    pub fn new(data_dir: String, params: TrainingParameters) -> Self {
        Self { data_dir, params }
    }

    pub fn execute(&self) -> Result<()> {
        let source = CsvCaseLoader::new(&self.data_dir);
        let cases = source.load(&self.params.rzp)?;

        let mut corpus = Corpus::new();
        corpus.insert(self.params.rzp.clone(), Partition::new(cases));

        let filter = QueryFilter::from(&self.params);
        let matching = corpus.query(&self.params.rzp, &filter)?;

        if matching.is_empty() {
            println!("No cases match these filters.");
            return Ok(());
        }

        println!(
            "{} matching cases in rzp '{}' (max length {}, trigger {}..={}):\n",
            matching.len(),
            self.params.rzp,
            self.params.max_length,
            self.params.min_trigger,
            self.params.max_trigger,
        );
        for case in &matching {
            let best = case
                .canonical_solution()
                .map(|s| s.moves.as_str())
                .unwrap_or("-");
            println!(
                "  case {:>4}  arm {:<10} pairs {}  solutions {:>3}  e.g. {}",
                case.id,
                case.arm,
                case.pairs,
                case.solutions.len(),
                best,
            );
        }
        Ok(())
    }
}
