use std::path::Path;

use super::{Accumulator, AggregateKind, Outcome, Worker, fold_file};
use crate::config::ReadOptions;

/// Running sum, wrapping on overflow
#[derive(Debug, Default, Clone, Copy)]
pub struct SumAccumulator(i64);

impl Accumulator for SumAccumulator {
    fn push(&mut self, value: i64) {
        self.0 = self.0.wrapping_add(value);
    }

    fn finish(self) -> i64 {
        self.0
    }
}

/// Adds up every integer in the file
#[derive(Debug, Default, Clone)]
pub struct SumWorker {
    options: ReadOptions,
}

impl SumWorker {
    pub fn new(options: ReadOptions) -> Self {
        Self { options }
    }
}

impl Worker for SumWorker {
    fn kind(&self) -> AggregateKind {
        AggregateKind::Sum
    }

    fn process(&self, path: &Path) -> Outcome {
        tracing::trace!("sum worker reading {}", path.display());
        let outcome = fold_file(path, self.options, SumAccumulator::default());
        tracing::trace!("sum worker finished: {:?}", outcome);
        outcome
    }
}
