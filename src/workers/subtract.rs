use std::path::Path;

use super::{Accumulator, AggregateKind, Outcome, Worker, fold_file};
use crate::config::ReadOptions;

/// Seeded by the first token, then subtracts every later one.
///
/// `None` until the first token arrives, so a file without tokens still
/// finishes at zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubtractAccumulator(Option<i64>);

impl Accumulator for SubtractAccumulator {
    fn push(&mut self, value: i64) {
        self.0 = Some(match self.0 {
            None => value,
            Some(current) => current.wrapping_sub(value),
        });
    }

    fn finish(self) -> i64 {
        self.0.unwrap_or(0)
    }
}

/// Subtracts every integer after the first from the first
#[derive(Debug, Default, Clone)]
pub struct SubtractWorker {
    options: ReadOptions,
}

impl SubtractWorker {
    pub fn new(options: ReadOptions) -> Self {
        Self { options }
    }
}

impl Worker for SubtractWorker {
    fn kind(&self) -> AggregateKind {
        AggregateKind::Subtract
    }

    fn process(&self, path: &Path) -> Outcome {
        tracing::trace!("subtract worker reading {}", path.display());
        let outcome = fold_file(path, self.options, SubtractAccumulator::default());
        tracing::trace!("subtract worker finished: {:?}", outcome);
        outcome
    }
}
