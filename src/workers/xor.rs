use std::path::Path;

use super::{Accumulator, AggregateKind, Outcome, Worker, fold_file};
use crate::config::ReadOptions;

#[derive(Debug, Default, Clone, Copy)]
pub struct XorAccumulator(i64);

impl Accumulator for XorAccumulator {
    fn push(&mut self, value: i64) {
        self.0 ^= value;
    }

    fn finish(self) -> i64 {
        self.0
    }
}

/// Bitwise XOR of every integer in the file
#[derive(Debug, Default, Clone)]
pub struct XorWorker {
    options: ReadOptions,
}

impl XorWorker {
    pub fn new(options: ReadOptions) -> Self {
        Self { options }
    }
}

impl Worker for XorWorker {
    fn kind(&self) -> AggregateKind {
        AggregateKind::Xor
    }

    fn process(&self, path: &Path) -> Outcome {
        tracing::trace!("xor worker reading {}", path.display());
        let outcome = fold_file(path, self.options, XorAccumulator::default());
        tracing::trace!("xor worker finished: {:?}", outcome);
        outcome
    }
}
