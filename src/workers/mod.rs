//! Aggregate workers
//!
//! A worker is a stateless unit that reads a whole input file and reduces
//! every integer in it to one value. Each worker owns nothing but its
//! [`ReadOptions`](crate::config::ReadOptions); every [`Worker::process`]
//! call opens the file itself and starts from the identity of its
//! [`AggregateKind`].
//!
//! The reductions are also exposed as pure functions through
//! [`AggregateKind::apply`], which is what the workers feed while reading.

use std::fmt;
use std::path::Path;

pub mod error;
mod source;
pub mod subtract;
pub mod sum;
pub mod xor;

pub use error::AggregateError;
pub use source::fold_file;
pub use subtract::{SubtractAccumulator, SubtractWorker};
pub use sum::{SumAccumulator, SumWorker};
pub use xor::{XorAccumulator, XorWorker};

/// What a worker emits, exactly once per `process` call
pub type Outcome = Result<i64, AggregateError>;

/// Which reduction a worker performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateKind {
    Sum,
    Xor,
    Subtract,
}

impl AggregateKind {
    pub const ALL: [AggregateKind; 3] = [Self::Sum, Self::Xor, Self::Subtract];

    /// Lead-in for the result line, followed by the value
    pub fn label(self) -> &'static str {
        match self {
            Self::Sum => "Sum is",
            Self::Xor => "XOR is",
            Self::Subtract => "The difference of the first number and all others is",
        }
    }

    /// Short lowercase name, used for thread names and log fields
    pub fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Xor => "xor",
            Self::Subtract => "subtract",
        }
    }

    /// Reduce a token sequence the way this kind's worker does
    pub fn apply<I>(self, tokens: I) -> i64
    where
        I: IntoIterator<Item = i64>,
    {
        match self {
            Self::Sum => reduce(SumAccumulator::default(), tokens),
            Self::Xor => reduce(XorAccumulator::default(), tokens),
            Self::Subtract => reduce(SubtractAccumulator::default(), tokens),
        }
    }
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sum => "Sum",
            Self::Xor => "XOR",
            Self::Subtract => "Subtract",
        };
        f.write_str(name)
    }
}

/// Running value combined with each token in file order
pub trait Accumulator {
    fn push(&mut self, value: i64);
    fn finish(self) -> i64;
}

fn reduce<A, I>(mut acc: A, tokens: I) -> i64
where
    A: Accumulator,
    I: IntoIterator<Item = i64>,
{
    for value in tokens {
        acc.push(value);
    }
    acc.finish()
}

/// A computation unit run on its own thread by the controller
pub trait Worker: Send + 'static {
    fn kind(&self) -> AggregateKind;

    /// Read `path` completely and produce this worker's single result
    fn process(&self, path: &Path) -> Outcome;
}
