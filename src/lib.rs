//! # numagg - concurrent aggregates over integer files
//!
//! Reads a text file of whitespace-separated integers and computes three
//! aggregates at once, each on its own thread:
//!
//! - **Sum** of every number
//! - **XOR** of every number
//! - **Difference** of the first number and all the others
//!
//! Every worker re-reads the file on its own and reports back exactly once;
//! the controller prints each result as it arrives and stops that worker's
//! thread.
//!
//! ## Quick Start
//!
//! ```bash
//! # Aggregate numbers.txt in the current directory
//! numagg
//!
//! # Or any other file, with info-level logs
//! numagg -v data/input.txt
//! ```

pub mod cli;
pub mod config;
pub mod parallel;
pub mod shared;
pub mod workers;

pub use cli::{Cli, Output};
pub use config::AppConfig;

