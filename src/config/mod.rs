//! Configuration management for numagg
//!
//! This module holds the typed configuration and the read policies that every
//! worker applies. Loading and layering (embedded defaults, config files,
//! `NUMAGG_*` environment variables) lives in [`core`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod core;

#[cfg(test)]
mod tests;

/// Main configuration structure for numagg
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Input file settings
    pub input: InputConfig,

    /// Token parsing settings
    pub parse: ParseConfig,
}

/// Input-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    /// File read when no path argument is given
    pub default_file: PathBuf,

    /// What a worker reports for a file it cannot open or read
    pub unreadable: UnreadablePolicy,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from("numbers.txt"),
            unreadable: UnreadablePolicy::default(),
        }
    }
}

/// Parsing configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ParseConfig {
    /// What happens to a token that is not a valid `i64`
    pub malformed: MalformedPolicy,
}

/// Policy for tokens that do not parse as a 64-bit signed integer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Stop and report the offending token
    #[default]
    Error,
    /// Count the token as zero and keep going
    Zero,
}

/// Policy for input files that cannot be opened or read
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnreadablePolicy {
    /// Report the I/O failure as the worker's outcome
    #[default]
    Error,
    /// Report zero, as if the file were empty
    Zero,
}

/// The read policies handed to each worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    pub malformed: MalformedPolicy,
    pub unreadable: UnreadablePolicy,
}

impl ReadOptions {
    /// Options reproducing the lenient behaviour: bad tokens and unreadable files count as zero
    pub fn lenient() -> Self {
        Self {
            malformed: MalformedPolicy::Zero,
            unreadable: UnreadablePolicy::Zero,
        }
    }
}

impl AppConfig {
    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            malformed: self.parse.malformed,
            unreadable: self.input.unreadable,
        }
    }
}
