//! Helpers shared by every worker

pub mod tokens;

pub use tokens::{TokenError, parse_line};
