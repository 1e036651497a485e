//! Terminal output for numagg
//!
//! Result lines go to stdout and failures to stderr, styled with `console`.
//! Styling is dropped automatically when the stream is not a terminal.

use console::style;

use crate::parallel::Report;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print one worker's result line.
    ///
    /// Values are printed even in quiet mode, they are the program's output.
    pub fn report(&self, report: &Report) {
        match &report.outcome {
            Ok(value) => println!(
                "{} {} {}",
                style("✔").green(),
                report.kind.label(),
                style(value).bold()
            ),
            Err(_) => self.error(&report.to_string()),
        }
    }
}
