//! Command-line interface for numagg
//!
//! Resolves the input path, loads configuration, sets up logging and runs
//! one fan-out round through the [`Controller`](crate::parallel::Controller).

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod output;

pub use output::Output;

use crate::config::AppConfig;
use crate::parallel::Controller;

/// numagg - sum, XOR and subtract every integer in a file, one thread per aggregate
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File of whitespace-separated integers (defaults to input.default_file)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Enable verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Enable quiet output (results and errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Execute one processing round
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose > 0, self.quiet);

        let config = AppConfig::load_with_custom_config(self.config.as_deref())?;
        output.verbose(&format!("Config: {:?}", config));

        let path = match self.path {
            Some(path) => path,
            None => {
                output.info(&format!(
                    "Default filename: {}",
                    config.input.default_file.display()
                ));
                config.input.default_file.clone()
            }
        };

        output.info("Start app");

        let mut controller = Controller::new(config.read_options())?;
        controller.handle_file(&path)?;
        let reports = controller.collect(|report| output.report(report))?;

        let failed = reports.iter().filter(|r| r.outcome.is_err()).count();
        if failed > 0 {
            tracing::warn!("{} of {} workers reported an error", failed, reports.len());
        }

        Ok(())
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // stdout carries the results, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_path_is_optional() {
        let cli = Cli::try_parse_from(["numagg"]).unwrap();
        assert!(cli.path.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parses_path_and_flags() {
        let cli = Cli::try_parse_from(["numagg", "-vv", "--config", "c.toml", "data.txt"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("data.txt")));
        assert_eq!(cli.config.as_deref(), Some("c.toml"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_second_path() {
        assert!(Cli::try_parse_from(["numagg", "a.txt", "b.txt"]).is_err());
    }
}
