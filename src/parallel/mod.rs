//! Fan-out/fan-in execution of aggregate workers
//!
//! The controller gives every worker its own named OS thread and talks to it
//! over two crossbeam channels:
//!
//! ```text
//! ┌────────────┐   Command::Process(path)   ┌─────────────────┐
//! │ Controller │───────────────────────────▶│ sum-worker      │──┐
//! │            │───────────────────────────▶│ xor-worker      │──┤ Outcome
//! │            │───────────────────────────▶│ subtract-worker │──┤ (one-shot)
//! │            │◀─────────── Select (fan-in) ─────────────────────┘
//! │            │──── Command::Stop + join, per worker, on arrival
//! └────────────┘
//! ```
//!
//! # Responsibilities
//!
//! - **Dispatch**: one `Process` command per worker, sent without waiting
//! - **Fan-in**: results are received in completion order through
//!   `crossbeam::channel::Select`, never by polling
//! - **Lifetime**: a worker's thread is stopped and joined as soon as its
//!   result arrives; the others keep running. Anything still alive when the
//!   controller is dropped is stopped and joined there
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use numagg::config::ReadOptions;
//! use numagg::parallel::Controller;
//!
//! let mut controller = Controller::new(ReadOptions::default())?;
//! controller.handle_file("numbers.txt")?;
//! let reports = controller.collect(|report| println!("{report}"))?;
//! assert_eq!(reports.len(), 3);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod controller;

// Re-export main types for easier access
pub use controller::{Controller, Report};
