use anyhow::{Context, Result, anyhow};
use crossbeam::channel::{Receiver, RecvError, Select, Sender, bounded};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::config::ReadOptions;
use crate::workers::{AggregateKind, Outcome, SubtractWorker, SumWorker, Worker, XorWorker};

/// Messages a worker thread understands
#[derive(Debug)]
enum Command {
    Process(Arc<PathBuf>),
    Stop,
}

/// One worker's result as seen by the controller
#[derive(Debug)]
pub struct Report {
    pub kind: AggregateKind,
    pub outcome: Outcome,
}

impl Report {
    pub fn value(&self) -> Option<i64> {
        self.outcome.as_ref().ok().copied()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(value) => write!(f, "{} {}", self.kind.label(), value),
            Err(e) => write!(f, "{} failed: {}", self.kind, e),
        }
    }
}

/// Everything a worker thread owns
struct WorkerContext {
    worker: Box<dyn Worker>,
    command_rx: Receiver<Command>,
    result_tx: Sender<Outcome>,
}

/// The controller's side of one worker thread
struct Lane {
    kind: AggregateKind,
    command_tx: Sender<Command>,
    result_rx: Receiver<Outcome>,
    handle: Option<JoinHandle<()>>,
    in_flight: bool,
}

/// Owns one thread per worker, broadcasts work and collects results
pub struct Controller {
    lanes: Vec<Lane>,
}

impl Controller {
    /// Start the sum, XOR and subtract workers, each on its own thread
    pub fn new(options: ReadOptions) -> Result<Self> {
        Self::with_workers(vec![
            Box::new(SumWorker::new(options)),
            Box::new(XorWorker::new(options)),
            Box::new(SubtractWorker::new(options)),
        ])
    }

    /// Start one thread per worker
    pub fn with_workers(workers: Vec<Box<dyn Worker>>) -> Result<Self> {
        let mut controller = Self {
            lanes: Vec::with_capacity(workers.len()),
        };

        for worker in workers {
            let kind = worker.kind();
            // Capacity 1 on both sides: one command in, one result out per round
            let (command_tx, command_rx) = bounded(1);
            let (result_tx, result_rx) = bounded(1);

            let ctx = WorkerContext {
                worker,
                command_rx,
                result_tx,
            };

            // On failure `controller` is dropped here, which joins the lanes already started
            let handle = thread::Builder::new()
                .name(format!("{}-worker", kind.name()))
                .spawn(move || worker_thread(ctx))
                .with_context(|| format!("Failed to spawn {} worker thread", kind.name()))?;

            tracing::debug!(kind = kind.name(), "worker thread started");
            controller.lanes.push(Lane {
                kind,
                command_tx,
                result_rx,
                handle: Some(handle),
                in_flight: false,
            });
        }

        Ok(controller)
    }

    /// Convenience: start the workers, process `path` and collect every report
    pub fn run(options: ReadOptions, path: impl AsRef<Path>) -> Result<Vec<Report>> {
        let mut controller = Self::new(options)?;
        controller.handle_file(path)?;
        controller.collect(|_| {})
    }

    /// Ask every running worker to process `path`, without waiting for any of them
    pub fn handle_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = Arc::new(path.as_ref().to_path_buf());

        for lane in self.lanes.iter_mut().filter(|lane| lane.handle.is_some()) {
            if lane.in_flight {
                return Err(anyhow!("{} worker is already processing a file", lane.kind));
            }
            lane.command_tx
                .send(Command::Process(Arc::clone(&path)))
                .map_err(|_| anyhow!("{} worker is no longer running", lane.kind))?;
            lane.in_flight = true;
            tracing::debug!(kind = lane.kind.name(), path = %path.display(), "dispatched");
        }

        Ok(())
    }

    /// Wait for every dispatched worker, in completion order.
    ///
    /// `on_report` sees each result as soon as it arrives; the worker that
    /// produced it is then stopped and joined while the others keep running.
    pub fn collect<F>(&mut self, mut on_report: F) -> Result<Vec<Report>>
    where
        F: FnMut(&Report),
    {
        let mut pending: Vec<usize> = (0..self.lanes.len())
            .filter(|&index| self.lanes[index].in_flight)
            .collect();
        let mut reports = Vec::with_capacity(pending.len());

        while !pending.is_empty() {
            let (slot, received) = self.next_result(&pending);
            let index = pending.remove(slot);
            let kind = self.lanes[index].kind;
            self.lanes[index].in_flight = false;

            match received {
                Ok(outcome) => {
                    let report = Report { kind, outcome };
                    match &report.outcome {
                        Ok(value) => {
                            tracing::info!(kind = kind.name(), value = *value, "result ready")
                        }
                        Err(e) => {
                            tracing::info!(kind = kind.name(), error = %e, "result ready")
                        }
                    }
                    on_report(&report);
                    reports.push(report);
                    self.stop(index)?;
                }
                Err(RecvError) => {
                    // The thread hung up without a result; joining surfaces the panic
                    self.stop(index)?;
                    return Err(anyhow!("{} worker exited without a result", kind));
                }
            }
        }

        Ok(reports)
    }

    /// Kinds whose threads have not been stopped yet
    pub fn running(&self) -> Vec<AggregateKind> {
        self.lanes
            .iter()
            .filter(|lane| lane.handle.is_some())
            .map(|lane| lane.kind)
            .collect()
    }

    /// Block until one of the `pending` lanes delivers, returning its slot in `pending`
    fn next_result(&self, pending: &[usize]) -> (usize, Result<Outcome, RecvError>) {
        let mut select = Select::new();
        for &index in pending {
            select.recv(&self.lanes[index].result_rx);
        }

        let operation = select.select();
        let slot = operation.index();
        let received = operation.recv(&self.lanes[pending[slot]].result_rx);
        (slot, received)
    }

    /// Stop a single worker thread and wait for it to exit
    fn stop(&mut self, index: usize) -> Result<()> {
        let lane = &mut self.lanes[index];
        let Some(handle) = lane.handle.take() else {
            return Ok(());
        };

        // A worker that already exited has dropped its receiver; nothing to tell it
        let _ = lane.command_tx.send(Command::Stop);
        handle
            .join()
            .map_err(|_| anyhow!("{} worker thread panicked", lane.kind))?;

        tracing::debug!(kind = lane.kind.name(), "worker thread stopped");
        Ok(())
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        for index in 0..self.lanes.len() {
            if let Err(e) = self.stop(index) {
                tracing::warn!("{}", e);
            }
        }
    }
}

/// Worker thread loop: run each command to completion, exit on `Stop`
fn worker_thread(ctx: WorkerContext) {
    let kind = ctx.worker.kind();

    while let Ok(command) = ctx.command_rx.recv() {
        match command {
            Command::Process(path) => {
                tracing::trace!(kind = kind.name(), "processing {}", path.display());
                let outcome = ctx.worker.process(&path);

                if ctx.result_tx.send(outcome).is_err() {
                    break; // Controller dropped
                }
            }
            Command::Stop => break,
        }
    }

    tracing::trace!(kind = kind.name(), "worker thread exiting");
}
