//! Caller-facing dump API.
//!
//! `start_dump` runs the workflow on one dedicated background thread per
//! invocation so the caller (typically a UI loop) stays responsive, and
//! hands back a [`DumpHandle`] carrying the progress stream and the
//! terminal outcome. One invocation in flight at a time is the caller's
//! contract - it disables its trigger affordance while a handle is live.
//! Cancellation is not supported: a started workflow runs to completion or
//! failure.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::thread::JoinHandle;

use tracing::{error, info};

use crate::config::MemdumpConfig;
use crate::runner::{FileInvocationLog, SystemRunner, ToolRunner};
use crate::workflow::engine;
use crate::workflow::errors::DumpError;
use crate::workflow::types::{DumpRequest, DumpSuccess, ProgressEvent};

/// Handle to one in-flight dump invocation.
pub struct DumpHandle {
    events: Receiver<ProgressEvent>,
    worker: JoinHandle<Result<DumpSuccess, DumpError>>,
}

impl DumpHandle {
    /// Progress stream, delivered strictly in stage order. The stream ends
    /// when the workflow reaches its terminal outcome.
    pub fn events(&self) -> &Receiver<ProgressEvent> {
        &self.events
    }

    /// Block until the workflow finishes and return its terminal outcome.
    ///
    /// A worker that panicked surfaces as [`DumpError::Interrupted`]; its
    /// temp artifacts were already removed while unwinding.
    pub fn wait(self) -> Result<DumpSuccess, DumpError> {
        match self.worker.join() {
            Ok(outcome) => outcome,
            Err(_) => {
                error!(event = "core.workflow.worker_panicked");
                Err(DumpError::Interrupted {
                    message: "worker thread panicked".to_string(),
                })
            }
        }
    }
}

/// Start a dump on a background thread with the real tool runner, wired to
/// the configured invocation log artifacts.
pub fn start_dump(request: DumpRequest, config: &MemdumpConfig) -> DumpHandle {
    let log = FileInvocationLog::new(
        config.logging.log_file(),
        config.logging.error_log_file(),
    );
    start_dump_with(request, config.clone(), SystemRunner::new(Arc::new(log)))
}

/// `start_dump` with an injected runner, for callers and tests that
/// substitute tool doubles.
pub fn start_dump_with<R>(request: DumpRequest, config: MemdumpConfig, runner: R) -> DumpHandle
where
    R: ToolRunner + 'static,
{
    let (tx, rx) = mpsc::channel();

    info!(
        event = "core.workflow.worker_started",
        pid = request.process.pid,
        process = %request.process.name
    );

    let worker =
        std::thread::spawn(move || engine::run_dump(&request, &config, &runner, &tx));

    DumpHandle { events: rx, worker }
}
