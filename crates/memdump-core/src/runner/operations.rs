use std::process::{Command, Stdio};
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::runner::errors::RunnerError;
use crate::runner::log::{InvocationLog, LogCategory};
use crate::runner::traits::ToolRunner;
use crate::runner::types::{ToolInvocation, ToolResult};

/// Real tool runner spawning OS processes.
///
/// Standard output and standard error are always redirected; the external
/// program never inherits the caller's console. The call blocks until the
/// program exits.
pub struct SystemRunner {
    log: Arc<dyn InvocationLog>,
}

impl SystemRunner {
    pub fn new(log: Arc<dyn InvocationLog>) -> Self {
        Self { log }
    }
}

impl ToolRunner for SystemRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolResult, RunnerError> {
        debug!(
            event = "core.runner.invocation_started",
            program = %invocation.program.display(),
            args = %invocation.args.join(" ")
        );

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                error!(
                    event = "core.runner.start_failed",
                    program = %invocation.program.display(),
                    error = %e
                );
                RunnerError::StartFailed {
                    program: invocation.program.clone(),
                    source: e,
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        // Log append failures must not abort the invocation; the sink
        // swallows them itself.
        self.log.append(
            LogCategory::Output,
            &format!("\nRunCommand: {}\n", invocation.command_line()),
        );
        self.log.append(LogCategory::Output, &stdout);
        self.log.append(LogCategory::Error, &stderr);

        info!(
            event = "core.runner.invocation_completed",
            program = %invocation.program.display(),
            exit_code = output.status.code()
        );

        Ok(ToolResult { stdout, stderr })
    }
}
