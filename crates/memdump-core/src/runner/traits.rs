use crate::runner::errors::RunnerError;
use crate::runner::types::{ToolInvocation, ToolResult};

/// Seam for invoking external tools.
///
/// The capture and archive components depend on this trait rather than on
/// process spawning directly, so tests can substitute doubles that count
/// invocations or return canned output.
pub trait ToolRunner: Send + Sync {
    /// Run the program, blocking until it exits, and return its captured
    /// output streams. One attempt per call; no retries.
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolResult, RunnerError>;
}
