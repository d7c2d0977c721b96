//! External dump tool wrapper.
//!
//! The capture tool ships as one binary per architecture; dumping a 64-bit
//! process with the 32-bit variant produces a useless snapshot, so the
//! variant is keyed off the architecture recorded in the target's
//! [`ProcessRef`] snapshot.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::capture::errors::CaptureError;
use crate::config::ToolsConfig;
use crate::process::{ProcessArch, ProcessRef};
use crate::runner::{ToolInvocation, ToolRunner};

/// Canonical success phrase in capture tool output.
pub const DUMP_OK_MARKER: &str = "The process was dumped successfully.";

/// Path of the capture tool variant for an architecture:
/// `<dump_tool_dir>/{x86,x64}/<dump_tool_exe>`.
pub fn capture_tool_path(tools: &ToolsConfig, arch: ProcessArch) -> PathBuf {
    tools
        .dump_tool_dir()
        .join(arch.tool_subdir())
        .join(tools.dump_tool_exe())
}

/// Produce a memory snapshot of `target` at `output`.
///
/// The architecture-matched tool variant must exist on disk; otherwise this
/// returns without invoking anything. Success requires the canonical phrase
/// in captured stdout and the dump file existing afterward.
pub fn capture_process(
    target: &ProcessRef,
    output: &Path,
    tools: &ToolsConfig,
    runner: &dyn ToolRunner,
) -> Result<(), CaptureError> {
    let tool = capture_tool_path(tools, target.arch);
    if !tool.exists() {
        warn!(
            event = "core.capture.tool_missing",
            path = %tool.display(),
            arch = %target.arch
        );
        return Err(CaptureError::ToolMissing { path: tool });
    }

    info!(
        event = "core.capture.capture_started",
        pid = target.pid,
        process = %target.name,
        arch = %target.arch,
        tool = %tool.display()
    );

    let invocation = ToolInvocation::new(
        tool,
        vec![target.pid.to_string(), output.display().to_string()],
    );

    let result = runner.run(&invocation)?;

    if !result.stdout.contains(DUMP_OK_MARKER) {
        warn!(
            event = "core.capture.capture_failed",
            pid = target.pid,
            process = %target.name
        );
        return Err(CaptureError::DumpFailed {
            pid: target.pid,
            message: dump_failure_detail(&result.stdout, &result.stderr),
        });
    }

    if !output.exists() {
        warn!(
            event = "core.capture.dump_missing_after_success",
            path = %output.display()
        );
        return Err(CaptureError::DumpMissing {
            path: output.to_path_buf(),
        });
    }

    info!(
        event = "core.capture.capture_completed",
        pid = target.pid,
        output = %output.display()
    );
    Ok(())
}

fn dump_failure_detail(stdout: &str, stderr: &str) -> String {
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("capture tool produced no output")
        .to_string()
}
