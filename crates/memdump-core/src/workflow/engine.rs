//! The dump state machine.
//!
//! `Idle -> Capturing -> Compressing -> Relocating -> Done`, with a
//! terminal failure reachable from every non-terminal stage. Single
//! attempt, no rollback: each stage is idempotent when retried from
//! scratch but not reversible (a capture cannot be undone), and the
//! workflow targets interactive, human-supervised use.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::archive;
use crate::capture;
use crate::config::MemdumpConfig;
use crate::naming;
use crate::runner::ToolRunner;
use crate::workflow::errors::DumpError;
use crate::workflow::types::{DumpRequest, DumpStage, DumpSuccess, ProgressEvent, ProgressSink};

/// The two temp artifacts owned by one in-flight invocation.
///
/// Dropping deletes whatever is present, best-effort. Tying cleanup to drop
/// means it runs on success, on every early error return, and when the
/// worker unwinds - a deletion failure is warn-logged and never masks the
/// primary outcome.
struct TempArtifacts {
    dump_file: PathBuf,
    archive_file: PathBuf,
}

impl TempArtifacts {
    fn new(base_name: &str, temp_dir: &Path) -> Self {
        Self {
            dump_file: temp_dir.join(format!("{}.dmp", base_name)),
            archive_file: temp_dir.join(format!("{}.zip", base_name)),
        }
    }
}

impl Drop for TempArtifacts {
    fn drop(&mut self) {
        for path in [&self.dump_file, &self.archive_file] {
            if !path.exists() {
                continue;
            }
            match fs::remove_file(path) {
                Ok(()) => {
                    info!(
                        event = "core.workflow.temp_artifact_removed",
                        path = %path.display()
                    );
                }
                Err(e) => {
                    warn!(
                        event = "core.workflow.temp_cleanup_failed",
                        path = %path.display(),
                        error = %e
                    );
                }
            }
        }
    }
}

/// Run one dump invocation to its terminal outcome on the current thread.
///
/// Progress events reach `sink` strictly in stage order. Temp artifacts
/// are deleted before this returns, whatever the outcome.
pub fn run_dump(
    request: &DumpRequest,
    config: &MemdumpConfig,
    runner: &dyn ToolRunner,
    sink: &dyn ProgressSink,
) -> Result<DumpSuccess, DumpError> {
    let base_name = naming::base_name(&request.process.name, &naming::acting_user());
    run_dump_named(request, config, runner, sink, &base_name, &std::env::temp_dir())
}

/// `run_dump` with the base name and temp location made explicit.
pub(crate) fn run_dump_named(
    request: &DumpRequest,
    config: &MemdumpConfig,
    runner: &dyn ToolRunner,
    sink: &dyn ProgressSink,
    base_name: &str,
    temp_dir: &Path,
) -> Result<DumpSuccess, DumpError> {
    let artifacts = TempArtifacts::new(base_name, temp_dir);

    info!(
        event = "core.workflow.dump_started",
        pid = request.process.pid,
        process = %request.process.name,
        base_name = base_name
    );

    let result = execute(request, config, runner, sink, &artifacts, base_name);

    match &result {
        Ok(success) => info!(
            event = "core.workflow.dump_completed",
            pid = request.process.pid,
            final_path = %success.final_path.display()
        ),
        Err(e) => warn!(
            event = "core.workflow.dump_failed",
            pid = request.process.pid,
            error = %e
        ),
    }

    result
    // `artifacts` drops here: temp files are gone before the caller sees
    // the outcome
}

fn execute(
    request: &DumpRequest,
    config: &MemdumpConfig,
    runner: &dyn ToolRunner,
    sink: &dyn ProgressSink,
    artifacts: &TempArtifacts,
    base_name: &str,
) -> Result<DumpSuccess, DumpError> {
    sink.emit(ProgressEvent::stage(DumpStage::Capturing));
    capture::capture_process(&request.process, &artifacts.dump_file, &config.tools, runner)
        .map_err(|source| DumpError::CaptureFailed { source })?;

    sink.emit(ProgressEvent::stage(DumpStage::Compressing));
    let compressor = archive::resolve_compressor(&config.tools)
        .map_err(|source| DumpError::CompressionFailed { source })?;
    archive::compress_file(
        &artifacts.dump_file,
        &artifacts.archive_file,
        &compressor,
        runner,
    )
    .map_err(|source| DumpError::CompressionFailed { source })?;

    sink.emit(ProgressEvent::stage(DumpStage::Relocating));
    let final_path = request.destination_dir.join(format!("{}.zip", base_name));
    relocate(&artifacts.archive_file, &final_path)?;

    sink.emit(ProgressEvent::stage(DumpStage::Done));
    Ok(DumpSuccess { final_path })
}

/// Move the finished archive from the temp location to its destination.
///
/// Refuses to overwrite an existing destination. The temp directory and the
/// destination may sit on different filesystems, so a failed rename falls
/// back to copy-then-delete; a leftover source after a successful copy is
/// left to the drop guard.
fn relocate(from: &Path, to: &Path) -> Result<(), DumpError> {
    if to.exists() {
        return Err(DumpError::RelocationFailed {
            path: to.to_path_buf(),
            message: "destination already exists".to_string(),
        });
    }

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            fs::copy(from, to).map_err(|copy_err| DumpError::RelocationFailed {
                path: to.to_path_buf(),
                message: format!("{} (rename: {})", copy_err, rename_err),
            })?;
            if let Err(e) = fs::remove_file(from) {
                warn!(
                    event = "core.workflow.relocate_source_remove_failed",
                    path = %from.display(),
                    error = %e
                );
            }
            Ok(())
        }
    }
}
