//! External compressor wrapper.
//!
//! The compressor is a 7-Zip-compatible archiver treated as a textual
//! black box: success is recognized by its canonical completion phrase,
//! cross-checked against the archive actually existing on disk.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::archive::errors::ArchiveError;
use crate::config::ToolsConfig;
use crate::runner::{ToolInvocation, ToolResult, ToolRunner};

/// Canonical "operation completed without error" phrase in compressor output.
pub const COMPRESSION_OK_MARKER: &str = "Everything is Ok";

/// Compress a single file into a zip archive.
///
/// The input must already exist; a missing input returns immediately
/// without spawning the compressor or touching the invocation log.
///
/// Success requires BOTH the completion phrase in captured stdout AND the
/// archive existing on disk afterward. Either signal alone is insufficient:
/// the phrase guards against partial writes, the existence check against
/// misleading output.
pub fn compress_file(
    input: &Path,
    output: &Path,
    compressor: &Path,
    runner: &dyn ToolRunner,
) -> Result<(), ArchiveError> {
    if !input.exists() {
        warn!(
            event = "core.archive.input_missing",
            path = %input.display()
        );
        return Err(ArchiveError::InputMissing {
            path: input.to_path_buf(),
        });
    }

    // The fully-qualified input path keeps the archiver from recreating the
    // input's directory structure inside the archive.
    let full_input = input
        .canonicalize()
        .map_err(|e| ArchiveError::CompressionFailed {
            message: format!("cannot resolve input path '{}': {}", input.display(), e),
        })?;

    info!(
        event = "core.archive.compress_started",
        input = %full_input.display(),
        output = %output.display()
    );

    // add to archive, no progress display, "normal" ratio, zip container
    let invocation = ToolInvocation::new(
        compressor,
        vec![
            "a".to_string(),
            "-bd".to_string(),
            "-mx5".to_string(),
            "-tzip".to_string(),
            output.display().to_string(),
            full_input.display().to_string(),
        ],
    );

    let result = runner.run(&invocation)?;

    if !result.stdout.contains(COMPRESSION_OK_MARKER) {
        warn!(
            event = "core.archive.compress_failed",
            output = %output.display()
        );
        return Err(ArchiveError::CompressionFailed {
            message: failure_detail(&result),
        });
    }

    if !output.exists() {
        warn!(
            event = "core.archive.archive_missing_after_success",
            output = %output.display()
        );
        return Err(ArchiveError::ArchiveMissing {
            path: output.to_path_buf(),
        });
    }

    info!(
        event = "core.archive.compress_completed",
        output = %output.display()
    );
    Ok(())
}

/// Resolve the compressor executable.
///
/// Uses the configured path when it exists; otherwise falls back to a PATH
/// lookup on the configured program name (with and without its extension).
pub fn resolve_compressor(tools: &ToolsConfig) -> Result<PathBuf, ArchiveError> {
    let configured = tools.compressor();
    if configured.exists() {
        return Ok(configured);
    }

    for candidate in [
        configured.file_name().map(PathBuf::from),
        configured.file_stem().map(PathBuf::from),
    ]
    .into_iter()
    .flatten()
    {
        if let Ok(found) = which::which(&candidate) {
            info!(
                event = "core.archive.compressor_resolved_from_path",
                configured = %configured.display(),
                resolved = %found.display()
            );
            return Ok(found);
        }
    }

    Err(ArchiveError::CompressorMissing { path: configured })
}

/// Most useful single line to report when the compressor declines.
fn failure_detail(result: &ToolResult) -> String {
    let stderr = result.stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    result
        .stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("compressor produced no output")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::RunnerError;
    use std::sync::Mutex;

    /// Runner double returning canned output, optionally creating the
    /// archive, and recording every invocation.
    struct FakeRunner {
        stdout: String,
        create_output: bool,
        invocations: Mutex<Vec<ToolInvocation>>,
    }

    impl FakeRunner {
        fn new(stdout: &str, create_output: bool) -> Self {
            Self {
                stdout: stdout.to_string(),
                create_output,
                invocations: Mutex::new(Vec::new()),
            }
        }

        fn invocation_count(&self) -> usize {
            self.invocations.lock().unwrap().len()
        }
    }

    impl ToolRunner for FakeRunner {
        fn run(&self, invocation: &ToolInvocation) -> Result<ToolResult, RunnerError> {
            self.invocations.lock().unwrap().push(invocation.clone());
            if self.create_output {
                // Archive path is the first non-flag argument
                let output = invocation
                    .args
                    .iter()
                    .find(|a| !a.starts_with('-') && *a != "a")
                    .expect("no output path in invocation");
                std::fs::write(output, b"zip").unwrap();
            }
            Ok(ToolResult {
                stdout: self.stdout.clone(),
                stderr: String::new(),
            })
        }
    }

    fn temp_input(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("snapshot.dmp");
        std::fs::write(&path, b"dump-bytes").unwrap();
        path
    }

    #[test]
    fn test_compress_missing_input_spawns_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let runner = FakeRunner::new(COMPRESSION_OK_MARKER, true);

        let result = compress_file(
            &dir.path().join("missing.dmp"),
            &dir.path().join("out.zip"),
            Path::new("7za"),
            &runner,
        );

        assert!(matches!(result, Err(ArchiveError::InputMissing { .. })));
        assert_eq!(runner.invocation_count(), 0);
    }

    #[test]
    fn test_compress_success() {
        let dir = tempfile::tempdir().unwrap();
        let input = temp_input(&dir);
        let output = dir.path().join("out.zip");
        let runner = FakeRunner::new("...\nEverything is Ok\n", true);

        compress_file(&input, &output, Path::new("7za"), &runner).unwrap();
        assert!(output.exists());
        assert_eq!(runner.invocation_count(), 1);
    }

    #[test]
    fn test_compress_passes_canonical_input_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let input = temp_input(&dir);
        let output = dir.path().join("out.zip");
        let runner = FakeRunner::new(COMPRESSION_OK_MARKER, true);

        compress_file(&input, &output, Path::new("7za"), &runner).unwrap();

        let invocations = runner.invocations.lock().unwrap();
        let args = &invocations[0].args;
        assert_eq!(&args[0..4], &["a", "-bd", "-mx5", "-tzip"]);
        assert_eq!(args[4], output.display().to_string());
        // Input is passed fully qualified
        assert_eq!(args[5], input.canonicalize().unwrap().display().to_string());
    }

    #[test]
    fn test_compress_success_phrase_without_archive_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = temp_input(&dir);
        let output = dir.path().join("out.zip");
        // Claims success, never writes the archive
        let runner = FakeRunner::new("Everything is Ok", false);

        let result = compress_file(&input, &output, Path::new("7za"), &runner);
        assert!(matches!(result, Err(ArchiveError::ArchiveMissing { .. })));
    }

    #[test]
    fn test_compress_wrong_phrase_fails_even_with_archive() {
        let dir = tempfile::tempdir().unwrap();
        let input = temp_input(&dir);
        let output = dir.path().join("out.zip");
        let runner = FakeRunner::new("ERROR: disk full", true);

        let result = compress_file(&input, &output, Path::new("7za"), &runner);
        assert!(matches!(
            result,
            Err(ArchiveError::CompressionFailed { .. })
        ));
    }

    #[test]
    fn test_resolve_compressor_prefers_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let compressor = dir.path().join("7za");
        std::fs::write(&compressor, b"#!/bin/sh\n").unwrap();

        let tools: ToolsConfig = toml::from_str(&format!(
            "compressor = \"{}\"",
            compressor.display()
        ))
        .unwrap();

        assert_eq!(resolve_compressor(&tools).unwrap(), compressor);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_compressor_falls_back_to_path_lookup() {
        // Configured location is gone, but the program name ("sh") exists on
        // PATH everywhere on unix.
        let tools: ToolsConfig =
            toml::from_str("compressor = \"/nonexistent-dir/sh\"").unwrap();

        let resolved = resolve_compressor(&tools).unwrap();
        assert!(resolved.ends_with("sh"));
    }

    #[test]
    fn test_resolve_compressor_missing_everywhere() {
        let tools: ToolsConfig =
            toml::from_str("compressor = \"/nonexistent-dir/memdump-no-such-tool\"").unwrap();

        let result = resolve_compressor(&tools);
        assert!(matches!(
            result,
            Err(ArchiveError::CompressorMissing { .. })
        ));
    }

    #[test]
    fn test_failure_detail_prefers_stderr() {
        let result = ToolResult {
            stdout: "line one\nline two\n".to_string(),
            stderr: "fatal: broken\n".to_string(),
        };
        assert_eq!(failure_detail(&result), "fatal: broken");

        let result = ToolResult {
            stdout: "line one\nlast line\n\n".to_string(),
            stderr: String::new(),
        };
        assert_eq!(failure_detail(&result), "last line");

        assert_eq!(
            failure_detail(&ToolResult::default()),
            "compressor produced no output"
        );
    }
}
