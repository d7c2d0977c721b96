use std::path::PathBuf;

use crate::archive::ArchiveError;
use crate::capture::CaptureError;
use crate::errors::MemdumpError;

/// Terminal failure of a dump invocation, one variant per stage.
///
/// None of these are retried; the workflow is single-attempt by design and
/// the temp artifacts are cleaned up before the error reaches the caller.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("Memory capture failed: {source}")]
    CaptureFailed {
        #[source]
        source: CaptureError,
    },

    #[error("Compression failed: {source}")]
    CompressionFailed {
        #[source]
        source: ArchiveError,
    },

    #[error("Could not move archive to '{path}': {message}")]
    RelocationFailed { path: PathBuf, message: String },

    #[error("Dump worker terminated unexpectedly: {message}")]
    Interrupted { message: String },
}

impl MemdumpError for DumpError {
    fn error_code(&self) -> &'static str {
        match self {
            DumpError::CaptureFailed { .. } => "DUMP_CAPTURE_FAILED",
            DumpError::CompressionFailed { .. } => "DUMP_COMPRESSION_FAILED",
            DumpError::RelocationFailed { .. } => "DUMP_RELOCATION_FAILED",
            DumpError::Interrupted { .. } => "DUMP_INTERRUPTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_by_stage() {
        let error = DumpError::CaptureFailed {
            source: CaptureError::ToolMissing {
                path: PathBuf::from("userdump8.1/x64/userdump.exe"),
            },
        };
        assert_eq!(error.error_code(), "DUMP_CAPTURE_FAILED");

        let error = DumpError::RelocationFailed {
            path: PathBuf::from("./out.zip"),
            message: "destination already exists".to_string(),
        };
        assert_eq!(error.error_code(), "DUMP_RELOCATION_FAILED");
        assert!(error.to_string().contains("./out.zip"));
    }

    #[test]
    fn test_source_chain_preserved() {
        use std::error::Error;

        let error = DumpError::CompressionFailed {
            source: ArchiveError::ArchiveMissing {
                path: PathBuf::from("/tmp/x.zip"),
            },
        };
        assert!(error.source().is_some());
    }
}
