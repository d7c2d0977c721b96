use std::path::PathBuf;

use crate::errors::MemdumpError;
use crate::runner::RunnerError;

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Input file '{path}' does not exist")]
    InputMissing { path: PathBuf },

    #[error("Compressor not found at '{path}' or on PATH")]
    CompressorMissing { path: PathBuf },

    #[error(transparent)]
    Runner {
        #[from]
        source: RunnerError,
    },

    #[error("Compressor did not report success: {message}")]
    CompressionFailed { message: String },

    #[error("Compressor reported success but archive '{path}' does not exist")]
    ArchiveMissing { path: PathBuf },
}

impl MemdumpError for ArchiveError {
    fn error_code(&self) -> &'static str {
        match self {
            ArchiveError::InputMissing { .. } => "ARCHIVE_INPUT_MISSING",
            ArchiveError::CompressorMissing { .. } => "ARCHIVE_COMPRESSOR_MISSING",
            ArchiveError::Runner { .. } => "TOOL_START_FAILED",
            ArchiveError::CompressionFailed { .. } => "ARCHIVE_COMPRESSION_FAILED",
            ArchiveError::ArchiveMissing { .. } => "ARCHIVE_OUTPUT_MISSING",
        }
    }
}
