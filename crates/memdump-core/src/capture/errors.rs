use std::path::PathBuf;

use crate::errors::MemdumpError;
use crate::runner::RunnerError;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Capture tool not found at '{path}'")]
    ToolMissing { path: PathBuf },

    #[error(transparent)]
    Runner {
        #[from]
        source: RunnerError,
    },

    #[error("Capture tool did not report success for process '{pid}': {message}")]
    DumpFailed { pid: u32, message: String },

    #[error("Capture tool reported success but dump file '{path}' does not exist")]
    DumpMissing { path: PathBuf },
}

impl MemdumpError for CaptureError {
    fn error_code(&self) -> &'static str {
        match self {
            CaptureError::ToolMissing { .. } => "CAPTURE_TOOL_MISSING",
            CaptureError::Runner { .. } => "TOOL_START_FAILED",
            CaptureError::DumpFailed { .. } => "CAPTURE_DUMP_FAILED",
            CaptureError::DumpMissing { .. } => "CAPTURE_OUTPUT_MISSING",
        }
    }
}
