use std::path::PathBuf;

use crate::errors::MemdumpError;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Failed to start external tool '{program}': {source}")]
    StartFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MemdumpError for RunnerError {
    fn error_code(&self) -> &'static str {
        match self {
            RunnerError::StartFailed { .. } => "TOOL_START_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_failed_display() {
        let error = RunnerError::StartFailed {
            program: PathBuf::from("/missing/tool"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(error.to_string().contains("/missing/tool"));
        assert_eq!(error.error_code(), "TOOL_START_FAILED");
        assert!(!error.is_user_error());
    }
}
