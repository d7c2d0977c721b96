use crate::errors::MemdumpError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Process '{pid}' not found")]
    NotFound { pid: u32 },

    #[error("Invalid PID: {pid}")]
    InvalidPid { pid: u32 },

    #[error("Failed to enumerate processes: {message}")]
    EnumerationFailed { message: String },

    #[error("Failed to determine architecture of process '{pid}': {message}")]
    ArchQueryFailed { pid: u32, message: String },
}

impl MemdumpError for ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            ProcessError::NotFound { .. } => "PROCESS_NOT_FOUND",
            ProcessError::InvalidPid { .. } => "PROCESS_INVALID_PID",
            ProcessError::EnumerationFailed { .. } => "PROCESS_ENUMERATION_FAILED",
            ProcessError::ArchQueryFailed { .. } => "PROCESS_ARCH_QUERY_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ProcessError::NotFound { .. } | ProcessError::InvalidPid { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = ProcessError::NotFound { pid: 4242 };
        assert_eq!(error.to_string(), "Process '4242' not found");
        assert_eq!(error.error_code(), "PROCESS_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_arch_query_failed_is_not_user_error() {
        let error = ProcessError::ArchQueryFailed {
            pid: 1,
            message: "permission denied".to_string(),
        };
        assert_eq!(error.error_code(), "PROCESS_ARCH_QUERY_FAILED");
        assert!(!error.is_user_error());
    }
}
