//! Default values for configuration accessors.
//!
//! The defaults mirror the original deployment layout: the external tools
//! ship in directories next to the binary and are addressed relative to the
//! current working directory, and archives land where the application runs.

use std::path::PathBuf;

/// Capture tool directory, containing `x86/` and `x64/` variants.
pub fn default_dump_tool_dir() -> PathBuf {
    PathBuf::from("userdump8.1")
}

/// Capture tool executable name.
pub fn default_dump_tool_exe() -> String {
    "userdump.exe".to_string()
}

/// Archiver executable path.
pub fn default_compressor() -> PathBuf {
    PathBuf::from("zip").join("7za.exe")
}

/// Destination directory for finished archives.
pub fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

/// Invocation log (command lines + captured stdout).
pub fn default_log_file() -> PathBuf {
    PathBuf::from("log.txt")
}

/// Error log (captured stderr).
pub fn default_error_log_file() -> PathBuf {
    PathBuf::from("error.txt")
}
