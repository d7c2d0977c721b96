//! Configuration type definitions.
//!
//! These types are serialized/deserialized from TOML config files. Every
//! field is optional in the file; accessor methods supply the documented
//! defaults so a missing file, section or key all behave identically.
//!
//! # Example Configuration
//!
//! ```toml
//! [tools]
//! dump_tool_dir = "/opt/memdump/userdump8.1"
//! dump_tool_exe = "userdump.exe"
//! compressor = "/opt/memdump/zip/7za.exe"
//!
//! [output]
//! directory = "/var/dumps"
//!
//! [logging]
//! log_file = "log.txt"
//! error_log_file = "error.txt"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.memdump/config.toml`
/// 2. Project config: `./.memdump/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MemdumpConfig {
    /// External tool locations
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Where finished archives are deposited
    #[serde(default)]
    pub output: OutputConfig,

    /// Tool invocation log artifacts
    #[serde(default)]
    pub logging: LogConfig,
}

impl MemdumpConfig {
    /// A copy of this configuration with every optional field filled in
    /// with its effective default. Used for `config-show` style output.
    pub fn resolved(&self) -> MemdumpConfig {
        MemdumpConfig {
            tools: ToolsConfig {
                dump_tool_dir: Some(self.tools.dump_tool_dir()),
                dump_tool_exe: Some(self.tools.dump_tool_exe()),
                compressor: Some(self.tools.compressor()),
            },
            output: OutputConfig {
                directory: Some(self.output.directory()),
            },
            logging: LogConfig {
                log_file: Some(self.logging.log_file()),
                error_log_file: Some(self.logging.error_log_file()),
            },
        }
    }
}

/// Locations of the external capture and compression tools.
///
/// Relative paths resolve against the current working directory, matching
/// the original deployment layout where the tools ship next to the binary.
/// Deployments that install elsewhere pin absolute paths in the user config.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToolsConfig {
    /// Directory holding the capture tool, with `x86/` and `x64/` subdirs.
    /// Default: `userdump8.1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dump_tool_dir: Option<PathBuf>,

    /// Capture tool executable name inside the architecture subdir.
    /// Default: `userdump.exe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dump_tool_exe: Option<String>,

    /// Path to the archiver executable. Default: `zip/7za.exe`, with a PATH
    /// lookup fallback when the configured path does not exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressor: Option<PathBuf>,
}

impl ToolsConfig {
    pub fn dump_tool_dir(&self) -> PathBuf {
        self.dump_tool_dir
            .clone()
            .unwrap_or_else(defaults::default_dump_tool_dir)
    }

    pub fn dump_tool_exe(&self) -> String {
        self.dump_tool_exe
            .clone()
            .unwrap_or_else(defaults::default_dump_tool_exe)
    }

    pub fn compressor(&self) -> PathBuf {
        self.compressor
            .clone()
            .unwrap_or_else(defaults::default_compressor)
    }
}

/// Destination for finished archives.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Directory the final `{base}.zip` is moved into.
    /// Default: `.` (where the application is run from).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl OutputConfig {
    pub fn directory(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(defaults::default_output_directory)
    }
}

/// Tool invocation log artifacts.
///
/// Both files are append-only and shared across invocations, with no
/// rotation or size limit.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// Receives each invocation's command line and captured stdout.
    /// Default: `log.txt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Receives each invocation's captured stderr. Default: `error.txt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_log_file: Option<PathBuf>,
}

impl LogConfig {
    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(defaults::default_log_file)
    }

    pub fn error_log_file(&self) -> PathBuf {
        self.error_log_file
            .clone()
            .unwrap_or_else(defaults::default_error_log_file)
    }
}
