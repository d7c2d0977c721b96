//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.memdump/config.toml` (global user preferences)
//! 3. **Project config** - `./.memdump/config.toml` (per-directory overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::path::PathBuf;

use crate::config::types::{LogConfig, MemdumpConfig, OutputConfig, ToolsConfig};
use crate::config::validation::validate_config;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a present file fails to parse or the merged result
/// fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<MemdumpConfig, Box<dyn std::error::Error>> {
    let mut config = MemdumpConfig::default();

    // Load user config (file not found is expected, parse errors fail)
    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    // Load project config (file not found is expected, parse errors fail)
    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.memdump/config.toml.
fn load_user_config() -> Result<MemdumpConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(".memdump").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.memdump/config.toml.
fn load_project_config() -> Result<MemdumpConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?.join(".memdump").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &PathBuf) -> Result<MemdumpConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;
    let config: MemdumpConfig = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Every field is optional, so an override value replaces the base value
/// only when the override file actually set it.
pub fn merge_configs(base: MemdumpConfig, override_config: MemdumpConfig) -> MemdumpConfig {
    MemdumpConfig {
        tools: ToolsConfig {
            dump_tool_dir: override_config
                .tools
                .dump_tool_dir
                .or(base.tools.dump_tool_dir),
            dump_tool_exe: override_config
                .tools
                .dump_tool_exe
                .or(base.tools.dump_tool_exe),
            compressor: override_config.tools.compressor.or(base.tools.compressor),
        },
        output: OutputConfig {
            directory: override_config.output.directory.or(base.output.directory),
        },
        logging: LogConfig {
            log_file: override_config.logging.log_file.or(base.logging.log_file),
            error_log_file: override_config
                .logging
                .error_log_file
                .or(base.logging.error_log_file),
        },
    }
}
