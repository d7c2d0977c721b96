//! # Configuration System
//!
//! Hierarchical TOML configuration for memdump.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values matching the original tool layout
//! 2. **User config** - `~/.memdump/config.toml` (global user preferences)
//! 3. **Project config** - `./.memdump/config.toml` (per-directory overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.memdump/config.toml
//! [tools]
//! dump_tool_dir = "/opt/memdump/userdump8.1"
//! compressor = "/usr/bin/7za"
//!
//! [output]
//! directory = "/var/dumps"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use memdump_core::config::MemdumpConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MemdumpConfig::load_hierarchy()?;
//!     let compressor = config.tools.compressor();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{LogConfig, MemdumpConfig, OutputConfig, ToolsConfig};
pub use validation::validate_config;

impl MemdumpConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
