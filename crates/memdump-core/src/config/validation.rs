//! Configuration validation.

use crate::config::types::MemdumpConfig;
use crate::errors::ConfigError;

/// Validate a merged configuration.
///
/// Checks structural sanity only; tool files are not required to exist at
/// load time (the capture and archive preconditions report missing tools at
/// invocation time, against the process that actually needs them).
pub fn validate_config(config: &MemdumpConfig) -> Result<(), ConfigError> {
    if config.tools.dump_tool_exe().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "tools.dump_tool_exe must not be empty".to_string(),
        });
    }

    if config.tools.compressor().as_os_str().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "tools.compressor must not be empty".to_string(),
        });
    }

    if config.output.directory().as_os_str().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "output.directory must not be empty".to_string(),
        });
    }

    if config.logging.log_file() == config.logging.error_log_file() {
        return Err(ConfigError::InvalidConfiguration {
            message: "logging.log_file and logging.error_log_file must differ".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&MemdumpConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_dump_tool_exe_rejected() {
        let config: MemdumpConfig = toml::from_str(
            r#"
[tools]
dump_tool_exe = ""
"#,
        )
        .unwrap();
        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_identical_log_files_rejected() {
        let config: MemdumpConfig = toml::from_str(
            r#"
[logging]
log_file = "same.txt"
error_log_file = "same.txt"
"#,
        )
        .unwrap();
        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }
}
