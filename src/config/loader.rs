//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{ModlogConfig, OutputFormat};
use crate::config::secret_string;
use crate::domain::errors::ModlogError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into ModlogConfig
/// 4. Applies environment variable overrides (`MODLOG_*` prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use modlog::config::loader::load_config;
///
/// let config = load_config("modlog.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ModlogConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ModlogError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ModlogError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ModlogConfig = toml::from_str(&contents)
        .map_err(|e| ModlogError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ModlogError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ModlogError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `MODLOG_*` prefix
///
/// Environment variables follow the pattern `MODLOG_<SECTION>_<KEY>`,
/// e.g. `MODLOG_MODEM_ADDRESS`, `MODLOG_OUTPUT_FORMAT`.
fn apply_env_overrides(config: &mut ModlogConfig) -> Result<()> {
    if let Ok(val) = std::env::var("MODLOG_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("MODLOG_MODEM_ADDRESS") {
        config.modem.address = val;
    }
    if let Ok(val) = std::env::var("MODLOG_MODEM_USERNAME") {
        config.modem.username = val;
    }
    if let Ok(val) = std::env::var("MODLOG_MODEM_PASSWORD") {
        config.modem.password = secret_string(val);
    }
    if let Ok(val) = std::env::var("MODLOG_MODEM_SESSION_COOKIE_NAME") {
        config.modem.session_cookie_name = val;
    }

    if let Ok(val) = std::env::var("MODLOG_OUTPUT_FORMAT") {
        config.output.format = val
            .parse::<OutputFormat>()
            .map_err(ModlogError::Configuration)?;
    }
    if let Ok(val) = std::env::var("MODLOG_OUTPUT_BASE_PATH") {
        config.output.base_path = val;
    }
    if let Ok(val) = std::env::var("MODLOG_OUTPUT_FILE_NAME_PATTERN") {
        config.output.file_name_pattern = val;
    }

    Ok(())
}
