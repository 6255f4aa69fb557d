//! Configuration schema types
//!
//! This module defines the configuration structure for Modlog. Every section
//! carries its own `validate()`; the loader runs them all after parsing, so
//! a bad pattern or an unknown output format is rejected before the first
//! request is made.

use crate::config::SecretString;
use crate::domain::fields::FieldDescriptor;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Output file format
///
/// A closed set: an unrecognized format string in the configuration fails at
/// load time rather than silently producing an empty output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// A single JSON array of event objects
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Invalid output format '{other}'. Must be one of: csv, json"
            )),
        }
    }
}

/// Main Modlog configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModlogConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Modem connection, credentials, endpoints, and extraction patterns
    pub modem: ModemConfig,

    /// Event log structure and field descriptors
    pub events: EventsConfig,

    /// Output format and destination
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ModlogConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.modem.validate()?;
        self.events.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Modem connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModemConfig {
    /// Base address of the modem's web interface, e.g. `http://192.168.100.1`
    pub address: String,

    /// Login username
    pub username: String,

    /// Login password
    /// Stored securely in memory and automatically zeroized on drop
    pub password: SecretString,

    /// Name of the cookie carrying the session id after login
    pub session_cookie_name: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Endpoint paths on the modem
    pub endpoints: EndpointsConfig,

    /// Extraction patterns
    pub patterns: PatternsConfig,
}

impl ModemConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.address)
            .map_err(|e| format!("Invalid modem address '{}': {}", self.address, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Invalid modem address '{}': scheme must be http or https",
                self.address
            ));
        }

        if self.username.trim().is_empty() {
            return Err("modem username cannot be empty".to_string());
        }
        if self.session_cookie_name.trim().is_empty() {
            return Err("session_cookie_name cannot be empty".to_string());
        }
        if self.session_cookie_name.contains(['=', ';']) {
            return Err(format!(
                "session_cookie_name '{}' must not contain '=' or ';'",
                self.session_cookie_name
            ));
        }
        if self.timeout_seconds == 0 {
            return Err("timeout_seconds must be greater than zero".to_string());
        }

        self.endpoints.validate()?;
        self.patterns.validate()?;
        Ok(())
    }
}

/// Endpoint paths on the modem's web server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Page serving the login form (source of the web token)
    pub login_form: String,

    /// Form submission target for the login POST
    pub form_target: String,

    /// Index page fetched after login to obtain the session cookie
    pub index: String,

    /// Page embedding the event log XML
    pub event_log: String,
}

impl EndpointsConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, path) in [
            ("login_form", &self.login_form),
            ("form_target", &self.form_target),
            ("index", &self.index),
            ("event_log", &self.event_log),
        ] {
            if !path.starts_with('/') {
                return Err(format!(
                    "endpoint '{name}' must be an absolute path starting with '/', got '{path}'"
                ));
            }
        }
        Ok(())
    }
}

/// Extraction patterns applied to response bodies
///
/// Each pattern must compile and carry exactly one capture group; the
/// captured text is the extracted value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternsConfig {
    /// Captures the web token on the login form page
    pub web_token: String,

    /// Captures the XML region embedded in the event log page
    pub event_xml: String,
}

impl PatternsConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, pattern) in [("web_token", &self.web_token), ("event_xml", &self.event_xml)] {
            let re = Regex::new(pattern)
                .map_err(|e| format!("pattern '{name}' does not compile: {e}"))?;
            // captures_len counts the implicit whole-match group
            if re.captures_len() != 2 {
                return Err(format!(
                    "pattern '{name}' must have exactly one capture group, found {}",
                    re.captures_len() - 1
                ));
            }
        }
        Ok(())
    }
}

/// Event log structure and field descriptors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Root element of the extracted XML document
    pub root_element: String,

    /// Repeating row element beneath the root
    pub row_element: String,

    /// strftime format for `time` fields, applied after the `", "` separator
    /// in the raw value is collapsed to a single space
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Ordered field descriptors; order determines CSV column order
    pub fields: Vec<FieldDescriptor>,
}

impl EventsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.root_element.trim().is_empty() {
            return Err("events root_element cannot be empty".to_string());
        }
        if self.row_element.trim().is_empty() {
            return Err("events row_element cannot be empty".to_string());
        }
        if self.time_format.trim().is_empty() {
            return Err("events time_format cannot be empty".to_string());
        }
        if self.fields.is_empty() {
            return Err("events fields cannot be empty".to_string());
        }
        for field in &self.fields {
            field.validate()?;
        }
        if self.fields.iter().all(|f| f.exclude) {
            return Err("at least one events field must not be excluded".to_string());
        }
        Ok(())
    }

    /// Iterates the non-excluded descriptors in declaration order
    pub fn included_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.exclude)
    }
}

/// Output destination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Serialization format
    pub format: OutputFormat,

    /// Directory the output file is written into
    pub base_path: String,

    /// chrono strftime pattern producing the output file name,
    /// e.g. `"eventlog-%Y%m%d-%H%M%S.csv"`
    pub file_name_pattern: String,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_path.trim().is_empty() {
            return Err("output base_path cannot be empty".to_string());
        }
        if self.file_name_pattern.trim().is_empty() {
            return Err("output file_name_pattern cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging in addition to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation: daily or hourly
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.local_rotation.as_str(), "daily" | "hourly") {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: daily, hourly",
                self.local_rotation
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging local_path cannot be empty when local_enabled".to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_time_format() -> String {
    "%m/%d/%Y %I:%M:%S %p".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}
