//! Configuration management for Modlog.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`MODLOG_*` prefix)
//! - Default values for optional settings
//! - Validation of every section before the first request is made
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [modem]
//! address = "http://192.168.100.1"
//! username = "admin"
//! password = "${MODLOG_MODEM_PASSWORD}"
//! session_cookie_name = "sessionId"
//!
//! [modem.endpoints]
//! login_form = "/cmconnectionstatus.html"
//! form_target = "/goform/login"
//! index = "/cmconnectionstatus.html"
//! event_log = "/cmeventlog.html"
//!
//! [modem.patterns]
//! web_token = 'name="webToken" value="(\d+)"'
//! event_xml = '(<docsDevEventTable>[\s\S]*</docsDevEventTable>)'
//!
//! [events]
//! root_element = "docsDevEventTable"
//! row_element = "tr"
//!
//! [[events.fields]]
//! element = "docsDevEvFirstTime"
//! header = "First Time"
//! type = "time"
//!
//! [output]
//! format = "csv"
//! base_path = "./eventlogs"
//! file_name_pattern = "eventlog-%Y%m%d-%H%M%S.csv"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, EndpointsConfig, EventsConfig, LoggingConfig, ModemConfig, ModlogConfig,
    OutputConfig, OutputFormat, PatternsConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
