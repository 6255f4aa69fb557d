//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "modlog.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Modlog configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your modem's details", self.output);
                println!("  2. Set MODLOG_MODEM_PASSWORD in the environment or a .env file");
                println!("  3. Validate configuration: modlog validate-config");
                println!("  4. Run a collection: modlog collect");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration for an Arris/Surfboard-style cable modem
    fn sample_config() -> &'static str {
        r#"# Modlog Configuration File
# Collects a cable modem's web event log into CSV or JSON files.

[application]
log_level = "info"

[modem]
address = "http://192.168.100.1"
username = "admin"
password = "${MODLOG_MODEM_PASSWORD}"
session_cookie_name = "sessionId"
timeout_seconds = 30

[modem.endpoints]
login_form = "/cmconnectionstatus.html"
form_target = "/goform/login"
index = "/cmconnectionstatus.html"
event_log = "/cmeventlog.html"

[modem.patterns]
# Must contain exactly one capture group each.
web_token = 'name="webToken" value="(\d+)"'
event_xml = '(<docsDevEventTable>[\s\S]*</docsDevEventTable>)'

[events]
root_element = "docsDevEventTable"
row_element = "tr"
# strftime format of the modem's timestamps, after the ", " separator
# between date and time is collapsed to a space.
time_format = "%m/%d/%Y %I:%M:%S %p"

[[events.fields]]
element = "docsDevEvIndex"
header = "Index"
type = "number"
exclude = true

[[events.fields]]
element = "docsDevEvFirstTime"
header = "First Time"
type = "time"

[[events.fields]]
element = "docsDevEvLastTime"
header = "Last Time"
type = "time"

[[events.fields]]
element = "docsDevEvCounts"
header = "Count"
type = "number"

[[events.fields]]
element = "docsDevEvLevel"
header = "Level"
type = "number"

[[events.fields]]
element = "docsDevEvId"
header = "Event ID"
type = "number"

[[events.fields]]
element = "docsDevEvText"
header = "Description"
type = "string"

[output]
format = "csv"
base_path = "./eventlogs"
file_name_pattern = "eventlog-%Y%m%d-%H%M%S.csv"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses_and_validates() {
        // Substitute the placeholder the way the loader does
        let contents =
            InitArgs::sample_config().replace("${MODLOG_MODEM_PASSWORD}", "test-password");
        let config: crate::config::ModlogConfig = toml::from_str(&contents).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sample_config_field_order() {
        let contents =
            InitArgs::sample_config().replace("${MODLOG_MODEM_PASSWORD}", "test-password");
        let config: crate::config::ModlogConfig = toml::from_str(&contents).unwrap();

        assert_eq!(config.events.fields[0].element, "docsDevEvIndex");
        assert!(config.events.fields[0].exclude);
        assert_eq!(config.events.fields.last().unwrap().element, "docsDevEvText");
    }
}
