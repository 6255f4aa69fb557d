//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Modlog configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates every section after parsing
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Modem Address: {}", config.modem.address);
        println!("  Session Cookie: {}", config.modem.session_cookie_name);
        println!("  Event Root/Row: {} / {}", config.events.root_element, config.events.row_element);
        println!(
            "  Fields: {} ({} excluded)",
            config.events.fields.len(),
            config.events.fields.iter().filter(|f| f.exclude).count()
        );
        println!("  Output Format: {:?}", config.output.format);
        println!("  Output Path: {}", config.output.base_path);
        println!("  File Pattern: {}", config.output.file_name_pattern);

        Ok(0)
    }
}
