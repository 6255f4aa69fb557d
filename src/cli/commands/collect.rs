//! Collect command implementation
//!
//! This module implements the `collect` command: one login + fetch + save
//! cycle against the configured modem. The run itself is entirely
//! configuration-driven; there is deliberately no prompt, so the command is
//! safe to invoke from a scheduler.

use crate::config::load_config;
use crate::core::collect::CollectCoordinator;
use clap::Args;

/// Arguments for the collect command
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Run the full pipeline but skip the file write
    #[arg(long)]
    pub dry_run: bool,
}

impl CollectArgs {
    /// Execute the collect command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting collect command");

        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let coordinator = match CollectCoordinator::new(config) {
            Ok(coordinator) => coordinator,
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize collector");
                eprintln!("Error: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        // Single top-level failure boundary: any stage's error lands here,
        // gets reported, and no partial output exists on disk.
        match coordinator.execute_collect(self.dry_run).await {
            Ok(summary) => {
                tracing::info!(
                    events = summary.events,
                    output_path = %summary.output_path.display(),
                    duration_ms = summary.duration.as_millis() as u64,
                    dry_run = summary.dry_run,
                    "Collection complete"
                );
                if summary.dry_run {
                    println!(
                        "Dry run: {} events would be written to {}",
                        summary.events,
                        summary.output_path.display()
                    );
                } else {
                    println!(
                        "Wrote {} events to {}",
                        summary.events,
                        summary.output_path.display()
                    );
                }
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Collection failed");
                eprintln!("Error: {e}");
                Ok(5)
            }
        }
    }
}
