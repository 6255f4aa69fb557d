//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Modlog using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Modlog - Cable Modem Event Log Collector
#[derive(Parser, Debug)]
#[command(name = "modlog")]
#[command(version, about, long_about = None)]
#[command(author = "Modlog Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "modlog.toml", env = "MODLOG_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MODLOG_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one login + fetch + save cycle against the modem
    Collect(commands::collect::CollectArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
