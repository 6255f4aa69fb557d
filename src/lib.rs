// Modlog - Cable Modem Event Log Collector
// Copyright (c) 2025 Modlog Contributors
// Licensed under the MIT License

//! # Modlog - Cable Modem Event Log Collector
//!
//! Modlog logs into a cable modem's web administration interface, extracts
//! the event log embedded as XML inside an HTML page, normalizes the records
//! per a declarative field list, and writes them to a timestamped local file
//! in CSV or JSON form. It is a single-run utility meant to be invoked from
//! a scheduler (cron, systemd timer), not a long-lived service.
//!
//! ## Overview
//!
//! One collection run performs exactly four sequential HTTP requests:
//!
//! 1. **GET** the login form and extract the one-time web token
//! 2. **POST** the credentials together with that token
//! 3. Confirm the login by its raw `302` redirect status
//! 4. **GET** the index page and capture the session cookie
//!
//! followed by an authenticated fetch of the event log page, XML extraction
//! and parsing, normalization, and serialization. No step is retried; any
//! failure aborts the run without writing a file.
//!
//! ## Architecture
//!
//! Modlog follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (normalize, serialize, collect)
//! - [`adapters`] - External integrations (modem web interface, output sink)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modlog::config::load_config;
//! use modlog::core::collect::CollectCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("modlog.toml")?;
//!
//!     // Create the collection coordinator
//!     let coordinator = CollectCoordinator::new(config)?;
//!
//!     // Execute one collection cycle
//!     let summary = coordinator.execute_collect(false).await?;
//!
//!     println!("Wrote {} events", summary.events);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`] with
//! [`domain::ModlogError`] as the error type. Handshake failures carry a
//! [`domain::ProtocolError`] naming the step whose artifact was missing;
//! malformed event XML surfaces as a [`domain::ParseError`]. Errors
//! propagate to a single boundary in the CLI, which logs them and exits
//! non-zero; a failed run never leaves partial output behind.
//!
//! ## Logging
//!
//! Modlog uses structured logging with the `tracing` crate. The extracted
//! web token and session id are traced at debug level; terminal failures
//! are reported at error level.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
