//! Logging and observability
//!
//! Structured logging built on `tracing`: console output always, optional
//! rotated JSON file output for unattended scheduled runs.

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
