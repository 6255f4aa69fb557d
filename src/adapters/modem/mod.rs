//! Modem web interface adapter
//!
//! Everything that talks to, or picks apart responses from, the modem's web
//! server: the login handshake, response extraction, and event log XML
//! parsing.

pub mod client;
pub mod extract;
pub mod logs;

pub use client::ModemClient;
pub use extract::extract_capture;
pub use logs::parse_event_rows;
