//! External system integrations for Modlog.
//!
//! This module contains the adapters that connect the core pipeline to the
//! outside world:
//!
//! - [`modem`] - the modem's web administration interface (login handshake,
//!   response extraction, event log XML parsing)
//! - [`sink`] - output destinations for the serialized event log

pub mod modem;
pub mod sink;
