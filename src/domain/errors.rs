//! Domain error types
//!
//! This module defines the error hierarchy for Modlog. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Modlog error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ModlogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Login handshake / wire protocol errors
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Event log parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors (network and filesystem)
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised while emulating the modem's login protocol
///
/// Each variant corresponds to one handshake step whose expected artifact
/// was absent or whose response did not match the protocol.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The login form page did not contain a web token
    #[error("no web token in login form response")]
    MissingWebToken,

    /// The login POST did not answer with the expected redirect
    #[error("invalid login response: expected redirect, got status {status}")]
    InvalidLoginResponse { status: u16 },

    /// No session cookie was set after login
    #[error("no session id cookie '{cookie_name}' in index response")]
    MissingSessionId { cookie_name: String },

    /// The event log page did not contain the embedded XML region
    #[error("no event log XML in response body")]
    MissingEventXml,
}

/// Errors raised while parsing the extracted event log XML
#[derive(Debug, Error)]
pub enum ParseError {
    /// The XML region could not be parsed
    #[error("malformed event XML: {0}")]
    MalformedXml(String),

    /// The configured root element was not found
    #[error("root element '{0}' not found in event XML")]
    MissingRootElement(String),

    /// The root element contained no row elements
    #[error("no '{0}' row elements under event XML root")]
    MissingRowElements(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ModlogError {
    fn from(err: std::io::Error) -> Self {
        ModlogError::Io(err.to_string())
    }
}

// Conversion from reqwest transport errors
impl From<reqwest::Error> for ModlogError {
    fn from(err: reqwest::Error) -> Self {
        ModlogError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ModlogError {
    fn from(err: serde_json::Error) -> Self {
        ModlogError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ModlogError {
    fn from(err: toml::de::Error) -> Self {
        ModlogError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from quick-xml parse errors
impl From<quick_xml::Error> for ModlogError {
    fn from(err: quick_xml::Error) -> Self {
        ModlogError::Parse(ParseError::MalformedXml(err.to_string()))
    }
}
