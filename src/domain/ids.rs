//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for the two opaque values produced
//! by the login handshake. Each type ensures type safety and rejects empty
//! values, so a blank page or cookie can never masquerade as a credential.

use std::fmt;
use std::str::FromStr;

/// Web token newtype wrapper
///
/// One-time anti-forgery value scraped from the login form page. It is
/// consumed by the login POST and never persisted.
///
/// # Examples
///
/// ```
/// use modlog::domain::ids::WebToken;
/// use std::str::FromStr;
///
/// let token = WebToken::from_str("1764243698").unwrap();
/// assert_eq!(token.as_str(), "1764243698");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WebToken(String);

impl WebToken {
    /// Creates a new WebToken from a string
    ///
    /// Returns `Err` when the token is empty or whitespace-only.
    pub fn new(token: impl Into<String>) -> Result<Self, String> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err("Web token cannot be empty".to_string());
        }
        Ok(Self(token))
    }

    /// Returns the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WebToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WebToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for WebToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Session identifier newtype wrapper
///
/// Cookie value identifying an authenticated session after login. Valid for
/// one program run; the log-retrieval request replays it verbatim in a
/// `Cookie` header.
///
/// # Examples
///
/// ```
/// use modlog::domain::ids::SessionId;
/// use std::str::FromStr;
///
/// let session = SessionId::from_str("a81a5b66ee161f897059256a44dff31e").unwrap();
/// assert_eq!(session.as_str(), "a81a5b66ee161f897059256a44dff31e");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId from a string
    ///
    /// Returns `Err` when the value is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Session ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the session ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
