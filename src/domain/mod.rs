//! Domain models and types for Modlog.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed handshake values** ([`WebToken`], [`SessionId`])
//! - **Event shapes** ([`RawEventRow`], [`NormalizedEvent`], [`FieldValue`])
//! - **Field descriptors** ([`FieldDescriptor`], [`FieldType`])
//! - **Error types** ([`ModlogError`], [`ProtocolError`], [`ParseError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! The newtype pattern keeps handshake artifacts from being mixed up:
//!
//! ```rust
//! use modlog::domain::{SessionId, WebToken};
//!
//! # fn example() -> Result<(), String> {
//! let token = WebToken::new("1764243698")?;
//! let session = SessionId::new("a81a5b66ee161f897059256a44dff31e")?;
//!
//! // This won't compile - type safety prevents mixing the two
//! // let wrong: SessionId = token;  // Compile error!
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`] with [`ModlogError`] as the
//! error type; handshake and parse failures carry their own nested enums so
//! callers can match on the exact step that failed.

pub mod errors;
pub mod event;
pub mod fields;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ModlogError, ParseError, ProtocolError};
pub use event::{FieldValue, NormalizedEvent, RawEventRow, INVALID_TIME_MARKER};
pub use fields::{FieldDescriptor, FieldType};
pub use ids::{SessionId, WebToken};
pub use result::Result;
