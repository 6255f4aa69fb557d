//! Response body extraction
//!
//! Both the web token and the embedded event log XML are pulled out of HTML
//! pages with a configured single-capture-group pattern. The raw pages are
//! not valid XML on their own; only the bounded region matters.

use crate::domain::errors::ModlogError;
use crate::domain::result::Result;
use regex::Regex;

/// Extracts the first capture group of the first match of `pattern` in `text`
///
/// Returns `Ok(None)` when the pattern does not match. A pattern that fails
/// to compile is a configuration defect and surfaces as
/// [`ModlogError::Configuration`]; config validation normally catches this
/// before any request is made.
pub fn extract_capture(pattern: &str, text: &str) -> Result<Option<String>> {
    let re = Regex::new(pattern).map_err(|e| {
        ModlogError::Configuration(format!("extraction pattern does not compile: {e}"))
    })?;

    Ok(re
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string()))
}
