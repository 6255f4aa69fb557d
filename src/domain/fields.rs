//! Field descriptor types
//!
//! A field descriptor is the declarative rule describing how to read, type,
//! and label one event log field. Descriptors are supplied by the `[events]`
//! configuration section as an ordered list; the list order determines CSV
//! column order.

use serde::{Deserialize, Serialize};

/// Output type of a single event log field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Numeric value; non-numeric input flows through as NaN
    Number,
    /// Plain string; one-element XML sequences are joined into a scalar
    String,
    /// Local `"<date>, <time>"` string rendered as an ISO-8601 UTC timestamp
    Time,
}

/// Declarative rule for one event log field
///
/// # Examples
///
/// ```
/// use modlog::domain::fields::{FieldDescriptor, FieldType};
///
/// let descriptor: FieldDescriptor = toml::from_str(
///     r#"
///     element = "docsDevEvCounts"
///     header = "Count"
///     type = "number"
///     "#,
/// ).unwrap();
///
/// assert_eq!(descriptor.field_type, FieldType::Number);
/// assert!(!descriptor.exclude);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Source element name inside each XML row
    pub element: String,

    /// Output column name for CSV serialization
    pub header: String,

    /// How the raw value is typed in the output
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Drop this field from the output entirely
    #[serde(default)]
    pub exclude: bool,
}

impl FieldDescriptor {
    /// Validates the descriptor
    pub fn validate(&self) -> Result<(), String> {
        if self.element.trim().is_empty() {
            return Err("field descriptor 'element' cannot be empty".to_string());
        }
        if self.header.trim().is_empty() {
            return Err(format!(
                "field descriptor for '{}' has an empty 'header'",
                self.element
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_descriptor() {
        let toml_src = r#"
            element = "docsDevEvFirstTime"
            header = "First Time"
            type = "time"
            exclude = false
        "#;

        let descriptor: FieldDescriptor = toml::from_str(toml_src).unwrap();
        assert_eq!(descriptor.element, "docsDevEvFirstTime");
        assert_eq!(descriptor.header, "First Time");
        assert_eq!(descriptor.field_type, FieldType::Time);
        assert!(!descriptor.exclude);
    }

    #[test]
    fn test_exclude_defaults_to_false() {
        let toml_src = r#"
            element = "docsDevEvIndex"
            header = "Index"
            type = "number"
        "#;

        let descriptor: FieldDescriptor = toml::from_str(toml_src).unwrap();
        assert!(!descriptor.exclude);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let toml_src = r#"
            element = "docsDevEvIndex"
            header = "Index"
            type = "boolean"
        "#;

        assert!(toml::from_str::<FieldDescriptor>(toml_src).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_element() {
        let descriptor = FieldDescriptor {
            element: " ".to_string(),
            header: "Index".to_string(),
            field_type: FieldType::Number,
            exclude: false,
        };
        assert!(descriptor.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_header() {
        let descriptor = FieldDescriptor {
            element: "docsDevEvIndex".to_string(),
            header: "".to_string(),
            field_type: FieldType::Number,
            exclude: false,
        };
        let err = descriptor.validate().unwrap_err();
        assert!(err.contains("docsDevEvIndex"));
    }
}
