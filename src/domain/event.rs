//! Event row and field value types
//!
//! `RawEventRow` is the loosely-typed shape produced by the XML parse: every
//! field is a sequence of strings, one entry per element occurrence.
//! `NormalizedEvent` is the typed output shape built by the normalizer, with
//! fields in descriptor order. Both preserve insertion order so that CSV
//! columns and JSON keys come out deterministically.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Marker emitted for a time field whose raw value cannot be parsed
pub const INVALID_TIME_MARKER: &str = "Invalid date";

/// One field value of a normalized event
///
/// `Number` carries NaN as its not-a-number marker; NaN renders as `NaN` in
/// CSV and `null` in JSON. Timestamps and plain strings are both `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Renders the value as a CSV cell, before any quoting
    ///
    /// Integral numbers render without a fractional part (`5`, not `5.0`);
    /// NaN renders as the literal `NaN`.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    /// True when this is the not-a-number marker
    pub fn is_nan(&self) -> bool {
        matches!(self, FieldValue::Number(n) if n.is_nan())
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Number(n) if n.is_nan() => serializer.serialize_none(),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() <= i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// One event row as extracted from the XML, prior to normalization
///
/// Field order follows document order; a repeated child element appends to
/// the existing field's sequence, so a field present once holds a
/// one-element sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEventRow {
    fields: Vec<(String, Vec<String>)>,
}

impl RawEventRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one element occurrence
    pub fn push(&mut self, element: impl Into<String>, text: impl Into<String>) {
        let element = element.into();
        if let Some((_, values)) = self.fields.iter_mut().find(|(name, _)| *name == element) {
            values.push(text.into());
        } else {
            self.fields.push((element, vec![text.into()]));
        }
    }

    /// Looks up a field's value sequence by element name
    pub fn get(&self, element: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(name, _)| name == element)
            .map(|(_, values)| values.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// One fully normalized event
///
/// Contains exactly the non-excluded descriptor fields, inserted in
/// descriptor order. JSON serialization preserves that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedEvent {
    fields: Vec<(String, FieldValue)>,
}

impl NormalizedEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, replacing any prior value for the same element
    pub fn insert(&mut self, element: impl Into<String>, value: FieldValue) {
        let element = element.into();
        if let Some((_, existing)) = self.fields.iter_mut().find(|(name, _)| *name == element) {
            *existing = value;
        } else {
            self.fields.push((element, value));
        }
    }

    /// Looks up a field value by element name
    pub fn get(&self, element: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == element)
            .map(|(_, value)| value)
    }

    /// Iterates fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl Serialize for NormalizedEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
