//! Output serialization
//!
//! Renders the normalized event sequence as CSV or JSON text. The CSV cell
//! quoting is deliberately not RFC 4180: a cell is wrapped in double quotes
//! only when it contains a comma, and embedded quotes are then
//! backslash-escaped rather than doubled. This matches the format consumers
//! of these files already parse.

use crate::config::OutputFormat;
use crate::domain::event::{FieldValue, NormalizedEvent};
use crate::domain::fields::FieldDescriptor;
use crate::domain::result::Result;

/// Serializes the event sequence in the requested format
pub fn serialize_events(
    events: &[NormalizedEvent],
    fields: &[FieldDescriptor],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Csv => Ok(to_csv(events, fields)),
        OutputFormat::Json => Ok(serde_json::to_string(events)?),
    }
}

/// Renders CSV: a header row from the non-excluded descriptors, one line per
/// event, no trailing newline
fn to_csv(events: &[NormalizedEvent], fields: &[FieldDescriptor]) -> String {
    let included: Vec<&FieldDescriptor> = fields.iter().filter(|f| !f.exclude).collect();

    let mut content = included
        .iter()
        .map(|f| f.header.as_str())
        .collect::<Vec<_>>()
        .join(",");
    content.push('\n');

    let body = events
        .iter()
        .map(|event| {
            included
                .iter()
                .map(|f| {
                    let rendered = event
                        .get(&f.element)
                        .map(FieldValue::render)
                        .unwrap_or_default();
                    csv_cell(rendered)
                })
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");
    content.push_str(&body);

    content
}

/// Quotes a cell only when it contains a comma, backslash-escaping any
/// embedded double quote
fn csv_cell(value: String) -> String {
    if value.contains(',') {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value
    }
}
