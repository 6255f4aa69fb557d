//! Event log XML parsing
//!
//! The extracted XML region is a flat table: a single root element holding a
//! repeating row element, each row's children being the event fields. This
//! module walks that structure with a streaming reader and produces
//! [`RawEventRow`]s in document order; typing the fields is the
//! normalizer's job.

use crate::domain::errors::ParseError;
use crate::domain::event::RawEventRow;
use crate::domain::result::Result;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Parses the extracted XML into raw event rows
///
/// Locates `root_element`, then collects every `row_element` beneath it.
/// Each child element of a row contributes one `(name, text)` occurrence;
/// repeated children append to the same field's sequence. A self-closing
/// child yields an empty string.
///
/// # Errors
///
/// - [`ParseError::MalformedXml`] when the reader fails
/// - [`ParseError::MissingRootElement`] when `root_element` never appears
/// - [`ParseError::MissingRowElements`] when the root holds no rows
pub fn parse_event_rows(
    xml: &str,
    root_element: &str,
    row_element: &str,
) -> Result<Vec<RawEventRow>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut rows = Vec::new();
    let mut root_seen = false;
    let mut in_root = false;
    let mut current_row: Option<RawEventRow> = None;
    let mut current_field: Option<String> = None;
    let mut current_text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(start)) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                if name == root_element && current_row.is_none() {
                    root_seen = true;
                    in_root = true;
                } else if in_root && name == row_element && current_row.is_none() {
                    current_row = Some(RawEventRow::new());
                } else if current_row.is_some() {
                    current_field = Some(name);
                    current_text.clear();
                }
            }
            Ok(Event::Empty(empty)) => {
                if let Some(row) = current_row.as_mut() {
                    let name = String::from_utf8_lossy(empty.name().as_ref()).into_owned();
                    row.push(name, String::new());
                }
            }
            Ok(Event::Text(text)) => {
                if current_field.is_some() {
                    current_text.push_str(&text.unescape()?);
                }
            }
            Ok(Event::End(end)) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                if current_field.as_deref() == Some(name.as_str()) {
                    if let (Some(field), Some(row)) = (current_field.take(), current_row.as_mut())
                    {
                        row.push(field, std::mem::take(&mut current_text));
                    }
                } else if name == row_element {
                    if let Some(row) = current_row.take() {
                        rows.push(row);
                    }
                    current_field = None;
                } else if name == root_element {
                    in_root = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::MalformedXml(e.to_string()).into()),
            _ => {}
        }
        buf.clear();
    }

    if !root_seen {
        return Err(ParseError::MissingRootElement(root_element.to_string()).into());
    }
    if rows.is_empty() {
        return Err(ParseError::MissingRowElements(row_element.to_string()).into());
    }

    Ok(rows)
}
