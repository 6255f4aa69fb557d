//! Event normalization
//!
//! Applies the configured field descriptors to the raw rows coming out of
//! the XML parse. The source format is permissive and so is this stage:
//! non-numeric input becomes NaN and unparseable timestamps become the
//! invalid-date marker; nothing here ever fails a run.

use crate::config::EventsConfig;
use crate::domain::event::{FieldValue, NormalizedEvent, RawEventRow, INVALID_TIME_MARKER};
use crate::domain::fields::{FieldDescriptor, FieldType};
use chrono::{Local, LocalResult, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Normalizes all rows, preserving source row order
pub fn normalize_rows(rows: &[RawEventRow], events: &EventsConfig) -> Vec<NormalizedEvent> {
    rows.iter().map(|row| normalize_row(row, events)).collect()
}

/// Normalizes one row
///
/// Iterates the descriptors in order, so every event carries exactly the
/// non-excluded descriptor fields, in descriptor order. Fields absent from
/// the raw row still appear: NaN for numbers, the invalid-date marker for
/// times, the empty string for strings.
pub fn normalize_row(row: &RawEventRow, events: &EventsConfig) -> NormalizedEvent {
    let mut event = NormalizedEvent::new();

    for descriptor in &events.fields {
        if descriptor.exclude {
            continue;
        }
        let raw = row.get(&descriptor.element);
        let value = transform_field(descriptor, raw, &events.time_format);
        event.insert(descriptor.element.clone(), value);
    }

    event
}

/// Converts one raw field value per its descriptor
fn transform_field(
    descriptor: &FieldDescriptor,
    raw: Option<&[String]>,
    time_format: &str,
) -> FieldValue {
    // The XML parse wraps every occurrence in a sequence; a single
    // occurrence is a one-element sequence that joins back to its scalar.
    let joined = raw.map(|values| values.concat());

    match descriptor.field_type {
        FieldType::Number => FieldValue::Number(parse_number(joined.as_deref())),
        FieldType::String => FieldValue::Text(joined.unwrap_or_default()),
        FieldType::Time => FieldValue::Text(parse_time(joined.as_deref(), time_format)),
    }
}

/// Numeric coercion: empty input is zero, non-numeric input is NaN
fn parse_number(raw: Option<&str>) -> f64 {
    match raw {
        None => f64::NAN,
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
    }
}

/// Parses a local `"<date>, <time>"` string and renders it as ISO-8601 UTC
///
/// The first `", "` separator is collapsed to a single space before parsing
/// with the configured strftime format. The naive result is interpreted in
/// the local system timezone; an ambiguous local time (clocks rolling back)
/// resolves to the earlier instant.
fn parse_time(raw: Option<&str>, time_format: &str) -> String {
    let Some(raw) = raw else {
        return INVALID_TIME_MARKER.to_string();
    };

    let candidate = raw.replacen(", ", " ", 1);
    let Ok(naive) = NaiveDateTime::parse_from_str(candidate.trim(), time_format) else {
        return INVALID_TIME_MARKER.to_string();
    };

    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        LocalResult::None => INVALID_TIME_MARKER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const TIME_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

    fn events_config(fields: Vec<FieldDescriptor>) -> EventsConfig {
        EventsConfig {
            root_element: "docsDevEventTable".to_string(),
            row_element: "tr".to_string(),
            time_format: TIME_FORMAT.to_string(),
            fields,
        }
    }

    fn descriptor(element: &str, field_type: FieldType, exclude: bool) -> FieldDescriptor {
        FieldDescriptor {
            element: element.to_string(),
            header: element.to_string(),
            field_type,
            exclude,
        }
    }

    #[test_case("3", 3.0; "integer")]
    #[test_case("  12  ", 12.0; "whitespace trimmed")]
    #[test_case("-2.5", -2.5; "negative fraction")]
    #[test_case("", 0.0; "empty coerces to zero")]
    fn test_parse_number(input: &str, expected: f64) {
        assert_eq!(parse_number(Some(input)), expected);
    }

    #[test_case("not-a-number"; "words")]
    #[test_case("12abc"; "trailing junk")]
    fn test_parse_number_non_numeric_is_nan(input: &str) {
        assert!(parse_number(Some(input)).is_nan());
    }

    #[test]
    fn test_parse_number_missing_is_nan() {
        assert!(parse_number(None).is_nan());
    }

    #[test]
    fn test_parse_time_valid_input() {
        let rendered = parse_time(Some("01/02/2023, 03:04:05 PM"), TIME_FORMAT);

        // The run's local timezone decides the absolute instant; the output
        // must be a valid RFC 3339 UTC timestamp matching that instant.
        let expected = Local
            .with_ymd_and_hms(2023, 1, 2, 15, 4, 5)
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        assert_eq!(rendered, expected);
        assert!(rendered.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&rendered).is_ok());
    }

    #[test]
    fn test_parse_time_garbage_yields_marker() {
        assert_eq!(parse_time(Some("garbage"), TIME_FORMAT), INVALID_TIME_MARKER);
    }

    #[test]
    fn test_parse_time_missing_yields_marker() {
        assert_eq!(parse_time(None, TIME_FORMAT), INVALID_TIME_MARKER);
    }

    #[test]
    fn test_parse_time_only_first_separator_replaced() {
        // A second ", " in the value must survive the replace and then fail
        // the strict parse, yielding the marker rather than a bogus date.
        let rendered = parse_time(Some("01/02/2023, 03:04:05 PM, extra"), TIME_FORMAT);
        assert_eq!(rendered, INVALID_TIME_MARKER);
    }

    #[test]
    fn test_excluded_field_is_dropped() {
        let events = events_config(vec![
            descriptor("keep", FieldType::String, false),
            descriptor("drop", FieldType::String, true),
        ]);
        let mut row = RawEventRow::new();
        row.push("keep", "a");
        row.push("drop", "b");

        let event = normalize_row(&row, &events);
        assert_eq!(event.len(), 1);
        assert!(event.get("drop").is_none());
    }

    #[test]
    fn test_string_field_joins_sequence() {
        let events = events_config(vec![descriptor("msg", FieldType::String, false)]);
        let mut row = RawEventRow::new();
        row.push("msg", "part one ");
        row.push("msg", "part two");

        let event = normalize_row(&row, &events);
        assert_eq!(
            event.get("msg"),
            Some(&FieldValue::Text("part one part two".to_string()))
        );
    }

    #[test]
    fn test_number_field_non_numeric_is_nan_marker() {
        let events = events_config(vec![descriptor("count", FieldType::Number, false)]);
        let mut row = RawEventRow::new();
        row.push("count", "not-a-number");

        let event = normalize_row(&row, &events);
        assert!(event.get("count").unwrap().is_nan());
    }

    #[test]
    fn test_absent_fields_still_present_in_output() {
        let events = events_config(vec![
            descriptor("count", FieldType::Number, false),
            descriptor("when", FieldType::Time, false),
            descriptor("msg", FieldType::String, false),
        ]);
        let row = RawEventRow::new();

        let event = normalize_row(&row, &events);
        assert_eq!(event.len(), 3);
        assert!(event.get("count").unwrap().is_nan());
        assert_eq!(
            event.get("when"),
            Some(&FieldValue::Text(INVALID_TIME_MARKER.to_string()))
        );
        assert_eq!(event.get("msg"), Some(&FieldValue::Text(String::new())));
    }

    #[test]
    fn test_normalize_rows_preserves_row_order() {
        let events = events_config(vec![descriptor("idx", FieldType::Number, false)]);

        let rows: Vec<RawEventRow> = (1..=3)
            .map(|i| {
                let mut row = RawEventRow::new();
                row.push("idx", i.to_string());
                row
            })
            .collect();

        let normalized = normalize_rows(&rows, &events);
        let indexes: Vec<f64> = normalized
            .iter()
            .map(|event| match event.get("idx") {
                Some(FieldValue::Number(n)) => *n,
                other => panic!("expected number, got {other:?}"),
            })
            .collect();
        assert_eq!(indexes, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_fields_appear_in_descriptor_order() {
        let events = events_config(vec![
            descriptor("b", FieldType::String, false),
            descriptor("a", FieldType::String, false),
        ]);
        let mut row = RawEventRow::new();
        row.push("a", "1");
        row.push("b", "2");

        let event = normalize_row(&row, &events);
        let order: Vec<&str> = event.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["b", "a"]);
    }
}
