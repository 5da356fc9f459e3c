//! Field extraction and coercion for raw event data.
//!
//! Every variant decoder reads its payload through these helpers so the
//! presence and coercion rules stay identical across event kinds.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use super::errors::FieldError;

/// Raw `data` object of a webhook payload.
pub type RawData = Map<String, Value>;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Checks that every required field is present, in declared order.
///
/// Fails on the first absent field. With `null_is_absent`, a key holding
/// `null` also counts as absent.
pub fn require_fields(
    raw: &RawData,
    fields: &[&'static str],
    null_is_absent: bool,
) -> Result<(), FieldError> {
    for field in fields {
        match raw.get(*field) {
            None => return Err(FieldError::missing(*field)),
            Some(Value::Null) if null_is_absent => return Err(FieldError::missing(*field)),
            Some(_) => {}
        }
    }
    Ok(())
}

pub fn required_str(raw: &RawData, field: &str) -> Result<String, FieldError> {
    match raw.get(field) {
        None => Err(FieldError::missing(field)),
        Some(value) => coerce_str(field, value),
    }
}

pub fn optional_str(raw: &RawData, field: &str) -> Result<Option<String>, FieldError> {
    match raw.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce_str(field, value).map(Some),
    }
}

pub fn required_int(raw: &RawData, field: &str) -> Result<i64, FieldError> {
    match raw.get(field) {
        None => Err(FieldError::missing(field)),
        Some(value) => coerce_int_field(field, value),
    }
}

pub fn optional_int(raw: &RawData, field: &str) -> Result<Option<i64>, FieldError> {
    match raw.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce_int_field(field, value).map(Some),
    }
}

pub fn required_timestamp(raw: &RawData, field: &str) -> Result<DateTime<Utc>, FieldError> {
    match raw.get(field) {
        None => Err(FieldError::missing(field)),
        Some(value) => coerce_timestamp_field(field, value),
    }
}

pub fn optional_timestamp(
    raw: &RawData,
    field: &str,
) -> Result<Option<DateTime<Utc>>, FieldError> {
    match raw.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce_timestamp_field(field, value).map(Some),
    }
}

/// Returns the field's value only if it carries content.
///
/// Absent, `null`, `{}`, `[]`, `""`, `false` and `0` are all empty.
pub fn non_empty<'a>(raw: &'a RawData, field: &str) -> Option<&'a Value> {
    raw.get(field).filter(|value| !is_empty(value))
}

pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Borrows a nested object, failing with the field name if it is not one.
pub fn as_object<'a>(field: &str, value: &'a Value) -> Result<&'a RawData, FieldError> {
    value
        .as_object()
        .ok_or_else(|| FieldError::invalid(field, "expected an object"))
}

/// Numeric coercion: integers, floats (truncated) and numeric strings.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().and_then(|u| i64::try_from(u).ok()))
            .or_else(|| n.as_f64().and_then(truncate_float)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate_float))
        }
        _ => None,
    }
}

/// Parses an ISO-8601-like timestamp into UTC.
///
/// Accepts RFC 3339 with any offset, naive date-times (read as UTC) and bare
/// dates (midnight UTC).
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn coerce_str(field: &str, value: &Value) -> Result<String, FieldError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| FieldError::invalid(field, "expected a string"))
}

fn coerce_int_field(field: &str, value: &Value) -> Result<i64, FieldError> {
    coerce_int(value).ok_or_else(|| FieldError::invalid(field, "expected an integer"))
}

fn coerce_timestamp_field(field: &str, value: &Value) -> Result<DateTime<Utc>, FieldError> {
    let text = value
        .as_str()
        .ok_or_else(|| FieldError::invalid(field, "expected an ISO-8601 timestamp string"))?;
    parse_timestamp(text)
        .ok_or_else(|| FieldError::invalid(field, format!("unparsable timestamp `{}`", text)))
}

fn truncate_float(f: f64) -> Option<i64> {
    if f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn raw(value: Value) -> RawData {
        value.as_object().cloned().unwrap()
    }

    // ══════════════════════════════════════════════════════════════
    // Presence Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn require_fields_reports_first_missing_in_declared_order() {
        let data = raw(json!({"a": 1}));
        let err = require_fields(&data, &["a", "c", "b"], false).unwrap_err();
        assert_eq!(err, FieldError::missing("c"));
    }

    #[test]
    fn require_fields_treats_null_as_present_by_default() {
        let data = raw(json!({"a": null}));
        assert!(require_fields(&data, &["a"], false).is_ok());
        assert_eq!(
            require_fields(&data, &["a"], true).unwrap_err(),
            FieldError::missing("a")
        );
    }

    #[test]
    fn non_empty_filters_empty_values() {
        let data = raw(json!({
            "null": null, "obj": {}, "arr": [], "str": "", "f": false, "zero": 0,
            "full": {"k": "v"}
        }));
        for key in ["null", "obj", "arr", "str", "f", "zero", "absent"] {
            assert!(non_empty(&data, key).is_none(), "{} should be empty", key);
        }
        assert!(non_empty(&data, "full").is_some());
    }

    // ══════════════════════════════════════════════════════════════
    // Coercion Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn coerce_int_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_int(&json!(1000)), Some(1000));
        assert_eq!(coerce_int(&json!(12.9)), Some(12));
        assert_eq!(coerce_int(&json!("42")), Some(42));
        assert_eq!(coerce_int(&json!(" 7.5 ")), Some(7));
        assert_eq!(coerce_int(&json!(-3)), Some(-3));
    }

    #[test]
    fn coerce_int_rejects_non_numeric_values() {
        assert_eq!(coerce_int(&json!("abc")), None);
        assert_eq!(coerce_int(&json!(true)), None);
        assert_eq!(coerce_int(&json!(null)), None);
        assert_eq!(coerce_int(&json!({"n": 1})), None);
    }

    #[test]
    fn required_str_rejects_non_strings() {
        let data = raw(json!({"id": 5}));
        let err = required_str(&data, "id").unwrap_err();
        assert_eq!(err.field(), "id");
        assert!(!err.is_missing());
    }

    #[test]
    fn optional_str_is_none_for_absent_or_null() {
        let data = raw(json!({"description": null}));
        assert_eq!(optional_str(&data, "description").unwrap(), None);
        assert_eq!(optional_str(&data, "originPhone").unwrap(), None);
    }

    #[test]
    fn optional_timestamp_fails_on_garbage() {
        let data = raw(json!({"periodStart": "yesterday"}));
        let err = optional_timestamp(&data, "periodStart").unwrap_err();
        assert_eq!(err.field(), "periodStart");
    }

    // ══════════════════════════════════════════════════════════════
    // Timestamp Parsing Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn parse_timestamp_rfc3339_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-01-01T00:00:00Z"), Some(expected));
    }

    #[test]
    fn parse_timestamp_normalizes_offsets() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-01-01T00:00:00-06:00"), Some(expected));
    }

    #[test]
    fn parse_timestamp_accepts_fractional_seconds() {
        let parsed = parse_timestamp("2024-03-15T10:20:30.123Z").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn parse_timestamp_accepts_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 2, 13, 45, 0).unwrap();
        assert_eq!(parse_timestamp("2024-05-02T13:45:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-02 13:45:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-05-02"),
            Some(Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn parse_timestamp_rejects_invalid_input() {
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp("2024-13-45T00:00:00Z"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
