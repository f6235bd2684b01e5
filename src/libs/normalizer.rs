//! Conversion of loosely-typed raw records into well-formed tasks.
//!
//! Seed files and remote sources hand us arbitrary JSON. The normalizer is a
//! total mapping from that JSON to valid [`Task`] values: malformed fields are
//! replaced with defaults, never reported as errors.
//!
//! ## Field Rules
//!
//! | Field         | Accepted input                         | Fallback                         |
//! |---------------|----------------------------------------|----------------------------------|
//! | `id`          | non-blank string or number, unique     | fresh UUID                       |
//! | `title`       | non-blank string (numbers stringified) | `"Untitled Task"`                |
//! | `revenue`     | positive number or numeric string      | `0`                              |
//! | `timeTaken`   | positive number or numeric string      | `1`                              |
//! | `priority`    | `High` / `Medium` / `Low`              | `Low`                            |
//! | `status`      | `Todo` / `In Progress` / `Done`        | `Todo`                           |
//! | `notes`       | string                                 | empty                            |
//! | `createdAt`   | date/datetime string or epoch millis   | `now - (index + 1) days`         |
//! | `completedAt` | date/datetime string or epoch millis   | `createdAt + 1 day` when `Done`  |
//!
//! Timestamp strings may be RFC 3339, an offset-less `YYYY-MM-DDTHH:MM:SS`
//! (a space separator works too) or a bare `YYYY-MM-DD`. Strings without an
//! offset are taken as UTC.
//!
//! A record whose id was already taken by an earlier record gets a fresh id,
//! so ids stay unique across the normalized collection.
//!
//! The positional `createdAt` backfill gives earlier records older timestamps,
//! so otherwise identical records still have a stable, unique default order.

use crate::libs::task::{coerce_title, generate_id, Priority, Status, Task, UNTITLED_TASK};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::debug;

/// Normalizes raw input using the current time as the backfill anchor.
///
/// Non-array input yields an empty vector.
pub fn normalize_tasks(input: &Value) -> Vec<Task> {
    normalize_tasks_at(input, Utc::now())
}

/// Normalizes raw input relative to an explicit `now`.
pub fn normalize_tasks_at(input: &Value, now: DateTime<Utc>) -> Vec<Task> {
    let Some(records) = input.as_array() else {
        debug!("raw task input is not an array, nothing to normalize");
        return Vec::new();
    };

    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut task = normalize_record(record, index, now);
            if !seen.insert(task.id.clone()) {
                let fresh = generate_id();
                debug!(index, duplicate = %task.id, id = %fresh, "id already used by an earlier record, generating one");
                task.id = fresh;
                seen.insert(task.id.clone());
            }
            task
        })
        .collect()
}

/// Normalizes a single record found at position `index` of the input.
///
/// Records that are not JSON objects are treated as objects with no fields,
/// so they still produce a fully defaulted task.
pub fn normalize_record(record: &Value, index: usize, now: DateTime<Utc>) -> Task {
    let empty = Map::new();
    let fields = record.as_object().unwrap_or(&empty);

    let id = fields.get("id").and_then(coerce_id).unwrap_or_else(|| {
        debug!(index, "record has no usable id, generating one");
        generate_id()
    });

    let title = match fields.get("title") {
        Some(Value::String(s)) => coerce_title(s),
        Some(Value::Number(n)) => n.to_string(),
        _ => UNTITLED_TASK.to_string(),
    };

    let revenue = match fields.get("revenue").and_then(coerce_number) {
        Some(value) if value > 0.0 => value,
        _ => 0.0,
    };

    let time_taken = match fields.get("timeTaken").and_then(coerce_number) {
        Some(value) if value > 0.0 => value,
        _ => {
            debug!(%id, "timeTaken missing or not positive, defaulting to 1");
            1.0
        }
    };

    let priority = fields
        .get("priority")
        .and_then(Value::as_str)
        .and_then(Priority::parse)
        .unwrap_or_default();

    let status = fields
        .get("status")
        .and_then(Value::as_str)
        .and_then(Status::parse)
        .unwrap_or_default();

    let notes = fields
        .get("notes")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let created_at = fields
        .get("createdAt")
        .and_then(coerce_timestamp)
        .unwrap_or_else(|| now - Duration::days(index as i64 + 1));

    let completed_at = match fields.get("completedAt").and_then(coerce_timestamp) {
        Some(completed) => Some(completed),
        None if status.is_done() => Some(created_at + Duration::days(1)),
        None => None,
    };

    Task {
        id,
        title,
        revenue,
        time_taken,
        priority,
        status,
        notes,
        created_at,
        completed_at,
    }
}

/// Lenient number conversion: numbers, numeric strings and booleans.
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return None,
    };

    number.is_finite().then_some(number)
}

fn coerce_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Datetime layouts without an offset, read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn coerce_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp(s.trim()),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

/// RFC 3339 first, then an offset-less datetime, then a bare date at midnight.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(12.5)), Some(12.5));
        assert_eq!(coerce_number(&json!(" 40 ")), Some(40.0));
        assert_eq!(coerce_number(&json!("")), Some(0.0));
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&json!(null)), None);
        assert_eq!(coerce_number(&json!([1])), None);
    }

    #[test]
    fn test_coerce_timestamp() {
        let parsed = coerce_timestamp(&json!("2024-03-01T10:00:00Z")).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-01T10:00:00+00:00");

        let millis = coerce_timestamp(&json!(0)).unwrap();
        assert_eq!(millis.timestamp(), 0);

        let naive = coerce_timestamp(&json!("2024-03-01 10:00:00.250")).unwrap();
        assert_eq!(naive.timestamp_millis(), Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap().timestamp_millis() + 250);

        assert!(coerce_timestamp(&json!("yesterday")).is_none());
        assert!(coerce_timestamp(&json!("2024-13-01")).is_none());
    }
}
