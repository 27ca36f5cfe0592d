use chrono::{Datelike, Months, NaiveDate};

use super::classifier::classify;
use super::error::FeasibilityError;
use super::explanation::explain;
use super::pass_rate::expected_passes;
use super::sensor::SensorType;
use super::types::FeasibilityResult;

const DATE_LEN: usize = 10; // YYYY-MM-DD

/// Estimate tasking feasibility for a point and a date window.
///
/// Never fails: missing or malformed input yields [`FeasibilityResult::unknown`].
/// Dates only need to start with `YYYY-MM-DD`, so full ISO timestamps are
/// accepted as well.
pub fn calculate_feasibility(
    sensor_type: Option<&str>,
    latitude: f64,
    longitude: f64,
    window_start: Option<&str>,
    window_end: Option<&str>,
) -> FeasibilityResult {
    match try_calculate_feasibility(sensor_type, latitude, longitude, window_start, window_end) {
        Ok(result) => result,
        Err(e) => {
            log::debug!("Falling back to unknown feasibility: {}", e);
            FeasibilityResult::unknown()
        }
    }
}

/// Same as [`calculate_feasibility`] but reports why the inputs were rejected.
pub fn try_calculate_feasibility(
    sensor_type: Option<&str>,
    latitude: f64,
    longitude: f64,
    window_start: Option<&str>,
    window_end: Option<&str>,
) -> Result<FeasibilityResult, FeasibilityError> {
    let sensor_label = sensor_type.ok_or(FeasibilityError::MissingInput("sensor_type"))?;
    let window_start = window_start.ok_or(FeasibilityError::MissingInput("window_start"))?;
    let window_end = window_end.ok_or(FeasibilityError::MissingInput("window_end"))?;

    let start = parse_window_date("window_start", window_start)?;
    let end = parse_window_date("window_end", window_end)?;

    let days = end.signed_duration_since(start).num_days() + 1;
    if days <= 0 {
        return Err(FeasibilityError::EmptyWindow {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let sensor = SensorType::parse(sensor_label);
    let passes = expected_passes(sensor, latitude, longitude, days);
    let level = classify(sensor, passes, days);
    let explanation = explain(sensor_label, passes, days, latitude);

    Ok(FeasibilityResult {
        expected_passes: passes,
        level,
        sensor_type: sensor_label.to_string(),
        explanation,
        latitude,
        longitude,
        date_range: format!("{} - {}", start.format("%b %d"), end.format("%b %d, %Y")),
    })
}

/// Parse the leading `YYYY-MM-DD` of `value`.
///
/// A day past the end of its month is clamped to the month's last day
/// (`2024-02-30` is Feb 29); days outside 1..=31 and months outside 1..=12
/// are rejected.
pub fn parse_window_date(field: &'static str, value: &str) -> Result<NaiveDate, FeasibilityError> {
    let invalid = || FeasibilityError::InvalidDate {
        field,
        value: value.to_string(),
    };

    if value.len() < DATE_LEN {
        return Err(FeasibilityError::DateTooShort {
            field,
            value: value.to_string(),
        });
    }
    let head = value.get(..DATE_LEN).ok_or_else(invalid)?;
    if !head.is_ascii() {
        return Err(invalid());
    }

    let b = head.as_bytes();
    if b[4] != b'-' || b[7] != b'-' {
        return Err(invalid());
    }

    let year = digits(&head[0..4]).ok_or_else(invalid)?;
    let month = digits(&head[5..7]).ok_or_else(invalid)?;
    let day = digits(&head[8..10]).ok_or_else(invalid)?;

    if year == 0 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }

    let first = NaiveDate::from_ymd_opt(year as i32, month, 1).ok_or_else(invalid)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .ok_or_else(invalid)?;
    first.with_day(day.min(last.day())).ok_or_else(invalid)
}

fn digits(s: &str) -> Option<u32> {
    if s.bytes().all(|c| c.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}
