//! Display formatting for money, ROI, percentages and timestamps.
//!
//! Used by the table views and the CSV/Excel exporters so a value reads the
//! same in the terminal and in an exported file.
//!
//! ## Examples
//!
//! ```rust
//! use taskglitch::libs::formatter::{format_currency, format_roi};
//!
//! assert_eq!(format_currency(12500.0), "$12,500");
//! assert_eq!(format_roi(Some(62.5)), "62.5");
//! assert_eq!(format_roi(None), "-");
//! ```

use chrono::{DateTime, Utc};

/// Placeholder shown for a missing ROI or timestamp.
pub const EMPTY_CELL: &str = "-";

/// Formats an amount as dollars with thousands separators. Cents are shown
/// only when present: `1234.5` → `$1,234.50`, `1200.0` → `$1,200`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }

    let negative = amount < 0.0;
    let cents_total = (amount.abs() * 100.0).round() as u64;
    let whole = cents_total / 100;
    let cents = cents_total % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative && cents_total > 0 { "-" } else { "" };
    if cents == 0 {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{:02}", sign, grouped, cents)
    }
}

/// ROI with one decimal, or `-` when undefined.
pub fn format_roi(roi: Option<f64>) -> String {
    match roi {
        Some(value) if value.is_finite() => format!("{:.1}", value),
        _ => EMPTY_CELL.to_string(),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Hours without a fractional part when whole: `12.0` → `12h`.
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}h", hours as i64)
    } else {
        format!("{:.1}h", hours)
    }
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_optional_timestamp(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(format_timestamp).unwrap_or_else(|| EMPTY_CELL.to_string())
}
