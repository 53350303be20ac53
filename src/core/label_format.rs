use chrono::Datelike;

use crate::core::primitives::unix_seconds_to_datetime;

/// Replacement for every value label while privacy mode is on.
pub const REDACTED_LABEL: &str = "••••••••";

const MAX_DECIMALS: i32 = 8;

/// Formats a value axis label.
///
/// With a known tick `step` the precision is just enough to tell adjacent
/// ticks apart; without one (symmetric-log ticks, readouts) it depends on the
/// value's magnitude.
#[must_use]
pub fn format_value(value: f64, step: Option<f64>) -> String {
    if !value.is_finite() {
        return String::from("-");
    }

    let decimals = match step.filter(|step| step.is_finite() && *step > 0.0) {
        Some(step) => (-step.log10().floor() as i32).clamp(0, MAX_DECIMALS),
        None => magnitude_decimals(value),
    } as usize;

    let threshold = 0.5 * 10f64.powi(-(decimals as i32));
    let value = if value.abs() < threshold { 0.0 } else { value };
    format!("{value:.decimals$}")
}

fn magnitude_decimals(value: f64) -> i32 {
    let magnitude = value.abs();
    if magnitude >= 100.0 {
        0
    } else if magnitude >= 1.0 {
        2
    } else {
        4
    }
}

/// Formats chart time (Unix seconds) as an ISO calendar date in UTC.
#[must_use]
pub fn format_date(seconds: f64) -> String {
    match unix_seconds_to_datetime(seconds) {
        Some(time) => {
            let date = time.date_naive();
            format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
        }
        None => String::from("-"),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_date, format_value};

    #[test]
    fn step_controls_precision() {
        assert_eq!(format_value(1250.0, Some(50.0)), "1250");
        assert_eq!(format_value(0.25, Some(0.05)), "0.25");
        assert_eq!(format_value(-0.0001, Some(0.5)), "0.0");
    }

    #[test]
    fn magnitude_controls_precision_without_step() {
        assert_eq!(format_value(110.0, None), "110");
        assert_eq!(format_value(3.14159, None), "3.14");
    }

    #[test]
    fn dates_use_utc_calendar() {
        assert_eq!(format_date(86_400.0), "1970-01-02");
    }
}
