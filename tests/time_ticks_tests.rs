use chrono::NaiveDate;
use folio_chart::core::{Scale, TimeTickInterval, TimeTickUnit, select_time_interval, time_ticks};

fn midnight(year: i32, month: u32, day: u32) -> f64 {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid date")
        .and_utc()
        .timestamp() as f64
}

fn labels(scale: Scale) -> Vec<(String, bool)> {
    time_ticks(scale, 100.0)
        .into_iter()
        .map(|tick| (tick.label, tick.highlighted))
        .collect()
}

#[test]
fn interval_selection_snaps_to_nice_multiples() {
    let day = 86_400.0;
    assert_eq!(
        select_time_interval(30.0 * day, 800.0, 100.0),
        TimeTickInterval {
            unit: TimeTickUnit::Day,
            step: 3
        }
    );
    assert_eq!(
        select_time_interval(366.0 * day, 1000.0, 100.0),
        TimeTickInterval {
            unit: TimeTickUnit::Month,
            step: 1
        }
    );
    assert_eq!(
        select_time_interval(34.0 * 365.25 * day, 500.0, 100.0),
        TimeTickInterval {
            unit: TimeTickUnit::Year,
            step: 5
        }
    );
}

#[test]
fn month_ticks_highlight_year_starts() {
    let scale = Scale::linear((midnight(2024, 1, 1), midnight(2025, 1, 1)), (0.0, 1000.0));
    let ticks = labels(scale);

    assert_eq!(ticks.len(), 13);
    assert_eq!(ticks[0], ("2024".to_owned(), true));
    assert_eq!(ticks[1], ("Feb".to_owned(), false));
    assert_eq!(ticks[11], ("Dec".to_owned(), false));
    assert_eq!(ticks[12], ("2025".to_owned(), true));
}

#[test]
fn day_ticks_restart_at_month_start() {
    let scale = Scale::linear((midnight(2024, 3, 1), midnight(2024, 3, 31)), (0.0, 800.0));
    let ticks = labels(scale);

    let expected: Vec<(String, bool)> = std::iter::once(("Mar".to_owned(), true))
        .chain(
            [4, 7, 10, 13, 16, 19, 22, 25, 28, 31]
                .into_iter()
                .map(|day: u32| (day.to_string(), false)),
        )
        .collect();
    assert_eq!(ticks, expected);
}

#[test]
fn crowded_tick_before_a_month_start_is_replaced() {
    let scale = Scale::linear((midnight(2024, 2, 20), midnight(2024, 3, 20)), (0.0, 300.0));
    let ticks = labels(scale);

    assert_eq!(
        ticks,
        vec![
            ("22".to_owned(), false),
            ("Mar".to_owned(), true),
            ("8".to_owned(), false),
            ("15".to_owned(), false),
        ]
    );
}

#[test]
fn year_ticks_are_step_aligned_and_never_highlighted() {
    let scale = Scale::linear((midnight(1990, 1, 1), midnight(2024, 1, 1)), (0.0, 500.0));
    let ticks = labels(scale);

    let expected: Vec<(String, bool)> = (1990..=2020)
        .step_by(5)
        .map(|year: i32| (year.to_string(), false))
        .collect();
    assert_eq!(ticks, expected);
}

#[test]
fn ticks_are_strictly_ordered_in_pixels() {
    let scale = Scale::linear((midnight(2023, 11, 5), midnight(2024, 2, 9)), (0.0, 640.0));
    let ticks = time_ticks(scale, 100.0);
    assert!(!ticks.is_empty());
    for pair in ticks.windows(2) {
        assert!(scale.scale(pair[0].value).round() < scale.scale(pair[1].value).round());
    }
}

#[test]
fn degenerate_pixel_range_yields_no_ticks() {
    let scale = Scale::linear((midnight(2024, 1, 1), midnight(2024, 6, 1)), (0.0, 0.0));
    assert!(time_ticks(scale, 100.0).is_empty());
}
