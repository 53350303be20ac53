//! Calendar-aware ticks for the time (X) axis.
//!
//! The interval is picked so ticks land roughly one slot apart. Stepping
//! always restarts from calendar boundaries (month starts for day steps,
//! year starts for month steps, step-aligned years) so the tick set stays
//! stable while the user pans.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{SECONDS_PER_DAY, unix_seconds_to_datetime};
use crate::core::{Scale, Tick};

pub const DEFAULT_TIME_TICK_SLOT_PX: f64 = 100.0;

const DAY_STEPS: [u32; 5] = [1, 2, 3, 7, 14];
const MONTH_STEPS: [u32; 4] = [1, 2, 3, 6];
const YEAR_STEPS: [u32; 8] = [1, 2, 3, 5, 10, 25, 50, 100];

const DAYS_PER_MONTH: f64 = 30.436_875;
const DAYS_PER_YEAR: f64 = 365.2425;
/// Above this many days per slot, days give way to months.
const MAX_DAYS_PER_TICK: f64 = 21.0;
/// Above this many months per slot, months give way to years.
const MAX_MONTHS_PER_TICK: f64 = 9.0;
const MAX_WALK_STEPS: usize = 20_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeTickUnit {
    Day,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTickInterval {
    pub unit: TimeTickUnit,
    pub step: u32,
}

/// Picks the calendar unit and nice multiple whose spacing is closest to one
/// tick per `slot_px` pixels.
#[must_use]
pub fn select_time_interval(span_seconds: f64, width_px: f64, slot_px: f64) -> TimeTickInterval {
    let slots = (width_px / slot_px).max(1.0);
    let days_per_tick = span_seconds.abs() / SECONDS_PER_DAY / slots;

    if days_per_tick < MAX_DAYS_PER_TICK {
        return TimeTickInterval {
            unit: TimeTickUnit::Day,
            step: nearest_step(&DAY_STEPS, days_per_tick),
        };
    }

    let months_per_tick = days_per_tick / DAYS_PER_MONTH;
    if months_per_tick < MAX_MONTHS_PER_TICK {
        return TimeTickInterval {
            unit: TimeTickUnit::Month,
            step: nearest_step(&MONTH_STEPS, months_per_tick),
        };
    }

    TimeTickInterval {
        unit: TimeTickUnit::Year,
        step: nearest_step(&YEAR_STEPS, days_per_tick / DAYS_PER_YEAR),
    }
}

fn nearest_step(steps: &[u32], target: f64) -> u32 {
    steps
        .iter()
        .copied()
        .min_by_key(|step| OrderedFloat((f64::from(*step) - target).abs()))
        .unwrap_or(1)
}

/// Generates labeled ticks for the scale's visible time domain.
///
/// Returns an empty list for degenerate or non-finite domains.
#[must_use]
pub fn time_ticks(scale: Scale, slot_px: f64) -> Vec<Tick> {
    let (domain_start, domain_end) = scale.domain();
    let (start, end) = if domain_start <= domain_end {
        (domain_start, domain_end)
    } else {
        (domain_end, domain_start)
    };
    let (range_start, range_end) = scale.range();
    let width_px = (range_end - range_start).abs();
    if start == end || width_px <= 0.0 || !slot_px.is_finite() || slot_px <= 0.0 {
        return Vec::new();
    }
    let (Some(start_date), Some(end_date)) = (date_of(start), date_of(end)) else {
        return Vec::new();
    };

    let interval = select_time_interval(end - start, width_px, slot_px);
    let mut walker = TickWalker {
        scale,
        start,
        end,
        min_boundary_gap_px: slot_px / 2.0,
        ticks: Vec::new(),
    };

    match interval.unit {
        TimeTickUnit::Day => walk_days(&mut walker, start_date, end_date, interval.step),
        TimeTickUnit::Month => walk_months(&mut walker, start_date, end_date, interval.step),
        TimeTickUnit::Year => walk_years(&mut walker, start_date, end_date, interval.step),
    }

    let mut ticks = walker.ticks;
    let mut last_px: Option<i64> = None;
    ticks.retain(|tick| {
        let px = scale.scale(tick.value).round() as i64;
        let keep = last_px != Some(px);
        last_px = Some(px);
        keep
    });
    ticks
}

struct TickWalker {
    scale: Scale,
    start: f64,
    end: f64,
    min_boundary_gap_px: f64,
    ticks: Vec<Tick>,
}

impl TickWalker {
    fn emit(&mut self, date: NaiveDate, highlighted: bool) {
        let time = midnight_seconds(date);
        if time < self.start || time > self.end {
            return;
        }

        // A rollover tick wins over an ordinary tick crowding it.
        let crowded_last = self.ticks.last().is_some_and(|last| {
            !last.highlighted
                && (self.scale.scale(time) - self.scale.scale(last.value)).abs()
                    < self.min_boundary_gap_px
        });
        if highlighted && crowded_last {
            self.ticks.pop();
        }

        self.ticks.push(Tick {
            value: time,
            label: date_label(date),
            highlighted,
        });
    }
}

fn walk_days(walker: &mut TickWalker, start: NaiveDate, end: NaiveDate, step: u32) {
    let Some(mut cursor) = start.with_day(1) else {
        return;
    };
    for _ in 0..MAX_WALK_STEPS {
        if cursor > end {
            break;
        }
        walker.emit(cursor, cursor.day() == 1);

        let next = cursor.checked_add_days(Days::new(u64::from(step)));
        let next_month = cursor
            .with_day(1)
            .and_then(|first| first.checked_add_months(Months::new(1)));
        cursor = match (next, next_month) {
            (Some(next), Some(next_month)) => next.min(next_month),
            (Some(next), None) => next,
            (None, Some(next_month)) => next_month,
            (None, None) => break,
        };
    }
}

fn walk_months(walker: &mut TickWalker, start: NaiveDate, end: NaiveDate, step: u32) {
    let Some(mut cursor) = NaiveDate::from_ymd_opt(start.year(), 1, 1) else {
        return;
    };
    for _ in 0..MAX_WALK_STEPS {
        if cursor > end {
            break;
        }
        walker.emit(cursor, cursor.month() == 1);
        match cursor.checked_add_months(Months::new(step)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
}

fn walk_years(walker: &mut TickWalker, start: NaiveDate, end: NaiveDate, step: u32) {
    let step = i32::try_from(step).unwrap_or(1).max(1);
    let mut year = start.year() - start.year().rem_euclid(step);
    for _ in 0..MAX_WALK_STEPS {
        let Some(cursor) = NaiveDate::from_ymd_opt(year, 1, 1) else {
            break;
        };
        if cursor > end {
            break;
        }
        walker.emit(cursor, false);
        year += step;
    }
}

fn date_of(seconds: f64) -> Option<NaiveDate> {
    unix_seconds_to_datetime(seconds).map(|time| time.date_naive())
}

fn midnight_seconds(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

fn date_label(date: NaiveDate) -> String {
    if date.month() == 1 && date.day() == 1 {
        date.year().to_string()
    } else if date.day() == 1 {
        date.format("%b").to_string()
    } else {
        date.day().to_string()
    }
}
