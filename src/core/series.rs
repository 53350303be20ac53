use std::fmt;

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Stable identity of a series across render cycles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(String);

impl SeriesId {
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SeriesId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SeriesId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One timestamped sample. `value: None` marks a gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub time: f64,
    pub value: Option<f64>,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self {
            time,
            value: Some(value),
        }
    }

    #[must_use]
    pub fn gap(time: f64) -> Self {
        Self { time, value: None }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Option<Decimal>) -> ChartResult<Self> {
        Ok(Self {
            time: datetime_to_unix_seconds(time),
            value: value.map(|v| decimal_to_f64(v, "value")).transpose()?,
        })
    }

    /// Returns the value when both time and value are finite.
    #[must_use]
    pub fn defined_value(self) -> Option<f64> {
        self.value
            .filter(|value| value.is_finite() && self.time.is_finite())
    }
}

/// OHLC bucket spanning `[open_time, close_time]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandlePoint {
    pub open_time: f64,
    pub close_time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl CandlePoint {
    /// Builds a validated candle.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `open_time < close_time`
    /// - `low <= high`
    pub fn new(
        open_time: f64,
        close_time: f64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> ChartResult<Self> {
        if [open_time, close_time, open, high, low, close]
            .iter()
            .any(|value| !value.is_finite())
        {
            return Err(ChartError::InvalidData(
                "candle values must be finite".to_owned(),
            ));
        }
        if open_time >= close_time {
            return Err(ChartError::InvalidData(
                "candle open time must be before close time".to_owned(),
            ));
        }
        if low > high {
            return Err(ChartError::InvalidData(
                "candle low must be <= high".to_owned(),
            ));
        }

        Ok(Self {
            open_time,
            close_time,
            open,
            high,
            low,
            close,
        })
    }

    pub fn from_decimal_time(
        open_time: DateTime<Utc>,
        close_time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            datetime_to_unix_seconds(open_time),
            datetime_to_unix_seconds(close_time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }

    #[must_use]
    pub fn overlaps(self, start: f64, end: f64) -> bool {
        self.open_time <= end && self.close_time >= start
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub id: SeriesId,
    pub points: Vec<SeriesPoint>,
    pub color: Color,
    #[serde(default)]
    pub staircase: bool,
    #[serde(default)]
    pub filled: bool,
    pub line_width: f64,
    #[serde(default)]
    pub priority: Option<i32>,
}

impl LineSeries {
    pub const DEFAULT_LINE_WIDTH: f64 = 1.5;

    #[must_use]
    pub fn new(id: impl Into<SeriesId>, points: Vec<SeriesPoint>, color: Color) -> Self {
        Self {
            id: id.into(),
            points,
            color,
            staircase: false,
            filled: false,
            line_width: Self::DEFAULT_LINE_WIDTH,
            priority: None,
        }
    }

    #[must_use]
    pub fn with_staircase(mut self, staircase: bool) -> Self {
        self.staircase = staircase;
        self
    }

    #[must_use]
    pub fn with_filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSeries {
    pub id: SeriesId,
    pub points: Vec<SeriesPoint>,
    pub color: Color,
    #[serde(default)]
    pub priority: Option<i32>,
}

impl PointSeries {
    #[must_use]
    pub fn new(id: impl Into<SeriesId>, points: Vec<SeriesPoint>, color: Color) -> Self {
        Self {
            id: id.into(),
            points,
            color,
            priority: None,
        }
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    pub id: SeriesId,
    pub points: Vec<CandlePoint>,
    #[serde(default)]
    pub priority: Option<i32>,
}

impl CandleSeries {
    /// Builds a candle series, sorting candles by open time.
    #[must_use]
    pub fn new(id: impl Into<SeriesId>, mut points: Vec<CandlePoint>) -> Self {
        points.sort_by_key(|candle| OrderedFloat(candle.open_time));
        Self {
            id: id.into(),
            points,
            priority: None,
        }
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Closed set of drawable series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Series {
    Line(LineSeries),
    Point(PointSeries),
    Candle(CandleSeries),
}

impl Series {
    #[must_use]
    pub fn id(&self) -> &SeriesId {
        match self {
            Self::Line(series) => &series.id,
            Self::Point(series) => &series.id,
            Self::Candle(series) => &series.id,
        }
    }

    /// Render priority; lower values are drawn first.
    #[must_use]
    pub fn priority(&self) -> i32 {
        match self {
            Self::Line(series) => series.priority,
            Self::Point(series) => series.priority,
            Self::Candle(series) => series.priority,
        }
        .unwrap_or(0)
    }

    /// Inclusive time extent of the series, ignoring gaps.
    #[must_use]
    pub fn time_extent(&self) -> Option<(f64, f64)> {
        match self {
            Self::Line(LineSeries { points, .. }) | Self::Point(PointSeries { points, .. }) => {
                points
                    .iter()
                    .filter(|point| point.defined_value().is_some())
                    .fold(None, |acc, point| extend_extent(acc, point.time, point.time))
            }
            Self::Candle(series) => series.points.iter().fold(None, |acc, candle| {
                extend_extent(acc, candle.open_time, candle.close_time)
            }),
        }
    }
}

impl From<LineSeries> for Series {
    fn from(value: LineSeries) -> Self {
        Self::Line(value)
    }
}

impl From<PointSeries> for Series {
    fn from(value: PointSeries) -> Self {
        Self::Point(value)
    }
}

impl From<CandleSeries> for Series {
    fn from(value: CandleSeries) -> Self {
        Self::Candle(value)
    }
}

pub(crate) fn extend_extent(acc: Option<(f64, f64)>, low: f64, high: f64) -> Option<(f64, f64)> {
    if !low.is_finite() || !high.is_finite() {
        return acc;
    }
    Some(match acc {
        Some((min, max)) => (min.min(low), max.max(high)),
        None => (low, high),
    })
}

/// Returns series references in draw order: ascending priority, ties in input
/// order.
#[must_use]
pub fn in_draw_order<'a>(series: impl IntoIterator<Item = &'a Series>) -> Vec<&'a Series> {
    let mut ordered: Vec<&Series> = series.into_iter().collect();
    ordered.sort_by_key(|series| series.priority());
    ordered
}
