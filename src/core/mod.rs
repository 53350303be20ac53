pub mod autofit;
pub mod axis;
pub mod candlestick;
pub mod interpolation;
pub mod label_format;
pub mod line_series;
pub mod point_series;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod time_ticks;
pub mod types;
pub mod value_ticks;
pub mod windowing;

pub use autofit::{inflate_y_domain, resolve_x_domain, resolve_y_domain, x_extent, y_extent};
pub use axis::{
    Axis, AxisPair, AxisStyle, EstimatedTextMeasurer, TextMeasurer, Tick, build_axes,
    build_time_axis, build_value_axis, time_axis_height,
};
pub use candlestick::{CandleBody, CandleGeometry, project_candles};
pub use interpolation::{BoundaryValues, boundary_values, line_value_at, value_at};
pub use label_format::REDACTED_LABEL;
pub use line_series::{LinePath, project_line_paths};
pub use point_series::{DiamondMarker, project_point_markers};
pub use scale::{Scale, ScaleMode, nice_ticks};
pub use series::{
    CandlePoint, CandleSeries, LineSeries, PointSeries, Series, SeriesId, SeriesPoint,
    in_draw_order,
};
pub use time_ticks::{TimeTickInterval, TimeTickUnit, select_time_interval, time_ticks};
pub use types::{CanvasSize, PlotRegion, Viewport};
pub use value_ticks::value_ticks;
pub use windowing::{candles_in_time_window, visible_point_range};
