use folio_chart::core::{
    BoundaryValues, CandlePoint, CandleSeries, LineSeries, PointSeries, Series, SeriesPoint,
    boundary_values, line_value_at, value_at, y_extent,
};
use folio_chart::render::Color;

const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

fn points() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new(0.0, 10.0),
        SeriesPoint::new(10.0, 20.0),
        SeriesPoint::gap(15.0),
        SeriesPoint::new(20.0, 40.0),
    ]
}

fn candle(open_time: f64, close: f64) -> CandlePoint {
    CandlePoint::new(open_time, open_time + 10.0, close, close + 1.0, close - 1.0, close)
        .expect("valid candle")
}

#[test]
fn interpolation_is_idempotent_at_existing_points() {
    let points = points();
    for point in points.iter().filter(|point| point.value.is_some()) {
        assert_eq!(line_value_at(&points, point.time, false), point.value);
        assert_eq!(line_value_at(&points, point.time, true), point.value);
    }
}

#[test]
fn linear_interpolation_uses_time_fraction_and_skips_gaps() {
    let points = points();
    let value = line_value_at(&points, 2.5, false).expect("bracketed");
    assert!((value - 12.5).abs() <= 1e-9);

    let across_gap = line_value_at(&points, 15.0, false).expect("bracketed across gap");
    assert!((across_gap - 30.0).abs() <= 1e-9);
}

#[test]
fn staircase_holds_the_earlier_value() {
    let points = points();
    assert_eq!(line_value_at(&points, 9.999, true), Some(10.0));
    assert_eq!(line_value_at(&points, 17.0, true), Some(20.0));
}

#[test]
fn outside_the_defined_range() {
    let points = points();
    assert_eq!(line_value_at(&points, -1.0, false), None);
    assert_eq!(line_value_at(&points, -1.0, true), None);
    assert_eq!(line_value_at(&points, 25.0, false), None);
    assert_eq!(line_value_at(&points, 25.0, true), Some(40.0));
}

#[test]
fn candle_boundaries_use_first_and_last_overlapping_close() {
    let series = Series::from(CandleSeries::new(
        "ohlc",
        vec![candle(0.0, 100.0), candle(10.0, 105.0), candle(20.0, 102.0)],
    ));

    assert_eq!(
        boundary_values(&series, 5.0, 15.0),
        BoundaryValues {
            start: Some(100.0),
            end: Some(105.0),
        }
    );
    assert_eq!(value_at(&series, 25.0), Some(102.0));
    assert_eq!(boundary_values(&series, 100.0, 200.0), BoundaryValues::default());
}

#[test]
fn point_boundaries_use_nearest_in_window_value() {
    let series = Series::from(PointSeries::new(
        "trades",
        vec![
            SeriesPoint::new(0.0, 1.0),
            SeriesPoint::new(5.0, 2.0),
            SeriesPoint::new(8.0, 3.0),
            SeriesPoint::new(12.0, 4.0),
        ],
        BLUE,
    ));

    assert_eq!(
        boundary_values(&series, 4.0, 10.0),
        BoundaryValues {
            start: Some(2.0),
            end: Some(3.0),
        }
    );
    assert_eq!(value_at(&series, 11.0), Some(4.0));
}

#[test]
fn auto_fit_includes_values_interpolated_at_window_edges() {
    let series = [Series::from(LineSeries::new(
        "total",
        vec![SeriesPoint::new(0.0, 0.0), SeriesPoint::new(10.0, 100.0)],
        BLUE,
    ))];

    let (low, high) = y_extent(series.iter(), 2.0, 8.0).expect("edge values");
    assert!((low - 20.0).abs() <= 1e-9);
    assert!((high - 80.0).abs() <= 1e-9);
}
