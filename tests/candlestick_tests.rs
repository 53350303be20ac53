use folio_chart::ChartError;
use folio_chart::core::{CandlePoint, CandleSeries, Scale, project_candles};

fn scales(width: f64) -> (Scale, Scale) {
    (
        Scale::linear((0.0, 100.0), (0.0, width)),
        Scale::linear((0.0, 50.0), (500.0, 0.0)),
    )
}

#[test]
fn candle_validation_rejects_inverted_buckets_and_ranges() {
    let err = CandlePoint::new(10.0, 10.0, 1.0, 2.0, 0.5, 1.5).expect_err("empty bucket");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = CandlePoint::new(0.0, 10.0, 1.0, 0.5, 2.0, 1.5).expect_err("low above high");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = CandlePoint::new(0.0, f64::NAN, 1.0, 2.0, 0.5, 1.5).expect_err("nan time");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn candle_series_sorts_by_open_time() {
    let late = CandlePoint::new(20.0, 30.0, 1.0, 2.0, 0.5, 1.5).expect("valid");
    let early = CandlePoint::new(0.0, 10.0, 1.0, 2.0, 0.5, 1.5).expect("valid");
    let series = CandleSeries::new("ohlc", vec![late, early]);
    assert_eq!(series.points, vec![early, late]);
}

#[test]
fn body_spans_the_bucket_and_wick_spans_high_low() {
    let (x, y) = scales(1000.0);
    let candle = CandlePoint::new(10.0, 20.0, 10.0, 40.0, 5.0, 30.0).expect("valid");

    let geometry = project_candles(&[candle], x, y, 3.0);
    let candle = geometry[0];
    assert!(candle.is_bullish);
    assert!((candle.center_x - 150.0).abs() <= 1e-9);
    assert!((candle.wick_top - 100.0).abs() <= 1e-9);
    assert!((candle.wick_bottom - 450.0).abs() <= 1e-9);

    let body = candle.body.expect("wide enough for a body");
    assert!((body.left - 100.0).abs() <= 1e-9);
    assert!((body.right - 200.0).abs() <= 1e-9);
    assert!((body.top - 200.0).abs() <= 1e-9);
    assert!((body.bottom - 400.0).abs() <= 1e-9);
}

#[test]
fn narrow_buckets_draw_only_the_wick() {
    let (x, y) = scales(20.0);
    let candle = CandlePoint::new(10.0, 20.0, 30.0, 40.0, 5.0, 10.0).expect("valid");

    let geometry = project_candles(&[candle], x, y, 3.0);
    assert!(!geometry[0].is_bullish);
    assert!(geometry[0].body.is_none());
    assert!(geometry[0].wick_bottom > geometry[0].wick_top);
}
