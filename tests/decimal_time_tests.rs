use chrono::TimeZone;
use chrono::Utc;
use rust_decimal::Decimal;

use folio_chart::core::{CandlePoint, SeriesPoint};

#[test]
fn series_point_from_decimal_time_is_supported() {
    let time = Utc
        .timestamp_opt(1_700_000_000, 0)
        .single()
        .expect("valid ts");
    let point =
        SeriesPoint::from_decimal_time(time, Some(Decimal::new(12345, 2))).expect("point");

    assert!((point.time - 1_700_000_000.0).abs() <= 1e-6);
    assert!((point.value.expect("value") - 123.45).abs() <= 1e-9);
}

#[test]
fn series_gap_from_decimal_time_is_supported() {
    let time = Utc
        .timestamp_opt(1_700_000_000, 0)
        .single()
        .expect("valid ts");
    let point = SeriesPoint::from_decimal_time(time, None).expect("gap");

    assert_eq!(point.value, None);
    assert_eq!(point.defined_value(), None);
}

#[test]
fn candle_from_decimal_time_is_supported() {
    let open_time = Utc
        .timestamp_opt(1_700_000_100, 0)
        .single()
        .expect("valid ts");
    let close_time = Utc
        .timestamp_opt(1_700_003_700, 0)
        .single()
        .expect("valid ts");
    let candle = CandlePoint::from_decimal_time(
        open_time,
        close_time,
        Decimal::new(1000, 1),
        Decimal::new(1200, 1),
        Decimal::new(900, 1),
        Decimal::new(1100, 1),
    )
    .expect("candle");

    assert!((candle.open_time - 1_700_000_100.0).abs() <= 1e-6);
    assert!((candle.close_time - 1_700_003_700.0).abs() <= 1e-6);
    assert!((candle.open - 100.0).abs() <= 1e-9);
    assert!((candle.high - 120.0).abs() <= 1e-9);
    assert!((candle.low - 90.0).abs() <= 1e-9);
    assert!((candle.close - 110.0).abs() <= 1e-9);
    assert!(candle.is_bullish());
}

#[test]
fn candle_from_decimal_time_rejects_reversed_bucket() {
    let time = Utc
        .timestamp_opt(1_700_000_100, 0)
        .single()
        .expect("valid ts");
    let result = CandlePoint::from_decimal_time(
        time,
        time,
        Decimal::ONE,
        Decimal::ONE,
        Decimal::ONE,
        Decimal::ONE,
    );
    assert!(result.is_err());
}
