use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{CandlePoint, Scale};

/// Candle body rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleBody {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Projected candle geometry in pixel coordinates.
///
/// `body` is `None` when the bucket is narrower than the minimum body width;
/// the wick is always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub center_x: f64,
    pub body: Option<CandleBody>,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub is_bullish: bool,
}

/// Projects OHLC candles into deterministic render geometry.
///
/// The body spans the bucket's pixel width (`open_time` to `close_time`).
pub fn project_candles(
    candles: &[CandlePoint],
    x_scale: Scale,
    y_scale: Scale,
    min_body_width_px: f64,
) -> Vec<CandleGeometry> {
    // For large series, optional parallel projection keeps output identical
    // while reducing wall-clock projection time.
    #[cfg(feature = "parallel-projection")]
    {
        candles
            .par_iter()
            .map(|candle| project_single_candle(*candle, x_scale, y_scale, min_body_width_px))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        candles
            .iter()
            .map(|candle| project_single_candle(*candle, x_scale, y_scale, min_body_width_px))
            .collect()
    }
}

fn project_single_candle(
    candle: CandlePoint,
    x_scale: Scale,
    y_scale: Scale,
    min_body_width_px: f64,
) -> CandleGeometry {
    let left = x_scale.scale(candle.open_time);
    let right = x_scale.scale(candle.close_time);
    let open_y = y_scale.scale(candle.open);
    let close_y = y_scale.scale(candle.close);
    let high_y = y_scale.scale(candle.high);
    let low_y = y_scale.scale(candle.low);

    let body = ((right - left).abs() >= min_body_width_px).then(|| CandleBody {
        left: left.min(right),
        right: left.max(right),
        top: open_y.min(close_y),
        bottom: open_y.max(close_y),
    });

    CandleGeometry {
        center_x: (left + right) / 2.0,
        body,
        wick_top: high_y.min(low_y),
        wick_bottom: high_y.max(low_y),
        is_bullish: candle.is_bullish(),
    }
}
