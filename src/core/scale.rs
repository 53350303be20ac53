use serde::{Deserialize, Serialize};

/// Constant of the symmetric-log transform; values with `|v| << 1` map almost
/// linearly.
const SYMLOG_CONSTANT: f64 = 1.0;

/// Upper bound on generated nice ticks; protects against absurd spans.
const MAX_NICE_TICKS: usize = 1_000;

/// Value mapping mode. `Logarithmic` is a symmetric-log transform that stays
/// defined through zero and is only used on the value (Y) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    #[default]
    Linear,
    Logarithmic,
}

impl ScaleMode {
    /// Maps a domain value into the mode's transformed space.
    #[must_use]
    pub fn transform(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Logarithmic => value.signum() * (value / SYMLOG_CONSTANT).abs().ln_1p(),
        }
    }

    /// Inverse of [`ScaleMode::transform`].
    #[must_use]
    pub fn untransform(self, transformed: f64) -> f64 {
        match self {
            Self::Linear => transformed,
            Self::Logarithmic => {
                transformed.signum() * transformed.abs().exp_m1() * SYMLOG_CONSTANT
            }
        }
    }
}

/// Invertible mapping between a domain interval and a pixel interval.
///
/// Construction never fails: a collapsed domain falls back to the unit
/// interval centred on its value and a non-finite domain to `[0, 1]`, so
/// callers always get finite geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    mode: ScaleMode,
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    transformed_start: f64,
    transformed_end: f64,
}

impl Scale {
    #[must_use]
    pub fn new(mode: ScaleMode, domain: (f64, f64), range: (f64, f64)) -> Self {
        let (domain_start, domain_end) = sanitize_domain(domain);
        let (range_start, range_end) = if range.0.is_finite() && range.1.is_finite() {
            range
        } else {
            (0.0, 0.0)
        };

        let mut transformed_start = mode.transform(domain_start);
        let mut transformed_end = mode.transform(domain_end);
        if !transformed_start.is_finite()
            || !transformed_end.is_finite()
            || transformed_start == transformed_end
        {
            // Only reachable for huge magnitudes collapsing in transformed space.
            transformed_start = domain_start;
            transformed_end = domain_end;
        }

        Self {
            mode,
            domain_start,
            domain_end,
            range_start,
            range_end,
            transformed_start,
            transformed_end,
        }
    }

    #[must_use]
    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self::new(ScaleMode::Linear, domain, range)
    }

    #[must_use]
    pub fn symlog(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self::new(ScaleMode::Logarithmic, domain, range)
    }

    #[must_use]
    pub fn mode(self) -> ScaleMode {
        self.mode
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Domain value to pixel.
    #[must_use]
    pub fn scale(self, value: f64) -> f64 {
        let transformed = self.mode.transform(value);
        let normalized = (transformed - self.transformed_start)
            / (self.transformed_end - self.transformed_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Pixel to domain value. A collapsed pixel range inverts to the domain
    /// start.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        let transformed = self.transformed_start
            + normalized * (self.transformed_end - self.transformed_start);
        self.mode.untransform(transformed)
    }

    /// Nice-number ticks across the domain, ignoring the scale mode.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_start, self.domain_end, count)
    }
}

fn sanitize_domain(domain: (f64, f64)) -> (f64, f64) {
    let (start, end) = domain;
    if !start.is_finite() || !end.is_finite() {
        return (0.0, 1.0);
    }
    if start == end {
        return (start - 0.5, start + 0.5);
    }
    (start, end)
}

/// Returns a human-friendly tick step (1, 2 or 5 times a power of ten) for
/// roughly `count` subdivisions of `[start, stop]`.
///
/// Negative results encode the reciprocal of a sub-unit step (`-4.0` means
/// `0.25`) so tick values can be computed by division without accumulating
/// binary rounding error.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / (count.max(1) as f64);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Nice tick values inside `[start, stop]` (either orientation), ascending.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 || start == stop {
        return Vec::new();
    }
    let (lo, hi) = if start < stop {
        (start, stop)
    } else {
        (stop, start)
    };

    let increment = tick_increment(lo, hi, count);
    if increment == 0.0 || !increment.is_finite() {
        return Vec::new();
    }

    let inverse = increment < 0.0;
    let step = increment.abs();
    let (mut first, mut last) = if inverse {
        ((lo * step).round(), (hi * step).round())
    } else {
        ((lo / step).round(), (hi / step).round())
    };
    let at = |k: f64| if inverse { k / step } else { k * step };
    if at(first) < lo {
        first += 1.0;
    }
    if at(last) > hi {
        last -= 1.0;
    }
    if last < first {
        return Vec::new();
    }

    let count = (last - first) as usize + 1;
    if count > MAX_NICE_TICKS {
        return Vec::new();
    }
    (0..count).map(|i| at(first + i as f64)).collect()
}
