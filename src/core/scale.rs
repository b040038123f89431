use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{PlotError, PlotResult};

/// Tick count requested from an axis when none is configured.
pub const DEFAULT_TICK_COUNT: usize = 10;

pub type TickValues = SmallVec<[f64; 16]>;

/// Linear mapping from a metric domain to a pixel range.
///
/// Plot axes always use a `[0, observed max]` domain. The range may be
/// inverted (`[height, 0]`) for vertical axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl AxisScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> PlotResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(PlotError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(PlotError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Builds the `[0, max]` scale used for plot axes.
    ///
    /// A missing maximum (no numeric samples) collapses the domain to `[0, 0]`.
    pub fn zero_based(max: Option<f64>, range: (f64, f64)) -> PlotResult<Self> {
        Self::new((0.0, max.unwrap_or(0.0)), range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    /// Maps a domain value to pixel space.
    ///
    /// Non-finite values propagate as NaN. A degenerate domain maps every
    /// value to the middle of the range.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        if value.is_nan() {
            return f64::NAN;
        }
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel coordinate back into the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Round-number tick values inside the domain, ascending.
    #[must_use]
    pub fn ticks(self, count: usize) -> TickValues {
        let (lo, hi) = ordered(self.domain_start, self.domain_end);
        let mut values = TickValues::new();
        if lo == hi {
            values.push(lo);
            return values;
        }

        let step = tick_step(lo, hi, count);
        if !step.is_finite() || step <= 0.0 {
            return values;
        }
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        if step < 1.0 {
            // Divide by the inverse step so 0.1 steps yield 0.3, not 0.30000000000000004.
            let inverse = (1.0 / step).round();
            values.extend((first..=last).map(|i| i as f64 / inverse));
        } else {
            values.extend((first..=last).map(|i| i as f64 * step));
        }
        values
    }

    /// Spacing between consecutive ticks returned by `ticks(count)`.
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        let (lo, hi) = ordered(self.domain_start, self.domain_end);
        tick_step(lo, hi, count)
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let span = hi - lo;
    if span <= 0.0 || count == 0 {
        return 0.0;
    }
    let raw = span / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}

/// Formats a tick value with as many decimals as the tick step needs and
/// thousands separators on the integer part.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 && step < 1.0 {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    // Avoid "-0".
    let value = if value.abs() < step.abs() * 1e-9 {
        0.0
    } else {
        value
    };
    let raw = format!("{value:.decimals$}");
    group_thousands(&raw)
}

fn group_thousands(raw: &str) -> String {
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(raw.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisScale, format_tick};

    #[test]
    fn ticks_use_round_steps() {
        let scale = AxisScale::new((0.0, 20.0), (0.0, 500.0)).expect("scale");
        let ticks = scale.ticks(10);
        assert_eq!(ticks.as_slice(), &[
            0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0
        ]);
    }

    #[test]
    fn ticks_stay_inside_domain() {
        let scale = AxisScale::new((0.0, 0.93), (0.0, 500.0)).expect("scale");
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert!(ticks.iter().all(|tick| *tick <= 0.93));
    }

    #[test]
    fn degenerate_domain_maps_to_range_middle() {
        let scale = AxisScale::zero_based(None, (0.0, 400.0)).expect("scale");
        assert!(scale.is_degenerate());
        assert_eq!(scale.map(0.0), 200.0);
        assert_eq!(scale.ticks(10).as_slice(), &[0.0]);
    }

    #[test]
    fn nan_propagates_through_map() {
        let scale = AxisScale::zero_based(Some(10.0), (0.0, 100.0)).expect("scale");
        assert!(scale.map(f64::NAN).is_nan());
    }

    #[test]
    fn tick_labels_are_grouped_and_trimmed() {
        assert_eq!(format_tick(250_000.0, 50_000.0), "250,000");
        assert_eq!(format_tick(0.30000000000000004, 0.1), "0.3");
        assert_eq!(format_tick(-1200.0, 200.0), "-1,200");
        assert_eq!(format_tick(-0.0, 1.0), "0");
    }
}
