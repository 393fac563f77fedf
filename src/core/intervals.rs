//! Major-interval (tick) computation for axis grids.
//!
//! Produces a strictly increasing boundary sequence over an [`AxisRange`],
//! with clipped leading/trailing boundaries flagged as partial. Grid
//! rasterization draws lines only at full boundaries; partial entries exist
//! so callers can still close the grid against the range limits.

use serde::{Deserialize, Serialize};

use crate::core::range::AxisRange;

const TARGET_SPACING_PX: f64 = 64.0;
const MIN_TICKS: usize = 2;
const MAX_TICKS: usize = 12;
const STEP_EPSILON: f64 = 1e-9;

/// One interval boundary. `is_full` is false for a leading/trailing boundary
/// clipped to the range rather than sitting on a major step multiple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalTick {
    pub value: f64,
    pub is_full: bool,
}

/// Ordered tick sequence within an axis range. Produced fresh whenever axis
/// bounds or the dataset change; read-only thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intervals {
    range: AxisRange,
    ticks: Vec<IntervalTick>,
}

impl Intervals {
    /// Computes "nice" major intervals (1/2/5 x 10^k steps) sized so labels
    /// land roughly [`TARGET_SPACING_PX`] apart over `extent_px`.
    #[must_use]
    pub fn compute(range: AxisRange, extent_px: f64) -> Self {
        if range.is_degenerate() {
            return Self {
                range,
                ticks: vec![
                    IntervalTick {
                        value: range.min(),
                        is_full: false,
                    },
                    IntervalTick {
                        value: range.min() + 1.0,
                        is_full: false,
                    },
                ],
            };
        }

        if range.is_log() {
            return Self::compute_log(range);
        }

        let target_count = tick_target_count(extent_px);
        let step = nice_step(range.span(), target_count);
        let mut ticks = Vec::new();

        let first_full = (range.min() / step).ceil() * step;
        if first_full - range.min() > step * STEP_EPSILON {
            ticks.push(IntervalTick {
                value: range.min(),
                is_full: false,
            });
        }

        let mut value = first_full;
        while value <= range.max() + step * STEP_EPSILON {
            // Snap near-zero accumulation error so exact multiples compare clean.
            let snapped = (value / step).round() * step;
            ticks.push(IntervalTick {
                value: snapped.min(range.max()),
                is_full: true,
            });
            value += step;
        }

        let needs_trailing = ticks
            .last()
            .is_none_or(|tick| range.max() - tick.value > step * STEP_EPSILON);
        if needs_trailing {
            ticks.push(IntervalTick {
                value: range.max(),
                is_full: false,
            });
        }

        dedup_increasing(&mut ticks);
        Self { range, ticks }
    }

    /// Log ranges tick at powers of ten.
    fn compute_log(range: AxisRange) -> Self {
        let floor = crate::core::mapper::LOG_FLOOR;
        let lo = range.min().max(floor).log10();
        let hi = range.max().max(floor).log10();

        let mut ticks = Vec::new();
        let first_exp = lo.ceil();
        if first_exp - lo > STEP_EPSILON {
            ticks.push(IntervalTick {
                value: range.min(),
                is_full: false,
            });
        }

        let mut exp = first_exp;
        while exp <= hi + STEP_EPSILON {
            // powi keeps small powers of ten exact.
            ticks.push(IntervalTick {
                value: 10f64.powi(exp as i32).min(range.max()),
                is_full: true,
            });
            exp += 1.0;
        }

        if hi - (exp - 1.0) > STEP_EPSILON {
            ticks.push(IntervalTick {
                value: range.max(),
                is_full: false,
            });
        }

        dedup_increasing(&mut ticks);
        Self { range, ticks }
    }

    /// Synthetic `{0, 1}` span for the Bar3D depth axis.
    #[must_use]
    pub fn unit_span() -> Self {
        Self {
            range: AxisRange::unit(),
            ticks: vec![
                IntervalTick {
                    value: 0.0,
                    is_full: true,
                },
                IntervalTick {
                    value: 1.0,
                    is_full: true,
                },
            ],
        }
    }

    /// Discrete category boundaries `{0, 1, .., count}` for the Line3D depth
    /// axis: one slot per trace.
    #[must_use]
    pub fn categories(count: usize) -> Self {
        if count == 0 {
            return Self::unit_span();
        }
        let range = AxisRange::new(0.0, count as f64).unwrap_or(AxisRange::unit());
        let ticks = (0..=count)
            .map(|index| IntervalTick {
                value: index as f64,
                is_full: true,
            })
            .collect();
        Self { range, ticks }
    }

    #[must_use]
    pub fn range(&self) -> AxisRange {
        self.range
    }

    #[must_use]
    pub fn ticks(&self) -> &[IntervalTick] {
        &self.ticks
    }

    /// Values of full (non-partial) boundaries, in order.
    pub fn full_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.ticks
            .iter()
            .filter(|tick| tick.is_full)
            .map(|tick| tick.value)
    }
}

fn tick_target_count(extent_px: f64) -> usize {
    if !extent_px.is_finite() || extent_px <= 0.0 {
        return MIN_TICKS;
    }
    let raw = (extent_px / TARGET_SPACING_PX).floor() as usize + 1;
    raw.clamp(MIN_TICKS, MAX_TICKS)
}

fn nice_step(span: f64, target_count: usize) -> f64 {
    let raw_step = span / target_count.max(1) as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let factor = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

fn dedup_increasing(ticks: &mut Vec<IntervalTick>) {
    ticks.dedup_by(|next, prev| {
        if (next.value - prev.value).abs() <= STEP_EPSILON * prev.value.abs().max(1.0) {
            // A full boundary wins over a coincident partial one.
            prev.is_full |= next.is_full;
            true
        } else {
            false
        }
    });
}

#[cfg(test)]
mod tests {
    use super::Intervals;
    use crate::core::range::AxisRange;

    #[test]
    fn ticks_are_strictly_increasing() {
        let range = AxisRange::new(0.3, 97.4).expect("valid range");
        let intervals = Intervals::compute(range, 640.0);
        for pair in intervals.ticks().windows(2) {
            assert!(pair[0].value < pair[1].value);
        }
    }

    #[test]
    fn off_step_bounds_are_flagged_partial() {
        let range = AxisRange::new(0.7, 9.3).expect("valid range");
        let intervals = Intervals::compute(range, 400.0);
        let ticks = intervals.ticks();
        assert!(!ticks.first().expect("has ticks").is_full);
        assert!(!ticks.last().expect("has ticks").is_full);
        assert!(ticks[1..ticks.len() - 1].iter().all(|tick| tick.is_full));
    }

    #[test]
    fn on_step_bounds_are_full() {
        let range = AxisRange::new(0.0, 100.0).expect("valid range");
        let intervals = Intervals::compute(range, 500.0);
        let ticks = intervals.ticks();
        assert!(ticks.first().expect("has ticks").is_full);
        assert!(ticks.last().expect("has ticks").is_full);
    }

    #[test]
    fn degenerate_range_yields_two_partial_boundaries() {
        let range = AxisRange::new(4.0, 4.0).expect("valid range");
        let intervals = Intervals::compute(range, 300.0);
        assert_eq!(intervals.ticks().len(), 2);
        assert!(intervals.full_values().next().is_none());
    }

    #[test]
    fn log_range_ticks_at_powers_of_ten() {
        let range = AxisRange::log(1.0, 1000.0).expect("valid range");
        let intervals = Intervals::compute(range, 600.0);
        let full: Vec<f64> = intervals.full_values().collect();
        assert_eq!(full, vec![1.0, 10.0, 100.0, 1000.0]);
    }

    #[test]
    fn categories_cover_every_trace_slot() {
        let intervals = Intervals::categories(3);
        let full: Vec<f64> = intervals.full_values().collect();
        assert_eq!(full, vec![0.0, 1.0, 2.0, 3.0]);
    }
}
