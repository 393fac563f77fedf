//! Linear and log mapping between data-space scalars and box-space scalars.
//!
//! Every higher component maps through these functions so degenerate-range
//! behavior is decided exactly once. The functions are pure and total: a
//! degenerate or non-finite source never panics and never produces NaN —
//! the documented sentinel is `dst_min`.

use crate::core::range::AxisRange;

/// Smallest value fed into `log10`; non-positive inputs clamp here so
/// `log10(0)` can never reach the interpolation.
pub const LOG_FLOOR: f64 = 1e-12;

/// Linear interpolation of `value` from `[src_min, src_max]` into
/// `[dst_min, dst_max]`.
///
/// Returns `dst_min` when the source range is degenerate
/// (`src_min == src_max`) or any input is non-finite.
#[must_use]
pub fn map_value(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    if !value.is_finite()
        || !src_min.is_finite()
        || !src_max.is_finite()
        || !dst_min.is_finite()
        || !dst_max.is_finite()
        || src_min == src_max
    {
        return dst_min;
    }

    let normalized = (value - src_min) / (src_max - src_min);
    dst_min + normalized * (dst_max - dst_min)
}

/// Log-axis variant: inputs pass through `log10` (clamped to [`LOG_FLOOR`])
/// before the linear mapping.
#[must_use]
pub fn map_log_value(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    map_value(
        log10_clamped(value),
        log10_clamped(src_min),
        log10_clamped(src_max),
        dst_min,
        dst_max,
    )
}

/// Maps a data value along `range` into `[dst_min, dst_max]`, honoring the
/// range's log flag.
#[must_use]
pub fn map_axis_value(value: f64, range: AxisRange, dst_min: f64, dst_max: f64) -> f64 {
    if range.is_log() {
        map_log_value(value, range.min(), range.max(), dst_min, dst_max)
    } else {
        map_value(value, range.min(), range.max(), dst_min, dst_max)
    }
}

/// Inverse of [`map_axis_value`]: maps a box-space scalar back into data space.
#[must_use]
pub fn unmap_axis_value(mapped: f64, range: AxisRange, dst_min: f64, dst_max: f64) -> f64 {
    if range.is_log() {
        let exponent = map_value(
            mapped,
            dst_min,
            dst_max,
            log10_clamped(range.min()),
            log10_clamped(range.max()),
        );
        10f64.powf(exponent)
    } else {
        map_value(mapped, dst_min, dst_max, range.min(), range.max())
    }
}

fn log10_clamped(value: f64) -> f64 {
    if !value.is_finite() {
        return LOG_FLOOR.log10();
    }
    value.max(LOG_FLOOR).log10()
}
