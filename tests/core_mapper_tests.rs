use approx::assert_relative_eq;
use chart_scene3d::core::{AxisRange, map_axis_value, map_log_value, map_value, unmap_axis_value};

#[test]
fn mapper_round_trip_within_tolerance() {
    let mapped = map_value(42.5, 10.0, 110.0, 0.0, 1000.0);
    let recovered = map_value(mapped, 0.0, 1000.0, 10.0, 110.0);
    assert_relative_eq!(recovered, 42.5, epsilon = 1e-9);
}

#[test]
fn degenerate_source_range_never_panics_and_returns_sentinel() {
    // src_min == src_max is the documented degenerate case: dst_min comes back.
    assert_eq!(map_value(7.0, 3.0, 3.0, 100.0, 200.0), 100.0);
    assert_eq!(map_value(f64::NAN, 0.0, 1.0, 100.0, 200.0), 100.0);
    assert_eq!(map_value(1.0, f64::INFINITY, 2.0, 100.0, 200.0), 100.0);
}

#[test]
fn log_axis_degenerate_input_stays_finite() {
    // log10(0) is undefined; the mapper clamps instead of producing NaN.
    let mapped = map_log_value(0.0, 0.0, 100.0, 0.0, 480.0);
    assert!(mapped.is_finite());

    let range = AxisRange::log(0.0, 100.0).expect("valid range");
    assert!(map_axis_value(0.0, range, 0.0, 480.0).is_finite());
}

#[test]
fn axis_round_trip_honors_log_flag() {
    let linear = AxisRange::new(5.0, 50.0).expect("valid range");
    let mapped = map_axis_value(20.0, linear, 0.0, 300.0);
    let recovered = unmap_axis_value(mapped, linear, 0.0, 300.0);
    assert_relative_eq!(recovered, 20.0, epsilon = 1e-9);

    let log = AxisRange::log(1.0, 10_000.0).expect("valid range");
    let mapped = map_axis_value(250.0, log, 0.0, 300.0);
    let recovered = unmap_axis_value(mapped, log, 0.0, 300.0);
    assert_relative_eq!(recovered, 250.0, epsilon = 1e-6);
}

#[test]
fn inverted_destination_ranges_map_correctly() {
    // Display conversions flip Y; the mapper must handle dst_min > dst_max.
    let mapped = map_value(25.0, 0.0, 100.0, 600.0, 0.0);
    assert_eq!(mapped, 450.0);
}
