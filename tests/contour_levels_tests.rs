use chart_scene3d::contour::{
    CONTOUR_RAMP, ContourEngine, ContourStyle, contour_colors, contour_ranges, paint_order,
};
use chart_scene3d::core::MinMax;
use glam::DVec3;

fn ridge_samples() -> Vec<DVec3> {
    // A peak at the grid center: nested contour bands.
    let mut samples = Vec::new();
    for i in 0..9 {
        for j in 0..9 {
            let x = f64::from(i);
            let y = f64::from(j);
            let distance = ((x - 4.0).powi(2) + (y - 4.0).powi(2)).sqrt();
            samples.push(DVec3::new(x, y, 80.0 - distance * 10.0));
        }
    }
    samples
}

#[test]
fn eight_levels_on_zero_to_eighty_partition_into_tens() {
    let ranges = contour_ranges(MinMax::new(0.0, 80.0), 8);
    assert_eq!(ranges.len(), 8);
    let expected: Vec<(f64, f64)> = (0..8)
        .map(|i| (f64::from(i) * 10.0, f64::from(i + 1) * 10.0))
        .collect();
    for (range, (lo, hi)) in ranges.iter().zip(expected) {
        assert_eq!(range.min, lo);
        assert_eq!(range.max, hi);
    }
}

#[test]
fn level_partition_is_exact_for_any_count() {
    for count in [1usize, 4, 8, 16, 32, 64] {
        let z = MinMax::new(-12.5, 37.5);
        let ranges = contour_ranges(z, count);
        assert_eq!(ranges.len(), count);
        let span = z.span();
        for (i, range) in ranges.iter().enumerate() {
            let expected = z.min + i as f64 * span / count as f64;
            assert!((range.min - expected).abs() <= 1e-9);
        }
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].max, pair[1].min);
        }
        assert_eq!(ranges.last().expect("non-empty").max, z.max);
    }
}

#[test]
fn colors_are_discrete_and_match_the_level_count() {
    for count in [4usize, 8, 16, 32, 64] {
        let colors = contour_colors(count);
        assert_eq!(colors.len(), count);
        // Endpoints pin to the ramp's first and last stops.
        assert_eq!(colors[0], CONTOUR_RAMP[0]);
        assert_eq!(colors[count - 1], CONTOUR_RAMP[CONTOUR_RAMP.len() - 1]);
    }
}

#[test]
fn engine_paint_order_is_a_permutation_with_max_area_first() {
    let mut engine = ContourEngine::new(ContourStyle::default());
    engine.set_samples(ridge_samples());

    let shapes = engine.data_shapes().to_vec();
    let order = engine.paint_order().to_vec();

    assert_eq!(order.len(), 8);
    let mut sorted = order.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..8).collect::<Vec<_>>());

    let first_area = shapes[order[0]].bbox_area();
    for shape in &shapes {
        assert!(shape.bbox_area() <= first_area + 1e-9);
    }
}

#[test]
fn nested_peak_bands_shrink_with_level() {
    let mut engine = ContourEngine::new(ContourStyle::default());
    engine.set_samples(ridge_samples());

    let shapes = engine.data_shapes();
    // The lowest band covers the whole domain; the highest hugs the peak.
    let lowest = shapes[0].bbox_area();
    let highest = shapes[7].bbox_area();
    assert!(lowest > 0.0);
    assert!(highest > 0.0);
    assert!(highest < lowest);
}

#[test]
fn paint_order_on_empty_polygon_set_is_empty() {
    assert!(paint_order(&[]).is_empty());
}
