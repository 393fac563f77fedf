use chart_scene3d::contour::{ContourEngine, ContourStyle};
use chart_scene3d::core::{AxisRange, Viewport};
use chart_scene3d::error::SceneError;
use glam::DVec3;

fn slope_samples() -> Vec<DVec3> {
    let mut samples = Vec::new();
    for i in 0..6 {
        for j in 0..6 {
            let x = f64::from(i);
            let y = f64::from(j);
            samples.push(DVec3::new(x, y, x * 10.0 + y));
        }
    }
    samples
}

#[test]
fn data_tier_survives_display_invalidation() {
    let mut engine = ContourEngine::new(ContourStyle::default());
    engine.set_samples(slope_samples());

    let shapes_before = engine.data_shapes().to_vec();
    engine.invalidate_display();
    let shapes_after = engine.data_shapes().to_vec();

    assert_eq!(shapes_before, shapes_after);
}

#[test]
fn display_tier_rebuilds_after_invalidation() {
    let mut engine = ContourEngine::new(ContourStyle::default());
    engine.set_samples(slope_samples());

    let x_range = AxisRange::new(0.0, 5.0).expect("valid range");
    let y_range = AxisRange::new(0.0, 5.0).expect("valid range");
    let first = engine
        .display_shapes(x_range, y_range, Viewport::new(500, 500))
        .expect("display shapes")
        .to_vec();

    // The display tier caches; without invalidation a different viewport
    // argument is not observed (push-based invalidation, no dirty checking).
    let cached = engine
        .display_shapes(x_range, y_range, Viewport::new(1000, 1000))
        .expect("display shapes")
        .to_vec();
    assert_eq!(first, cached);

    engine.invalidate_display();
    let rebuilt = engine
        .display_shapes(x_range, y_range, Viewport::new(1000, 1000))
        .expect("display shapes")
        .to_vec();
    assert_ne!(first, rebuilt);
}

#[test]
fn new_samples_drop_both_tiers() {
    let mut engine = ContourEngine::new(ContourStyle::default());
    engine.set_samples(slope_samples());
    let z_before = engine.z_range();

    engine.set_samples(vec![
        DVec3::new(0.0, 0.0, 100.0),
        DVec3::new(1.0, 0.0, 200.0),
        DVec3::new(0.0, 1.0, 300.0),
    ]);
    let z_after = engine.z_range();

    assert_ne!(z_before, z_after);
    assert_eq!(z_after.min, 100.0);
    assert_eq!(z_after.max, 300.0);
}

#[test]
fn level_count_change_keeps_the_mesh_but_redoes_bands() {
    let mut engine = ContourEngine::new(ContourStyle::default());
    engine.set_samples(slope_samples());

    let triangle_count = engine.mesh().triangles().len();
    assert_eq!(engine.data_shapes().len(), 8);

    engine.set_level_count(16);
    assert_eq!(engine.data_shapes().len(), 16);
    assert_eq!(engine.mesh().triangles().len(), triangle_count);
}

#[test]
fn out_of_range_level_index_fails_fast() {
    let mut engine = ContourEngine::new(ContourStyle::default());
    engine.set_samples(slope_samples());

    assert!(engine.data_shape(7).is_ok());
    let error = engine.data_shape(8).expect_err("stale level index");
    assert!(matches!(
        error,
        SceneError::LevelOutOfRange { index: 8, count: 8 }
    ));
}

#[test]
fn empty_dataset_yields_empty_products_without_errors() {
    let mut engine = ContourEngine::new(ContourStyle::default());
    engine.set_samples(Vec::new());

    assert!(engine.mesh().is_empty());
    assert!(engine.hull_path().is_empty());
    assert!(engine.mesh_path().is_empty());
    for shape in engine.data_shapes() {
        assert!(shape.is_empty());
    }
}

#[test]
fn contour_ranges_follow_the_dataset_z_extent() {
    let mut engine = ContourEngine::new(ContourStyle::default());
    engine.set_samples(slope_samples());

    let ranges = engine.ranges();
    assert_eq!(ranges.len(), 8);
    assert_eq!(ranges[0].min, 0.0);
    assert_eq!(ranges[7].max, 55.0);
}
