use chart_scene3d::core::{AxisKind, AxisRange, ChartKind, Intervals, Viewport};
use chart_scene3d::scene::{
    AspectProvider, AspectRatios, AxisBoxBuilder, AxisIntervals, Side, compute_dimensions,
};

fn standard_intervals() -> AxisIntervals {
    let x = AxisRange::new(0.0, 10.0).expect("valid range");
    let y = AxisRange::new(0.0, 5.0).expect("valid range");
    let z = AxisRange::new(0.0, 80.0).expect("valid range");
    AxisIntervals::new(
        Intervals::compute(x, 600.0),
        Intervals::compute(y, 400.0),
        Intervals::compute(z, 480.0),
    )
}

fn forward_intervals() -> AxisIntervals {
    let x = AxisRange::new(0.0, 10.0).expect("valid range");
    let y = AxisRange::new(0.0, 5.0).expect("valid range");
    AxisIntervals::new(
        Intervals::compute(x, 600.0),
        Intervals::compute(y, 400.0),
        Intervals::unit_span(),
    )
}

#[test]
fn dimensions_follow_the_aspect_contract() {
    let viewport = Viewport::new(800, 600);
    let aspects = AspectRatios {
        x: 1.2,
        y: 0.9,
        z: 0.5,
    };
    let dims = compute_dimensions(viewport, &aspects).expect("dimensions");

    // All extents hang off the Y-derived scale factor.
    assert!((dims.height - 0.9 * 600.0).abs() <= 1e-9);
    assert!((dims.width / dims.height - 1.2 / 0.9).abs() <= 1e-9);
    assert!((dims.depth / dims.height - 0.5 / 0.9).abs() <= 1e-9);
}

#[test]
fn invalid_viewport_is_rejected() {
    let aspects = AspectRatios::default();
    assert!(compute_dimensions(Viewport::new(0, 600), &aspects).is_err());
}

#[test]
fn non_positive_aspect_is_rejected() {
    struct BrokenAspects;
    impl AspectProvider for BrokenAspects {
        fn aspect(&self, axis: AxisKind, _w: f64, _h: f64) -> f64 {
            match axis {
                AxisKind::Y => 0.0,
                _ => 1.0,
            }
        }
    }
    assert!(compute_dimensions(Viewport::new(800, 600), &BrokenAspects).is_err());
}

#[test]
fn box_always_has_six_faces_with_canonical_normals() {
    let aspects = AspectRatios::default();
    let viewport = Viewport::new(800, 600);

    for (chart_kind, intervals) in [
        (ChartKind::Contour3d, standard_intervals()),
        (ChartKind::Bar3d, forward_intervals()),
        (ChartKind::Line3d, forward_intervals()),
    ] {
        let shape = AxisBoxBuilder::new(chart_kind, viewport, &aspects, &intervals)
            .build()
            .expect("box build");

        assert_eq!(shape.faces().len(), 6);
        for face in shape.faces() {
            let normal = face.computed_normal();
            let expected = face.side.outward_normal();
            assert!(
                normal.dot(expected) > 1.0 - 1e-9,
                "face {:?} normal {:?} disagrees with canonical {:?}",
                face.side,
                normal,
                expected
            );
        }
    }
}

#[test]
fn bounds_span_origin_to_dimensions() {
    let aspects = AspectRatios::default();
    let viewport = Viewport::new(800, 600);
    let intervals = standard_intervals();
    let shape = AxisBoxBuilder::new(ChartKind::Contour3d, viewport, &aspects, &intervals)
        .build()
        .expect("box build");

    let bounds = shape.bounds();
    assert_eq!(bounds.min.x, 0.0);
    assert_eq!(bounds.min.y, 0.0);
    assert_eq!(bounds.min.z, 0.0);
    assert_eq!(bounds.max, shape.dimensions().as_vec());
}

#[test]
fn every_face_carries_grid_lines_for_full_intervals() {
    let aspects = AspectRatios::default();
    let viewport = Viewport::new(800, 600);
    let intervals = standard_intervals();
    let shape = AxisBoxBuilder::new(ChartKind::Contour3d, viewport, &aspects, &intervals)
        .build()
        .expect("box build");

    for face in shape.faces() {
        assert!(
            face.grid.segment_count() >= 2,
            "face {:?} has an empty grid",
            face.side
        );
    }
}

#[test]
fn grid_segments_lift_into_the_face_plane() {
    let aspects = AspectRatios::default();
    let viewport = Viewport::new(800, 600);
    let intervals = forward_intervals();
    let shape = AxisBoxBuilder::new(ChartKind::Bar3d, viewport, &aspects, &intervals)
        .build()
        .expect("box build");

    // Front face lives at z == 0; every lifted grid point must stay there.
    for (from, to) in shape.grid_segments(Side::Front) {
        assert_eq!(from.z, 0.0);
        assert_eq!(to.z, 0.0);
    }
    // Back face lives at z == depth.
    let depth = shape.dimensions().depth;
    for (from, to) in shape.grid_segments(Side::Back) {
        assert!((from.z - depth).abs() <= 1e-9);
        assert!((to.z - depth).abs() <= 1e-9);
    }
}

#[test]
fn bar_depth_grid_uses_the_synthetic_unit_span() {
    let aspects = AspectRatios::default();
    let viewport = Viewport::new(800, 600);
    let intervals = forward_intervals();
    let shape = AxisBoxBuilder::new(ChartKind::Bar3d, viewport, &aspects, &intervals)
        .build()
        .expect("box build");

    // The left face renders the synthetic depth axis horizontally; its two
    // boundaries land at u = 0 and u = depth.
    let segments = shape.grid_segments(Side::Left);
    assert!(
        segments
            .iter()
            .any(|(from, _)| from.z.abs() <= 1e-9)
    );
    let depth = shape.dimensions().depth;
    assert!(
        segments
            .iter()
            .any(|(from, _)| (from.z - depth).abs() <= 1e-9)
    );
}
