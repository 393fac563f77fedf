use chart_scene3d::contour::Mesh;
use glam::DVec3;

fn grid_samples(columns: u32, rows: u32) -> Vec<DVec3> {
    let mut samples = Vec::new();
    for i in 0..columns {
        for j in 0..rows {
            let x = f64::from(i);
            let y = f64::from(j);
            samples.push(DVec3::new(x, y, (x * x + y * y).sqrt()));
        }
    }
    samples
}

#[test]
fn single_and_two_point_datasets_triangulate_to_empty() {
    assert!(Mesh::triangulate(&[DVec3::new(1.0, 2.0, 3.0)]).is_empty());
    assert!(
        Mesh::triangulate(&[DVec3::new(1.0, 2.0, 3.0), DVec3::new(4.0, 5.0, 6.0)]).is_empty()
    );
}

#[test]
fn grid_triangle_count_matches_the_euler_relation() {
    // For any valid triangulation of a point set with all points used,
    // T = 2n - h - 2 where h is the hull point count.
    let mesh = Mesh::triangulate(&grid_samples(5, 4));
    let n = mesh.vertices().len();
    let h = mesh.hull().len();
    assert_eq!(n, 20);
    assert_eq!(h, 14);
    assert_eq!(mesh.triangles().len(), 2 * n - h - 2);
}

#[test]
fn triangulation_covers_the_sample_domain_without_bad_indices() {
    let mesh = Mesh::triangulate(&grid_samples(6, 6));
    let vertex_count = mesh.vertices().len() as u32;
    for triangle in mesh.triangles() {
        assert!(triangle[0] != triangle[1]);
        assert!(triangle[1] != triangle[2]);
        assert!(triangle[0] != triangle[2]);
        assert!(triangle.iter().all(|&index| index < vertex_count));
    }
}

#[test]
fn triangles_are_wound_counter_clockwise() {
    let mesh = Mesh::triangulate(&grid_samples(4, 4));
    for triangle in mesh.triangles() {
        let [a, b, c] = mesh.triangle_points(*triangle);
        let signed = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
        assert!(signed > 0.0);
    }
}

#[test]
fn hull_is_deterministic_across_rebuilds() {
    let samples = grid_samples(5, 5);
    let first = Mesh::triangulate(&samples).hull();
    let second = Mesh::triangulate(&samples).hull();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn scattered_cloud_z_range_spans_the_samples() {
    let samples = vec![
        DVec3::new(0.0, 0.0, -3.0),
        DVec3::new(4.0, 1.0, 7.5),
        DVec3::new(2.0, 5.0, 1.0),
        DVec3::new(6.0, 4.0, 0.0),
    ];
    let mesh = Mesh::triangulate(&samples);
    let z = mesh.z_range().expect("non-empty mesh");
    assert_eq!(z.min, -3.0);
    assert_eq!(z.max, 7.5);
}

#[test]
fn edge_path_draws_each_edge_once() {
    let mesh = Mesh::triangulate(&grid_samples(3, 3));
    // Euler: E = 3T/2 + h/2 for a triangulated planar region.
    let t = mesh.triangles().len();
    let h = mesh.hull().len();
    let expected_edges = (3 * t + h) / 2;
    assert_eq!(mesh.edge_path().segment_count(), expected_edges);
}

#[test]
fn non_finite_samples_are_dropped_before_triangulation() {
    let samples = vec![
        DVec3::new(f64::NAN, 0.0, 1.0),
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(1.0, 0.0, 2.0),
        DVec3::new(0.0, 1.0, 3.0),
    ];
    let mesh = Mesh::triangulate(&samples);
    assert_eq!(mesh.vertices().len(), 3);
    assert_eq!(mesh.triangles().len(), 1);
}
