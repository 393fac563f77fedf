//! Delaunay triangulation over scattered samples, plus hull and edge paths.
//!
//! The mesh is built once per dataset snapshot and replaced wholesale on
//! data changes. Polar charts hand their samples through a synthetic XY
//! projection before they reach this module; the triangulator itself is
//! polar-agnostic.

use glam::{DVec2, DVec3};
use indexmap::{IndexMap, IndexSet};
use ordered_float::OrderedFloat;
use tracing::debug;

use crate::core::MinMax;
use crate::render::Path2D;

/// Inflation factor for the synthetic super-triangle enclosing all samples.
const SUPER_MARGIN: f64 = 20.0;

type XyKey = (OrderedFloat<f64>, OrderedFloat<f64>);

/// Triangulation of a sample set: shared vertices and index triples.
///
/// Invariant: every triangle's indices are distinct, in range, and wound
/// counter-clockwise in the XY plane.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Mesh with no vertices or triangles; the documented result for
    /// under-determined input.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bowyer-Watson Delaunay triangulation of `samples` over their XY
    /// coordinates. Non-finite samples are dropped and XY duplicates keep
    /// their first occurrence.
    ///
    /// Fewer than 3 distinct points (or a fully collinear set) cannot be
    /// triangulated: the result is an explicit empty mesh, never a panic.
    #[must_use]
    pub fn triangulate(samples: &[DVec3]) -> Self {
        let vertices = dedup_samples(samples);
        if vertices.len() < 3 {
            debug!(
                distinct = vertices.len(),
                "triangulation needs at least 3 distinct points"
            );
            return Self::empty();
        }

        let point_count = vertices.len();
        let mut points: Vec<DVec2> = vertices.iter().map(|v| DVec2::new(v.x, v.y)).collect();
        let super_base = points.len();
        points.extend(super_triangle(&points));

        let mut triangles: Vec<[usize; 3]> = vec![ccw(
            &points,
            [super_base, super_base + 1, super_base + 2],
        )];

        for index in 0..point_count {
            let point = points[index];

            let mut bad = Vec::new();
            for (t_index, triangle) in triangles.iter().enumerate() {
                if in_circumcircle(&points, *triangle, point) {
                    bad.push(t_index);
                }
            }

            // Boundary of the cavity: edges of bad triangles not shared by
            // two bad triangles.
            let mut edge_use: IndexMap<(usize, usize), usize> = IndexMap::new();
            for &t_index in &bad {
                let [a, b, c] = triangles[t_index];
                for edge in [(a, b), (b, c), (c, a)] {
                    let key = ordered_edge(edge.0, edge.1);
                    *edge_use.entry(key).or_insert(0) += 1;
                }
            }

            for &t_index in bad.iter().rev() {
                triangles.swap_remove(t_index);
            }

            for (&(a, b), &uses) in &edge_use {
                if uses == 1 {
                    triangles.push(ccw(&points, [a, b, index]));
                }
            }
        }

        let final_triangles: Vec<[u32; 3]> = triangles
            .into_iter()
            .filter(|triangle| triangle.iter().all(|&v| v < super_base))
            .map(|[a, b, c]| [a as u32, b as u32, c as u32])
            .collect();

        if final_triangles.is_empty() {
            debug!("triangulation produced no triangles (collinear input)");
            return Self::empty();
        }

        Self {
            vertices,
            triangles: final_triangles,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    #[must_use]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[must_use]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Corner positions of one triangle.
    #[must_use]
    pub fn triangle_points(&self, triangle: [u32; 3]) -> [DVec3; 3] {
        [
            self.vertices[triangle[0] as usize],
            self.vertices[triangle[1] as usize],
            self.vertices[triangle[2] as usize],
        ]
    }

    /// Z extent over all vertices; `None` for an empty mesh.
    #[must_use]
    pub fn z_range(&self) -> Option<MinMax> {
        if self.vertices.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for vertex in &self.vertices {
            min = min.min(vertex.z);
            max = max.max(vertex.z);
        }
        Some(MinMax::new(min, max))
    }

    /// Hull polygon bounding the sample domain, wound counter-clockwise and
    /// started at the lexicographically smallest vertex so repeated builds
    /// emit identical output. Empty for an empty mesh.
    #[must_use]
    pub fn hull(&self) -> Vec<DVec2> {
        if self.is_empty() {
            return Vec::new();
        }

        // CCW triangles traverse boundary edges exactly once, interior edges
        // twice in opposite directions; the unpaired directed edges form the
        // CCW hull loop.
        let mut directed: IndexSet<(u32, u32)> = IndexSet::new();
        for triangle in &self.triangles {
            let [a, b, c] = *triangle;
            for edge in [(a, b), (b, c), (c, a)] {
                directed.insert(edge);
            }
        }

        let mut successor: IndexMap<u32, u32> = IndexMap::new();
        for &(from, to) in &directed {
            if !directed.contains(&(to, from)) {
                successor.insert(from, to);
            }
        }

        let Some(start) = successor
            .keys()
            .copied()
            .min_by(|&a, &b| lexicographic(self.vertices[a as usize], self.vertices[b as usize]))
        else {
            return Vec::new();
        };

        let mut hull = Vec::with_capacity(successor.len());
        let mut current = start;
        loop {
            hull.push(DVec2::new(
                self.vertices[current as usize].x,
                self.vertices[current as usize].y,
            ));
            let Some(&next) = successor.get(&current) else {
                break;
            };
            if next == start || hull.len() > successor.len() {
                break;
            }
            current = next;
        }
        hull
    }

    /// Debug overlay path of every triangle edge, each drawn once.
    #[must_use]
    pub fn edge_path(&self) -> Path2D {
        let mut seen: IndexSet<(u32, u32)> = IndexSet::new();
        let mut path = Path2D::new();
        for triangle in &self.triangles {
            let [a, b, c] = *triangle;
            for (from, to) in [(a, b), (b, c), (c, a)] {
                let key = (from.min(to), from.max(to));
                if seen.insert(key) {
                    let p0 = self.vertices[from as usize];
                    let p1 = self.vertices[to as usize];
                    path.segment(DVec2::new(p0.x, p0.y), DVec2::new(p1.x, p1.y));
                }
            }
        }
        path
    }
}

fn dedup_samples(samples: &[DVec3]) -> Vec<DVec3> {
    let mut seen: IndexMap<XyKey, ()> = IndexMap::with_capacity(samples.len());
    let mut vertices = Vec::with_capacity(samples.len());
    for &sample in samples {
        if !sample.x.is_finite() || !sample.y.is_finite() || !sample.z.is_finite() {
            continue;
        }
        let key = (OrderedFloat(sample.x), OrderedFloat(sample.y));
        if seen.insert(key, ()).is_none() {
            vertices.push(sample);
        }
    }
    vertices
}

/// Three synthetic vertices enclosing every sample with a wide margin.
fn super_triangle(points: &[DVec2]) -> [DVec2; 3] {
    let mut min = DVec2::splat(f64::INFINITY);
    let mut max = DVec2::splat(f64::NEG_INFINITY);
    for point in points {
        min = min.min(*point);
        max = max.max(*point);
    }
    let center = (min + max) * 0.5;
    let radius = (max - min).max_element().max(1.0) * SUPER_MARGIN;
    [
        DVec2::new(center.x - 2.0 * radius, center.y - radius),
        DVec2::new(center.x + 2.0 * radius, center.y - radius),
        DVec2::new(center.x, center.y + 2.0 * radius),
    ]
}

fn ordered_edge(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Reorders a triangle counter-clockwise in the XY plane.
fn ccw(points: &[DVec2], triangle: [usize; 3]) -> [usize; 3] {
    let [a, b, c] = triangle;
    if orient(points[a], points[b], points[c]) < 0.0 {
        [a, c, b]
    } else {
        triangle
    }
}

/// Twice the signed area of (a, b, c); positive for counter-clockwise.
fn orient(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Circumcircle containment test for a CCW triangle.
fn in_circumcircle(points: &[DVec2], triangle: [usize; 3], point: DVec2) -> bool {
    let a = points[triangle[0]] - point;
    let b = points[triangle[1]] - point;
    let c = points[triangle[2]] - point;

    let det = (a.x * a.x + a.y * a.y) * (b.x * c.y - c.x * b.y)
        - (b.x * b.x + b.y * b.y) * (a.x * c.y - c.x * a.y)
        + (c.x * c.x + c.y * c.y) * (a.x * b.y - b.x * a.y);
    det > 0.0
}

fn lexicographic(a: DVec3, b: DVec3) -> std::cmp::Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}
