//! Contour band colors and back-to-front paint ordering.

use crate::contour::isolines::Polygon;
use crate::render::Color;

/// Fixed 16-stop reference ramp for contour fills, cold to hot.
pub const CONTOUR_RAMP: [Color; 16] = [
    Color::from_rgb8(0x1A, 0x23, 0x7E),
    Color::from_rgb8(0x28, 0x35, 0x93),
    Color::from_rgb8(0x15, 0x65, 0xC0),
    Color::from_rgb8(0x02, 0x88, 0xD1),
    Color::from_rgb8(0x00, 0xAC, 0xC1),
    Color::from_rgb8(0x26, 0xA6, 0x9A),
    Color::from_rgb8(0x43, 0xA0, 0x47),
    Color::from_rgb8(0x7C, 0xB3, 0x42),
    Color::from_rgb8(0xC0, 0xCA, 0x33),
    Color::from_rgb8(0xFD, 0xD8, 0x35),
    Color::from_rgb8(0xFF, 0xB3, 0x00),
    Color::from_rgb8(0xFB, 0x8C, 0x00),
    Color::from_rgb8(0xF4, 0x51, 0x1E),
    Color::from_rgb8(0xE5, 0x39, 0x35),
    Color::from_rgb8(0xC6, 0x28, 0x28),
    Color::from_rgb8(0x8E, 0x00, 0x00),
];

/// Samples the ramp's piecewise-linear gradient at `t` in [0, 1].
#[must_use]
pub fn ramp_color_at(t: f64) -> Color {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (CONTOUR_RAMP.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(CONTOUR_RAMP.len() - 2);
    CONTOUR_RAMP[lower].lerp(CONTOUR_RAMP[lower + 1], scaled - lower as f64)
}

/// Exactly `level_count` discrete colors, pre-quantized by evaluating the
/// gradient at `index / (level_count - 1)` per level. Quantizing up front
/// keeps every band's color crisp and reproducible even for large counts;
/// a single level samples the ramp start.
#[must_use]
pub fn contour_colors(level_count: usize) -> Vec<Color> {
    match level_count {
        0 => Vec::new(),
        1 => vec![ramp_color_at(0.0)],
        _ => (0..level_count)
            .map(|index| ramp_color_at(index as f64 / (level_count - 1) as f64))
            .collect(),
    }
}

/// Back-to-front paint order for nested contour bands.
///
/// The band with the largest bounding-box area paints first (it is usually
/// the outermost/background region); remaining bands alternate outward from
/// it by increasing index distance. Area ties resolve to the lowest index.
#[must_use]
pub fn paint_order(polygons: &[Polygon]) -> Vec<usize> {
    let areas: Vec<f64> = polygons.iter().map(Polygon::bbox_area).collect();
    paint_order_by_area(&areas)
}

fn paint_order_by_area(areas: &[f64]) -> Vec<usize> {
    let count = areas.len();
    if count == 0 {
        return Vec::new();
    }

    let mut largest = 0;
    for (index, &area) in areas.iter().enumerate() {
        if area > areas[largest] {
            largest = index;
        }
    }

    let mut order = Vec::with_capacity(count);
    order.push(largest);
    let mut distance = 1;
    while order.len() < count {
        if largest >= distance {
            order.push(largest - distance);
        }
        if largest + distance < count {
            order.push(largest + distance);
        }
        distance += 1;
    }
    order
}
