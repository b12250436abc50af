use cgmath::{Deg, Matrix2, Vector2};

use super::Shape;

pub fn translate(shape: &mut Shape, delta_x: f32, delta_y: f32) {
    for pair in shape.vertices.chunks_exact_mut(2) {
        pair[0] += delta_x;
        pair[1] += delta_y;
    }
}

/// Rotates every vertex counter-clockwise by `angle` degrees about `(center_x, center_y)`.
pub fn rotate(shape: &mut Shape, angle: f32, center_x: f32, center_y: f32) {
    let rotation = Matrix2::from_angle(Deg(angle));

    for pair in shape.vertices.chunks_exact_mut(2) {
        let rotated = rotation * Vector2::new(pair[0] - center_x, pair[1] - center_y);

        pair[0] = rotated.x + center_x;
        pair[1] = rotated.y + center_y;
    }
}

/// Rotates about the last vertex of the shape.
///
/// The fan factories append their centre last, so for polygons and stars this
/// spins the shape in place. Any other shape turns around whatever vertex
/// happens to be last, e.g. the bottom right corner of a rectangle.
pub fn rotate_about_last(shape: &mut Shape, angle: f32) {
    if let Some((x, y)) = shape.last_vertex() {
        rotate(shape, angle, x, y);
    }
}

/// Cuts the last `count` wedges out of a fan.
///
/// The rim vertices behind the removed wedges are dropped, which shifts the
/// centre down to index `keep`. Indices are clamped so they keep pointing at
/// it; the last kept wedge collapses onto the centre. Asking for more wedges
/// than the shape has leaves it untouched.
pub fn remove_sides(shape: &mut Shape, count: u32) {
    let count = count as usize;

    if 3 * count > shape.indices.len() {
        return;
    }

    let keep = shape.triangle_count() - count;

    shape.vertices.drain(2 * keep..2 * (keep + count));
    shape.indices.truncate(3 * keep);

    let keep = keep as u32;
    for index in &mut shape.indices {
        *index = (*index).min(keep);
    }
}
