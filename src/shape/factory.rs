use std::f32::consts::TAU;

use super::Shape;

const SPIRAL_STEPS_PER_LOOP: u32 = 64;

/// Equilateral triangle centred at `(x, y)` with its first vertex at angle 0.
pub fn make_triangle(radius: f32, x: f32, y: f32) -> Shape {
    let slice = TAU / 3.0;

    let vertices = (0..3)
        .flat_map(|i| {
            let angle = i as f32 * slice;
            [radius * angle.cos() + x, radius * angle.sin() + y]
        })
        .collect();

    Shape::new(vertices, vec![0, 1, 2])
}

/// Axis-aligned rectangle with its bottom left corner at the origin.
#[rustfmt::skip]
pub fn make_rectangle(width: f32, height: f32) -> Shape {
    let vertices = vec![
        0.0, 0.0,       // bottom left
        0.0, height,    // top left
        width, height,  // top right
        width, 0.0,     // bottom right
    ];

    Shape::new(vertices, vec![0, 1, 3, 1, 2, 3])
}

/// Regular polygon triangulated as a fan around a centre vertex.
///
/// The centre is appended after the `sides` rim vertices, so it always has
/// index `sides`. [`rotate_about_last`](super::rotate_about_last) relies on that.
pub fn make_polygon(radius: f32, sides: u32, x: f32, y: f32) -> Shape {
    fan(sides, x, y, |_| radius)
}

/// Star with `points` tips. Rim vertices alternate between full and half
/// radius, centre vertex last.
pub fn make_star(radius: f32, points: u32, x: f32, y: f32) -> Shape {
    fan(points * 2, x, y, |i| if i % 2 == 0 { radius } else { radius * 0.5 })
}

/// Archimedean spiral as a bare line strip, 64 vertices per loop.
///
/// Radius grows from zero in equal steps and stops one step short of `radius`.
pub fn make_spiral(radius: f32, loops: u32, x: f32, y: f32) -> Vec<f32> {
    let steps = SPIRAL_STEPS_PER_LOOP * loops;

    if steps == 0 {
        return Vec::new();
    }

    let slice = TAU / SPIRAL_STEPS_PER_LOOP as f32;
    let radius_step = radius / steps as f32;

    (0..steps)
        .flat_map(|i| {
            let angle = i as f32 * slice;
            let r = i as f32 * radius_step;
            [r * angle.cos() + x, r * angle.sin() + y]
        })
        .collect()
}

fn fan(rim: u32, x: f32, y: f32, radius_at: impl Fn(u32) -> f32) -> Shape {
    let slice = TAU / rim as f32;

    let mut vertices = Vec::with_capacity(rim as usize * 2 + 2);
    let mut indices = Vec::with_capacity(rim as usize * 3);

    for i in 0..rim {
        let angle = i as f32 * slice;
        let radius = radius_at(i);

        vertices.push(radius * angle.cos() + x);
        vertices.push(radius * angle.sin() + y);

        indices.extend_from_slice(&[i, (i + 1) % rim, rim]);
    }

    vertices.push(x);
    vertices.push(y);

    Shape::new(vertices, indices)
}
