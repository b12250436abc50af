//! Built-in scenes recreating the classic shape exercises.

use glhelper::shape::{
    group, make_polygon, make_rectangle, make_spiral, make_star, make_triangle, remove_sides,
    rotate, translate,
};
use glhelper::Shape;

use crate::scene::{DrawMode, Drawable, Scene, Viewport, DEFAULT_SHAPE_COLOR};

/// Sprite grid unit.
const PIXEL: f32 = 0.08;

/// Interleaved `x, y, r, g, b`.
#[rustfmt::skip]
const COLORED_POINTS: [f32; 15] = [
     0.0,  0.6, 0.99, 0.03, 0.0,
    -0.6, -0.5, 0.44, 0.69, 0.30,
     0.6, -0.3, 0.36, 0.62, 0.82,
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Builtin {
    Stretched,
    ColoredPoints,
    Triangle,
    TinyTriangle,
    Triangles,
    Quad,
    Circle,
    Octagon,
    Pentagon,
    Pacman,
    Pizza,
    Star,
    Spiral,
    Sprite,
}

impl Builtin {
    /// Gallery order.
    pub const ALL: [Builtin; 14] = [
        Builtin::Stretched,
        Builtin::ColoredPoints,
        Builtin::Triangle,
        Builtin::TinyTriangle,
        Builtin::Triangles,
        Builtin::Quad,
        Builtin::Circle,
        Builtin::Octagon,
        Builtin::Pentagon,
        Builtin::Pacman,
        Builtin::Pizza,
        Builtin::Star,
        Builtin::Spiral,
        Builtin::Sprite,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Stretched => "stretched",
            Builtin::ColoredPoints => "colored-points",
            Builtin::Triangle => "triangle",
            Builtin::TinyTriangle => "tiny-triangle",
            Builtin::Triangles => "triangles",
            Builtin::Quad => "quad",
            Builtin::Circle => "circle",
            Builtin::Octagon => "octagon",
            Builtin::Pentagon => "pentagon",
            Builtin::Pacman => "pacman",
            Builtin::Pizza => "pizza",
            Builtin::Star => "star",
            Builtin::Spiral => "spiral",
            Builtin::Sprite => "sprite",
        }
    }

    pub fn build(&self) -> Scene {
        match self {
            Builtin::Stretched => stretched(),
            Builtin::ColoredPoints => Scene::new(self.name())
                .with_point_size(16.0)
                .push(Drawable::colored(COLORED_POINTS.to_vec())),
            Builtin::Triangle => single(self, make_triangle(0.5, 0.0, 0.0))
                .with_projection([-1.0, 1.0, -1.0, 1.0]),
            // same triangle, but the projection is ten times wider
            Builtin::TinyTriangle => single(self, make_triangle(0.5, 0.0, 0.0))
                .with_projection([-10.0, 10.0, -10.0, 10.0]),
            Builtin::Triangles => triangles(),
            Builtin::Quad => quad(),
            Builtin::Circle => single(self, make_polygon(0.5, 60, 0.0, 0.0)),
            Builtin::Octagon => single(self, make_polygon(0.5, 8, 0.0, 0.0)),
            Builtin::Pentagon => single(self, make_polygon(0.5, 5, 0.0, 0.0)),
            Builtin::Pacman => {
                let mut pacman = make_polygon(0.5, 60, 0.0, 0.0);
                remove_sides(&mut pacman, 10);
                single(self, pacman)
            }
            Builtin::Pizza => {
                let mut pizza = make_polygon(1.0, 60, -0.5, -0.25);
                remove_sides(&mut pizza, 50);
                single(self, pizza)
            }
            Builtin::Star => single(self, make_star(0.5, 5, 0.0, 0.0)),
            Builtin::Spiral => Scene::new(self.name()).push(Drawable::strip(
                make_spiral(0.75, 3, 0.0, 0.0),
                DEFAULT_SHAPE_COLOR,
            )),
            Builtin::Sprite => sprite(),
        }
    }
}

/// Hand-placed triangle filling the whole window, aspect ratio ignored.
fn stretched() -> Scene {
    let triangle = Shape::new(vec![-0.5, -0.5, 0.5, -0.5, 0.0, 0.5], vec![0, 1, 2]);

    let mut scene = Scene::new(Builtin::Stretched.name())
        .with_viewport(Viewport::Stretch)
        .push(Drawable::fill(triangle, [1.0, 0.5, 0.2]));
    scene.clear_color = [1.0, 1.0, 0.0];

    scene
}

fn single(builtin: &Builtin, shape: Shape) -> Scene {
    Scene::new(builtin.name()).push(Drawable::fill(shape, DEFAULT_SHAPE_COLOR))
}

/// A bow tie drawn three times: as points, filled and as a wireframe.
fn triangles() -> Scene {
    let middle = {
        let left = make_triangle(0.3, -0.5, 0.0);
        let mut right = make_triangle(0.3, 0.5, 0.0);
        rotate(&mut right, 180.0, 0.5, 0.0);
        group(&[&left, &right])
    };

    let mut top = middle.clone();
    translate(&mut top, 0.0, 0.6);
    let mut bottom = middle.clone();
    translate(&mut bottom, 0.0, -0.6);

    Scene::new(Builtin::Triangles.name())
        .push(Drawable::fill(top, DEFAULT_SHAPE_COLOR).with_mode(DrawMode::Points))
        .push(Drawable::fill(middle, DEFAULT_SHAPE_COLOR))
        .push(Drawable::fill(bottom, DEFAULT_SHAPE_COLOR).with_mode(DrawMode::Wireframe))
}

fn quad() -> Scene {
    [(-0.5, -0.5), (-0.5, 0.5), (0.5, 0.5), (0.5, -0.5)]
        .into_iter()
        .map(|(x, y)| Drawable::fill(make_triangle(0.25, x, y), DEFAULT_SHAPE_COLOR))
        .fold(
            Scene::new(Builtin::Quad.name()).with_projection([-1.0, 1.0, -1.0, 1.0]),
            Scene::push,
        )
}

/// Rectangle of `width` x `height` pixels with its corner at pixel `(x, y)`.
fn pixels(width: f32, height: f32, x: f32, y: f32) -> Shape {
    let mut rect = make_rectangle(width * PIXEL, height * PIXEL);
    translate(&mut rect, x * PIXEL, y * PIXEL);
    rect
}

fn sprite() -> Scene {
    let hat = group(&[&pixels(5.0, 1.0, -3.0, 3.0), &pixels(9.0, 1.0, -4.0, 2.0)]);

    let head = group(&[
        &pixels(4.0, 1.0, -1.0, 1.0),
        &pixels(9.0, 1.0, -4.0, 0.0),
        &pixels(10.0, 1.0, -4.0, -1.0),
        &pixels(4.0, 1.0, -3.0, -2.0),
        &pixels(7.0, 1.0, -3.0, -3.0),
    ]);

    let face = group(&[
        // eye
        &pixels(1.0, 2.0, 1.0, 0.0),
        // mustache
        &pixels(1.0, 1.0, 2.0, -1.0),
        &pixels(4.0, 1.0, 1.0, -2.0),
        // hair
        &pixels(3.0, 1.0, -4.0, 1.0),
        &pixels(1.0, 1.0, -3.0, 0.0),
        &pixels(2.0, 1.0, -3.0, -1.0),
        &pixels(1.0, 3.0, -5.0, -2.0),
        &pixels(1.0, 1.0, -4.0, -2.0),
    ]);

    Scene::new(Builtin::Sprite.name())
        .push(Drawable::fill(hat, [0.94, 0.23, 0.22]))
        .push(Drawable::fill(head, [1.0, 0.8, 0.4]))
        .push(Drawable::fill(face, [0.6, 0.41, 0.16]))
}
