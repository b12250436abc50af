use cgmath::Matrix4;
use serde::Deserialize;

use glhelper::Shape;

pub const DEFAULT_CLEAR_COLOR: [f32; 3] = [0.69, 0.69, 0.69];
pub const DEFAULT_SHAPE_COLOR: [f32; 3] = [1.0, 0.84, 0.1];

/// Vertex data of one drawable, as it will be uploaded.
#[derive(Debug, Clone, PartialEq)]
pub enum Mesh {
    Indexed(Shape),
    /// Bare positions drawn in order, without indices.
    Strip(Vec<f32>),
    /// Interleaved `x, y, r, g, b` vertices carrying their own colour.
    Colored(Vec<f32>),
}

/// Floats per vertex of [`Mesh::Colored`].
pub const COLORED_STRIDE: usize = 5;

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        match self {
            Mesh::Indexed(shape) => shape.vertex_count(),
            Mesh::Strip(vertices) => vertices.len() / 2,
            Mesh::Colored(data) => data.len() / COLORED_STRIDE,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    #[default]
    Fill,
    Wireframe,
    Points,
    LineStrip,
}

/// How a scene maps onto the framebuffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Viewport {
    /// Largest centred square, keeps the aspect ratio.
    #[default]
    Square,
    /// Whole framebuffer.
    Stretch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub mesh: Mesh,
    pub color: [f32; 3],
    pub mode: DrawMode,
}

impl Drawable {
    pub fn new(mesh: Mesh, color: [f32; 3], mode: DrawMode) -> Self {
        Self { mesh, color, mode }
    }

    pub fn fill(shape: Shape, color: [f32; 3]) -> Self {
        Self::new(Mesh::Indexed(shape), color, DrawMode::Fill)
    }

    pub fn strip(vertices: Vec<f32>, color: [f32; 3]) -> Self {
        Self::new(Mesh::Strip(vertices), color, DrawMode::LineStrip)
    }

    /// Per-vertex coloured points, `color` is ignored when drawing.
    pub fn colored(data: Vec<f32>) -> Self {
        Self::new(Mesh::Colored(data), DEFAULT_SHAPE_COLOR, DrawMode::Points)
    }

    pub fn with_mode(mut self, mode: DrawMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Everything the gallery shows at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub name: String,
    pub clear_color: [f32; 3],
    /// Orthographic bounds `[left, right, bottom, top]`, clip space if unset.
    pub projection: Option<[f32; 4]>,
    pub viewport: Viewport,
    pub line_width: f32,
    pub point_size: f32,
    pub items: Vec<Drawable>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clear_color: DEFAULT_CLEAR_COLOR,
            projection: None,
            viewport: Viewport::Square,
            line_width: 2.0,
            point_size: 8.0,
            items: Vec::new(),
        }
    }

    pub fn push(mut self, item: Drawable) -> Self {
        self.items.push(item);

        self
    }

    pub fn with_projection(mut self, bounds: [f32; 4]) -> Self {
        self.projection = Some(bounds);
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_point_size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }

    pub fn projection_matrix(&self) -> Option<Matrix4<f32>> {
        self.projection
            .map(|[left, right, bottom, top]| cgmath::ortho(left, right, bottom, top, -1.0, 1.0))
    }
}
