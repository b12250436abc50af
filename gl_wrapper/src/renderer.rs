use cgmath::Matrix4;
use gl::types::GLenum;

use crate::geometry::Geometry;
use crate::program::Program;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
    Points,
    LineStrip,
}

impl Primitive {
    fn gl_mode(self) -> GLenum {
        match self {
            Primitive::Triangles => gl::TRIANGLES,
            Primitive::Points => gl::POINTS,
            Primitive::LineStrip => gl::LINE_STRIP,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PolygonMode {
    Fill,
    Line,
}

pub struct GlRenderer {
    current_program: u32,
}

impl GlRenderer {
    pub fn new() -> Self {
        Self { current_program: 0 }
    }

    /// Draws indexed geometry through its element buffer, anything else as a
    /// plain vertex run.
    pub fn draw(&mut self, geometry: &Geometry, program: &Program, primitive: Primitive) {
        self.use_program(program);

        unsafe {
            gl::BindVertexArray(geometry.vao());

            if geometry.is_indexed() {
                gl::DrawElements(
                    primitive.gl_mode(),
                    geometry.indices() as i32,
                    gl::UNSIGNED_INT,
                    std::ptr::null(),
                );
            } else {
                gl::DrawArrays(primitive.gl_mode(), 0, geometry.vertices() as i32);
            }
        }
    }

    pub fn use_program(&mut self, program: &Program) {
        let p_id = program.id();
        if self.switch_program(p_id) {
            unsafe { gl::UseProgram(p_id) }
        }
    }

    /// Records `p_id` as bound, `true` if it was not already.
    fn switch_program(&mut self, p_id: u32) -> bool {
        let changed = self.current_program != p_id;
        self.current_program = p_id;
        changed
    }

    /// Binds `program` and sets one of its `vec3` uniforms.
    pub fn set_vec3(&mut self, program: &Program, name: &str, value: [f32; 3]) {
        self.use_program(program);
        program.set_vec3(name, value);
    }

    pub fn set_mat4(&mut self, program: &Program, name: &str, value: &Matrix4<f32>) {
        self.use_program(program);
        program.set_mat4(name, value);
    }

    pub fn polygon_mode(&self, mode: PolygonMode) {
        let mode = match mode {
            PolygonMode::Fill => gl::FILL,
            PolygonMode::Line => gl::LINE,
        };

        unsafe { gl::PolygonMode(gl::FRONT_AND_BACK, mode) }
    }

    /// Viewport over the whole framebuffer.
    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    /// Keeps a square viewport centred in the framebuffer.
    pub fn resize_square(&self, width: u32, height: u32) {
        let (x, y, size) = square_viewport(width, height);

        unsafe {
            gl::Viewport(x, y, size, size);
        }
    }

    pub fn clear_color(&self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    pub fn line_width(&self, width: f32) {
        unsafe { gl::LineWidth(width) }
    }

    pub fn point_size(&self, size: f32) {
        unsafe { gl::PointSize(size) }
    }
}

impl Default for GlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest square fitting the framebuffer, centred along the longer side.
/// Returns `(x, y, size)`.
pub fn square_viewport(width: u32, height: u32) -> (i32, i32, i32) {
    let (width, height) = (width as i32, height as i32);
    let size = width.min(height);

    ((width - size) / 2, (height - size) / 2, size)
}
