use std::ffi::c_void;

use glhelper::Shape;
use thiserror::Error;

pub struct GeometryBuilder<'a> {
    attributes: Vec<VertexAttribute>,
    data: &'a [f32],
    indices: Option<&'a [u32]>,
}

impl<'a> GeometryBuilder<'a> {
    pub fn new(data: &'a [f32]) -> Self {
        Self {
            data,
            attributes: Vec::new(),
            indices: None,
        }
    }

    pub fn with_attribute(mut self, attr: VertexAttribute) -> Self {
        self.attributes.push(attr);
        self
    }

    /// Uploads an element buffer next to the vertex data. An empty slice is
    /// treated as no indices.
    pub fn with_indices(mut self, indices: &'a [u32]) -> Self {
        self.indices = if indices.is_empty() {
            None
        } else {
            Some(indices)
        };
        self
    }

    pub fn build(self) -> Result<Geometry, GBError> {
        let (vertices, stride) = self.validate()?;

        let mut vao = 0;
        let mut vbo = 0;
        let mut ebo = None;

        unsafe {
            gl::GenVertexArrays(1, (&mut vao) as *mut u32);
            gl::GenBuffers(1, (&mut vbo) as *mut u32);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(self.data) as isize,
                self.data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );

            let mut offset = 0;

            for (i, attr) in self.attributes.iter().enumerate() {
                gl::VertexAttribPointer(
                    i as u32,
                    attr.size() as i32,
                    gl::FLOAT,
                    gl::FALSE,
                    (stride * std::mem::size_of::<f32>()) as i32,
                    (offset * std::mem::size_of::<f32>()) as *const c_void,
                );
                offset += attr.size();
                gl::EnableVertexAttribArray(i as u32);
            }

            if let Some(indices) = self.indices {
                let mut id = 0;
                gl::GenBuffers(1, (&mut id) as *mut u32);

                // element buffer binding is recorded in the VAO
                gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, id);
                gl::BufferData(
                    gl::ELEMENT_ARRAY_BUFFER,
                    std::mem::size_of_val(indices) as isize,
                    indices.as_ptr() as *const c_void,
                    gl::STATIC_DRAW,
                );

                ebo = Some(id);
            }

            gl::BindVertexArray(0);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, 0);
        }

        let indices = self.indices.map_or(0, <[u32]>::len);

        log::debug!("uploaded geometry vao {vao}: {vertices} vertices, {indices} indices");

        Ok(Geometry {
            vao,
            vbo,
            ebo,
            vertices,
            indices,
        })
    }

    /// Checks the data against the attribute layout. Returns the vertex count
    /// and the stride in floats.
    fn validate(&self) -> Result<(usize, usize), GBError> {
        let stride: usize = self.attributes.iter().map(|a| a.size()).sum();

        if stride == 0 {
            return Err(GBError::NoAttributes);
        }

        if self.data.len() % stride != 0 {
            return Err(GBError::InvalidDataLength);
        }

        let vertices = self.data.len() / stride;

        if let Some(indices) = self.indices {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices) {
                return Err(GBError::IndexOutOfRange { index, vertices });
            }
        }

        Ok((vertices, stride))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GBError {
    #[error("Invalid data length for given attributes")]
    InvalidDataLength,
    #[error("Geometry needs at least one vertex attribute")]
    NoAttributes,
    #[error("Index {index} out of range for {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: usize },
}

pub enum VertexAttribute {
    Vec2,
    Vec3,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Vec2 => 2,
            VertexAttribute::Vec3 => 3,
        }
    }
}

/// Immutable GPU copy of vertex data, optionally indexed.
pub struct Geometry {
    vao: u32,
    vbo: u32,
    ebo: Option<u32>,
    vertices: usize,
    indices: usize,
}

impl Geometry {
    /// Uploads a shape as 2D positions with its triangle indices.
    pub fn from_shape(shape: &Shape) -> Result<Self, GBError> {
        GeometryBuilder::new(&shape.vertices)
            .with_attribute(VertexAttribute::Vec2)
            .with_indices(&shape.indices)
            .build()
    }

    /// Uploads a bare list of 2D positions, e.g. a spiral line strip.
    pub fn from_vertices(vertices: &[f32]) -> Result<Self, GBError> {
        GeometryBuilder::new(vertices)
            .with_attribute(VertexAttribute::Vec2)
            .build()
    }

    /// Uploads interleaved `x, y, r, g, b` vertices as two attributes,
    /// position at location 0 and colour at location 1.
    pub fn from_colored_vertices(data: &[f32]) -> Result<Self, GBError> {
        colored_builder(data).build()
    }

    pub fn vao(&self) -> u32 {
        self.vao
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn indices(&self) -> usize {
        self.indices
    }

    pub fn is_indexed(&self) -> bool {
        self.ebo.is_some()
    }
}

fn colored_builder(data: &[f32]) -> GeometryBuilder<'_> {
    GeometryBuilder::new(data)
        .with_attribute(VertexAttribute::Vec2)
        .with_attribute(VertexAttribute::Vec3)
}

impl Drop for Geometry {
    fn drop(&mut self) {
        unsafe {
            if let Some(ebo) = &self.ebo {
                gl::DeleteBuffers(1, ebo as *const u32);
            }
            gl::DeleteBuffers(1, (&self.vbo) as *const u32);
            gl::DeleteVertexArrays(1, (&self.vao) as *const u32);
        }
    }
}
