//! Procedural 2D geometry for small OpenGL exercises.
//!
//! Shapes are built by the factories in [`shape`], optionally moved around with
//! the in-place transforms and merged with [`shape::group`] before being handed
//! to the GPU.

pub mod shape;

pub use shape::Shape;

pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 720;
