//! Thin RAII wrappers over the GL calls needed to upload shapes and draw them.
//!
//! Every wrapper assumes a current GL context with loaded function pointers.
//! Handles release their GL objects on drop, so they have to be dropped before
//! the context goes away.

pub mod geometry;
pub mod program;
pub mod renderer;
