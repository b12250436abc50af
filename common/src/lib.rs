pub mod scene;
pub mod scene_loader;
pub mod scenes;
pub mod shaders;
