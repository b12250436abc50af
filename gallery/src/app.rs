use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContextSurfaceAccessor,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use std::ffi::CString;
use std::num::NonZeroU32;

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use gl_wrapper::geometry::{GBError, Geometry};
use gl_wrapper::program::{PBError, Program, ProgramBuilder};
use gl_wrapper::renderer::{GlRenderer, PolygonMode, Primitive};

use glhelper_common::scene::{DrawMode, Mesh, Scene, Viewport};
use glhelper_common::shaders::{
    ShaderPair, COLORED, COLOR_UNIFORM, FLAT, PROJECTED, PROJECTION_UNIFORM,
};

use crate::state::{Command, GalleryState, Outcome};

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
    resources: Resources,
    gallery: GalleryState,
}

impl App {
    pub fn new(
        width: u32,
        height: u32,
        scenes: Vec<Scene>,
        gallery: GalleryState,
    ) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(width, height)))
            .with_min_inner_size(Size::Physical(PhysicalSize::new(32, 32)))
            .with_title("glhelper gallery");
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |configs| {
                configs
                    .reduce(|best, c| {
                        if c.num_samples() > best.num_samples() {
                            c
                        } else {
                            best
                        }
                    })
                    .expect("glutin-winit only calls the picker with at least one config")
            })
            .map_err(|e| AppError::Window(e.to_string()))?;

        let window = window.ok_or_else(|| AppError::Window("no window was created".into()))?;

        let handle = Some(window.raw_window_handle());
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(handle);

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
            .make_current(&gl_window.surface)?;

        gl::load_with(|s| match CString::new(s) {
            Ok(name) => gl_display.get_proc_address(name.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });

        let resources = Resources::new(scenes)?;

        log::info!("uploaded {} scenes", resources.scenes.len());

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
            resources,
            gallery,
        })
    }

    pub fn run(self) -> ! {
        let Self {
            event_loop,
            gl_context,
            gl_window,
            resources,
            mut gallery,
        } = self;

        let mut resources = Some(resources);
        let mut gl_renderer = GlRenderer::new();

        if let Some(resources) = &resources {
            update_title(&gl_window.window, resources, &gallery);
        }

        event_loop.run(move |event, _window_target, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => {
                        if let (Some(w), Some(h)) =
                            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                        {
                            gl_window.surface.resize(&gl_context, w, h);
                            gl_window.window.request_redraw();
                        }
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        if input.state != ElementState::Pressed {
                            return;
                        }

                        let command = match input.virtual_keycode.and_then(key_command) {
                            Some(command) => command,
                            None => return,
                        };

                        match gallery.apply(command) {
                            Some(Outcome::Exit) => control_flow.set_exit(),
                            Some(Outcome::SceneChanged) => {
                                if let Some(resources) = &resources {
                                    update_title(&gl_window.window, resources, &gallery);
                                }
                                gl_window.window.request_redraw();
                            }
                            Some(Outcome::WireframeChanged) => gl_window.window.request_redraw(),
                            None => {}
                        }
                    }
                    WindowEvent::CloseRequested => control_flow.set_exit(),
                    _ => (),
                },
                Event::RedrawRequested(_) => {
                    if let Some(resources) = &resources {
                        let size = gl_window.window.inner_size();
                        resources.draw(&mut gl_renderer, &gallery, size.width, size.height);

                        if let Err(e) = gl_window.surface.swap_buffers(&gl_context) {
                            log::error!("Could not swap buffers: {e}");
                            control_flow.set_exit();
                        }
                    }
                }
                Event::LoopDestroyed => {
                    // GPU objects have to go while the context is still alive
                    drop(resources.take());
                    log::debug!("released GPU resources");
                }
                _ => (),
            }
        })
    }
}

/// Programs and uploaded geometry of every scene.
struct Resources {
    flat: Program,
    projected: Program,
    colored: Program,
    scenes: Vec<UploadedScene>,
}

struct UploadedScene {
    scene: Scene,
    /// One per scene item, same order.
    geometries: Vec<Geometry>,
}

impl Resources {
    fn new(scenes: Vec<Scene>) -> Result<Self, AppError> {
        let flat = build_program(FLAT)?;
        let projected = build_program(PROJECTED)?;
        let colored = build_program(COLORED)?;

        let scenes = scenes
            .into_iter()
            .map(UploadedScene::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            flat,
            projected,
            colored,
            scenes,
        })
    }

    fn draw(&self, renderer: &mut GlRenderer, gallery: &GalleryState, width: u32, height: u32) {
        let uploaded = match self.scenes.get(gallery.current()) {
            Some(uploaded) => uploaded,
            None => return,
        };
        let scene = &uploaded.scene;

        match scene.viewport {
            Viewport::Square => renderer.resize_square(width, height),
            Viewport::Stretch => renderer.resize(width, height),
        }

        let [r, g, b] = scene.clear_color;
        renderer.clear_color(r, g, b);
        renderer.line_width(scene.line_width);
        renderer.point_size(scene.point_size);

        let program = match scene.projection_matrix() {
            Some(projection) => {
                renderer.set_mat4(&self.projected, PROJECTION_UNIFORM, &projection);
                &self.projected
            }
            None => &self.flat,
        };

        for (item, geometry) in scene.items.iter().zip(&uploaded.geometries) {
            let (primitive, polygon_mode) = draw_style(item.mode, gallery.wireframe());
            renderer.polygon_mode(polygon_mode);

            match item.mesh {
                Mesh::Colored(_) => renderer.draw(geometry, &self.colored, primitive),
                _ => {
                    renderer.set_vec3(program, COLOR_UNIFORM, item.color);
                    renderer.draw(geometry, program, primitive);
                }
            }
        }

        renderer.polygon_mode(PolygonMode::Fill);
    }
}

impl UploadedScene {
    fn new(scene: Scene) -> Result<Self, GBError> {
        let geometries = scene
            .items
            .iter()
            .map(|item| match &item.mesh {
                Mesh::Indexed(shape) => Geometry::from_shape(shape),
                Mesh::Strip(vertices) => Geometry::from_vertices(vertices),
                Mesh::Colored(data) => Geometry::from_colored_vertices(data),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { scene, geometries })
    }
}

fn build_program(pair: ShaderPair) -> Result<Program, PBError> {
    ProgramBuilder::new(pair.vertex, pair.fragment).build()
}

fn update_title(window: &Window, resources: &Resources, gallery: &GalleryState) {
    if let Some(uploaded) = resources.scenes.get(gallery.current()) {
        window.set_title(&format!(
            "{} ({}/{}) - arrows cycle, W wireframe",
            uploaded.scene.name,
            gallery.current() + 1,
            resources.scenes.len()
        ));
    }
}

fn key_command(key: VirtualKeyCode) -> Option<Command> {
    match key {
        VirtualKeyCode::Escape => Some(Command::Quit),
        VirtualKeyCode::Right => Some(Command::Next),
        VirtualKeyCode::Left => Some(Command::Previous),
        VirtualKeyCode::W => Some(Command::ToggleWireframe),
        _ => None,
    }
}

/// The wireframe toggle only affects filled items.
fn draw_style(mode: DrawMode, wireframe: bool) -> (Primitive, PolygonMode) {
    match mode {
        DrawMode::Fill if wireframe => (Primitive::Triangles, PolygonMode::Line),
        DrawMode::Fill => (Primitive::Triangles, PolygonMode::Fill),
        DrawMode::Wireframe => (Primitive::Triangles, PolygonMode::Line),
        DrawMode::Points => (Primitive::Points, PolygonMode::Fill),
        DrawMode::LineStrip => (Primitive::LineStrip, PolygonMode::Fill),
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, AppError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).ok_or(AppError::ZeroSized)?,
            NonZeroU32::new(height).ok_or(AppError::ZeroSized)?,
        );

        let surface = unsafe {
            config
                .display()
                .create_window_surface(config, &attrs)?
        };

        Ok(Self { window, surface })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not create window: {0}")]
    Window(String),
    #[error("Window has zero size")]
    ZeroSized,
    #[error("GL context error: {0}")]
    Context(#[from] glutin::error::Error),
    #[error("{0}")]
    Program(#[from] PBError),
    #[error("Could not upload geometry: {0}")]
    Geometry(#[from] GBError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(key_command(VirtualKeyCode::Escape), Some(Command::Quit));
        assert_eq!(key_command(VirtualKeyCode::Right), Some(Command::Next));
        assert_eq!(key_command(VirtualKeyCode::Left), Some(Command::Previous));
        assert_eq!(key_command(VirtualKeyCode::W), Some(Command::ToggleWireframe));
        assert_eq!(key_command(VirtualKeyCode::Q), None);
    }

    #[test]
    fn wireframe_only_changes_filled_items() {
        assert_eq!(
            draw_style(DrawMode::Fill, true),
            (Primitive::Triangles, PolygonMode::Line)
        );
        assert_eq!(
            draw_style(DrawMode::Fill, false),
            (Primitive::Triangles, PolygonMode::Fill)
        );
        assert_eq!(
            draw_style(DrawMode::Points, true),
            (Primitive::Points, PolygonMode::Fill)
        );
        assert_eq!(
            draw_style(DrawMode::LineStrip, true),
            (Primitive::LineStrip, PolygonMode::Fill)
        );
        assert_eq!(
            draw_style(DrawMode::Wireframe, false),
            (Primitive::Triangles, PolygonMode::Line)
        );
    }
}
