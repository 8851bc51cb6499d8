//! Module providing the `Scene` trait and one scene per exercise.

use std::sync::Arc;

use lgl_core::KeyboardState;
use sdl2::keyboard::Keycode;

pub mod colored_triangle;
pub mod hello_triangle;
pub mod hello_window;
pub mod textured_quad;

pub use colored_triangle::ColoredTriangle;
pub use hello_triangle::HelloTriangle;
pub use hello_window::HelloWindow;
pub use textured_quad::TexturedQuad;

/// Per-frame input and timing handed to [`Scene::update`].
pub struct FrameContext<'a> {
    pub keyboard: &'a KeyboardState<Keycode>,
    /// Seconds since the render loop started.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta_time: f32,
}

/// The Scene trait defines the common interface for all exercises.
pub trait Scene {
    /// Updates the scene state.
    fn update(&mut self, _ctx: &FrameContext) {}

    /// Clears the framebuffer and draws the scene.
    fn render(&mut self, gl: &Arc<glow::Context>);
}
