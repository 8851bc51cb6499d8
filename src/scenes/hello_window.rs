use std::sync::Arc;

use glam::Vec4;
use glow::HasContext;

use super::Scene;

/// An empty window cleared to a single color.
pub struct HelloWindow {
    clear_color: Vec4,
}

impl HelloWindow {
    pub const CLEAR_COLOR: Vec4 = Vec4::new(1.0, 0.0, 1.0, 1.0);

    pub fn new() -> Self {
        Self {
            clear_color: Self::CLEAR_COLOR,
        }
    }
}

impl Default for HelloWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for HelloWindow {
    fn render(&mut self, gl: &Arc<glow::Context>) {
        let [r, g, b, a] = self.clear_color.to_array();
        unsafe {
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }
}
