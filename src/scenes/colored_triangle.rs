use std::sync::Arc;

use glow::HasContext;
use lgl_core::ColorCycle;
use lgl_core::geometry::COLORED_TRIANGLE;

use super::{FrameContext, Scene};
use crate::abs::{Mesh, ShaderProgram};
use crate::assets::Assets;
use crate::error::Result;

/// Vertex-colored triangle tinted by a color that cycles over time and
/// sliding left and right.
pub struct ColoredTriangle {
    program: ShaderProgram,
    mesh: Mesh,
    cycle: ColorCycle,
}

impl ColoredTriangle {
    pub fn new(gl: &Arc<glow::Context>, assets: &Assets) -> Result<Self> {
        let program = ShaderProgram::from_sources(
            gl,
            &assets.text("shaders/shaders/vert.glsl")?,
            &assets.text("shaders/shaders/frag.glsl")?,
        )?;
        let mesh = Mesh::from_geometry(gl, &COLORED_TRIANGLE)?;
        Ok(Self {
            program,
            mesh,
            cycle: ColorCycle::at(0.0),
        })
    }
}

impl Scene for ColoredTriangle {
    fn update(&mut self, ctx: &FrameContext) {
        self.cycle = ColorCycle::at(ctx.elapsed);
    }

    fn render(&mut self, gl: &Arc<glow::Context>) {
        unsafe {
            gl.clear_color(0.5, 0.5, 1.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.program.use_program();
        let [r, g, b, a] = self.cycle.color.to_array();
        self.program.set_color("ourColorA", r, g, b, a);
        self.program.set_float("xOffset", self.cycle.x_offset);
        self.mesh.draw();
    }
}
