use std::sync::Arc;

use glam::Vec4;
use glow::HasContext;
use lgl_core::geometry::HELLO_TRIANGLE;

use super::Scene;
use crate::abs::{Mesh, Shader, ShaderProgram, ShaderStage};
use crate::error::Result;

const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;

uniform vec4 fillColor;

void main()
{
    FragColor = fillColor;
}
"#;

/// A single flat-colored triangle with the shaders compiled from inline source.
pub struct HelloTriangle {
    program: ShaderProgram,
    mesh: Mesh,
}

impl HelloTriangle {
    pub const FILL_COLOR: Vec4 = Vec4::new(0.5, 0.5, 0.9, 1.0);

    pub fn new(gl: &Arc<glow::Context>) -> Result<Self> {
        let vert = Shader::new(gl, ShaderStage::Vertex, VERTEX_SHADER)?;
        let frag = Shader::new(gl, ShaderStage::Fragment, FRAGMENT_SHADER)?;
        let program = ShaderProgram::new(gl, &[&vert, &frag])?;
        let mesh = Mesh::from_geometry(gl, &HELLO_TRIANGLE)?;
        Ok(Self { program, mesh })
    }
}

impl Scene for HelloTriangle {
    fn render(&mut self, gl: &Arc<glow::Context>) {
        unsafe {
            gl.clear_color(0.0, 0.0, 0.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.program.use_program();
        self.program.set_uniform("fillColor", Self::FILL_COLOR);
        self.mesh.draw();
    }
}
