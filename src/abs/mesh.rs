//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing static vertex data on the GPU side.
//! Vertices are interleaved `f32` values described by a [`VertexLayout`].

use std::sync::Arc;

use glow::HasContext;
use lgl_core::{Geometry, VertexLayout};

use crate::error::{Error, Result};

/// Represents a mesh stored on the GPU side.
pub struct Mesh {
    gl: Arc<glow::Context>,
    draw_mode: u32,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    count: usize,
}

impl Mesh {
    /// Uploads the given vertex and optional index data.
    pub fn new(
        gl: &Arc<glow::Context>,
        vertices: &[f32],
        layout: &VertexLayout,
        indices: Option<&[u32]>,
        draw_mode: u32,
    ) -> Result<Self> {
        let count = layout.validate(vertices, indices)?;

        unsafe {
            let vao = gl.create_vertex_array().map_err(Error::Gl)?;
            let vbo = gl.create_buffer().map_err(Error::Gl)?;

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            // The element buffer binding is recorded in the VAO, so it must
            // stay bound until the VAO is unbound.
            let ebo = match indices {
                Some(indices) => {
                    let ebo = gl.create_buffer().map_err(Error::Gl)?;
                    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                    gl.buffer_data_u8_slice(
                        glow::ELEMENT_ARRAY_BUFFER,
                        bytemuck::cast_slice(indices),
                        glow::STATIC_DRAW,
                    );
                    Some(ebo)
                }
                None => None,
            };

            for attribute in layout.attributes() {
                gl.vertex_attrib_pointer_f32(
                    attribute.location,
                    attribute.components as i32,
                    glow::FLOAT,
                    false,
                    layout.stride() as i32,
                    attribute.offset as i32,
                );
                gl.enable_vertex_attrib_array(attribute.location);
            }

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            log::debug!(
                "Created mesh: {} elements, {} attributes, indexed: {}",
                count,
                layout.attributes().len(),
                ebo.is_some()
            );
            Ok(Self {
                gl: Arc::clone(gl),
                draw_mode,
                vao,
                vbo,
                ebo,
                count,
            })
        }
    }

    /// Uploads one of the static [`Geometry`] definitions as triangles.
    pub fn from_geometry(gl: &Arc<glow::Context>, geometry: &Geometry) -> Result<Self> {
        let layout = geometry.layout()?;
        Self::new(
            gl,
            geometry.vertices,
            &layout,
            geometry.indices,
            glow::TRIANGLES,
        )
    }

    /// Draws the mesh.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            if self.ebo.is_some() {
                self.gl
                    .draw_elements(self.draw_mode, self.count as i32, glow::UNSIGNED_INT, 0);
            } else {
                self.gl.draw_arrays(self.draw_mode, 0, self.count as i32);
            }
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
            if let Some(ebo) = self.ebo {
                self.gl.delete_buffer(ebo);
            }
        }
    }
}
