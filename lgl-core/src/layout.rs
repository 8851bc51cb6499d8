//! Interleaved vertex layouts.
//!
//! A [`VertexLayout`] describes how a flat `f32` buffer is split into
//! attributes. Locations are assigned in order starting at 0, so the shader
//! side must declare `layout (location = N)` in the same order.

use thiserror::Error;

const FLOAT_SIZE: usize = std::mem::size_of::<f32>();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("vertex layout has no attributes")]
    Empty,
    #[error("attribute {location} has {components} components, expected 1 to 4")]
    InvalidComponents { location: u32, components: usize },
    #[error("{floats} floats do not divide into vertices of {per_vertex}")]
    PartialVertex { floats: usize, per_vertex: usize },
    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

/// A single float attribute inside an interleaved vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: usize,
    /// Byte offset from the start of the vertex.
    pub offset: usize,
}

/// Layout of one interleaved vertex made of `f32` components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: Vec<VertexAttribute>,
    stride: usize,
}

impl VertexLayout {
    /// Builds a layout from per-attribute component counts, e.g. `[3, 3, 2]`
    /// for position, color and texture coordinates.
    pub fn new(components: &[usize]) -> Result<Self, LayoutError> {
        if components.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut attributes = Vec::with_capacity(components.len());
        let mut offset = 0;
        for (location, &count) in components.iter().enumerate() {
            if !(1..=4).contains(&count) {
                return Err(LayoutError::InvalidComponents {
                    location: location as u32,
                    components: count,
                });
            }
            attributes.push(VertexAttribute {
                location: location as u32,
                components: count,
                offset,
            });
            offset += count * FLOAT_SIZE;
        }

        Ok(Self {
            attributes,
            stride: offset,
        })
    }

    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Size of one vertex in bytes.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of floats making up one vertex.
    pub fn floats_per_vertex(&self) -> usize {
        self.stride / FLOAT_SIZE
    }

    /// Number of whole vertices in `data`, or `None` if `data` ends with a
    /// partial vertex.
    pub fn vertex_count(&self, data: &[f32]) -> Option<usize> {
        let per_vertex = self.floats_per_vertex();
        data.len()
            .is_multiple_of(per_vertex)
            .then(|| data.len() / per_vertex)
    }

    /// Checks that `vertices` holds whole vertices and that every index
    /// points at one of them. Returns the number of elements a draw call
    /// should process: the index count when indexed, the vertex count otherwise.
    pub fn validate(&self, vertices: &[f32], indices: Option<&[u32]>) -> Result<usize, LayoutError> {
        let vertex_count = self
            .vertex_count(vertices)
            .ok_or(LayoutError::PartialVertex {
                floats: vertices.len(),
                per_vertex: self.floats_per_vertex(),
            })?;

        let Some(indices) = indices else {
            return Ok(vertex_count);
        };
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(LayoutError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }
        Ok(indices.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_cumulative() {
        let layout = VertexLayout::new(&[3, 3, 2]).unwrap();
        let offsets: Vec<_> = layout.attributes().iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24]);
        assert_eq!(layout.stride(), 32);
        assert_eq!(layout.floats_per_vertex(), 8);
        assert_eq!(layout.attributes()[2].location, 2);
    }

    #[test]
    fn position_only() {
        let layout = VertexLayout::new(&[3]).unwrap();
        assert_eq!(layout.stride(), 12);
        assert_eq!(layout.attributes().len(), 1);
    }

    #[test]
    fn rejects_bad_components() {
        assert_eq!(VertexLayout::new(&[]), Err(LayoutError::Empty));
        assert_eq!(
            VertexLayout::new(&[3, 0]),
            Err(LayoutError::InvalidComponents {
                location: 1,
                components: 0
            })
        );
        assert!(VertexLayout::new(&[5]).is_err());
    }

    #[test]
    fn vertex_count_detects_partial_vertices() {
        let layout = VertexLayout::new(&[3, 3]).unwrap();
        assert_eq!(layout.vertex_count(&[0.0; 18]), Some(3));
        assert_eq!(layout.vertex_count(&[0.0; 17]), None);
        assert_eq!(layout.vertex_count(&[]), Some(0));
    }

    #[test]
    fn validate_counts_elements() {
        let layout = VertexLayout::new(&[3]).unwrap();
        assert_eq!(layout.validate(&[0.0; 9], None), Ok(3));
        assert_eq!(layout.validate(&[0.0; 12], Some(&[0, 1, 2, 0, 2, 3])), Ok(6));
    }

    #[test]
    fn validate_rejects_out_of_range_index() {
        let layout = VertexLayout::new(&[3]).unwrap();
        assert_eq!(
            layout.validate(&[0.0; 9], Some(&[0, 1, 7])),
            Err(LayoutError::IndexOutOfRange {
                index: 7,
                vertex_count: 3
            })
        );
        // One past the end is already out of range.
        assert!(layout.validate(&[0.0; 9], Some(&[3])).is_err());
    }

    #[test]
    fn validate_rejects_partial_vertex() {
        let layout = VertexLayout::new(&[3, 3]).unwrap();
        let err = layout.validate(&[0.0; 17], None).unwrap_err();
        assert_eq!(
            err,
            LayoutError::PartialVertex {
                floats: 17,
                per_vertex: 6
            }
        );
        assert_eq!(err.to_string(), "17 floats do not divide into vertices of 6");
    }
}
