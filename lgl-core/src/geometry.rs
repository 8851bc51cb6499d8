//! Static vertex data used by the exercises.

use crate::layout::{LayoutError, VertexLayout};

/// Raw interleaved vertex data plus optional indices.
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    pub vertices: &'static [f32],
    pub indices: Option<&'static [u32]>,
    /// Component count of each attribute, in location order.
    pub components: &'static [usize],
}

impl Geometry {
    pub fn layout(&self) -> Result<VertexLayout, LayoutError> {
        VertexLayout::new(self.components)
    }
}

#[rustfmt::skip]
pub const HELLO_TRIANGLE: Geometry = Geometry {
    vertices: &[
        -0.5, -0.5, 0.0,
         0.5, -0.5, 0.0,
         0.0,  0.5, 0.0,
    ],
    indices: None,
    components: &[3],
};

#[rustfmt::skip]
pub const COLORED_TRIANGLE: Geometry = Geometry {
    vertices: &[
        // positions       // colors
         0.0,  0.5, 0.0,   0.0, 1.0, 1.0,
        -0.5, -0.5, 0.0,   1.0, 0.0, 1.0,
         0.5, -0.5, 0.0,   1.0, 1.0, 0.0,
    ],
    indices: None,
    components: &[3, 3],
};

#[rustfmt::skip]
pub const TEXTURED_QUAD: Geometry = Geometry {
    vertices: &[
        // positions       // colors        // uv
         0.5,  0.5, 0.0,   1.0, 0.0, 0.0,   1.0, 1.0, // top right
         0.5, -0.5, 0.0,   0.0, 1.0, 0.0,   1.0, 0.0, // bottom right
        -0.5, -0.5, 0.0,   0.0, 0.0, 1.0,   0.0, 0.0, // bottom left
        -0.5,  0.5, 0.0,   1.0, 1.0, 0.0,   0.0, 1.0, // top left
    ],
    indices: Some(&[
        0, 1, 2,
        0, 2, 3,
    ]),
    components: &[3, 3, 2],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn check(geometry: &Geometry, expected_elements: usize) {
        let layout = geometry.layout().unwrap();
        let elements = layout.validate(geometry.vertices, geometry.indices).unwrap();
        assert_eq!(elements, expected_elements);
        if let Some(indices) = geometry.indices {
            assert!(indices.len().is_multiple_of(3));
        }
    }

    #[test]
    fn constants_are_well_formed() {
        check(&HELLO_TRIANGLE, 3);
        check(&COLORED_TRIANGLE, 3);
        check(&TEXTURED_QUAD, 6);
    }

    #[test]
    fn bad_index_is_caught() {
        let geometry = Geometry {
            vertices: &[0.0; 9],
            indices: Some(&[0, 1, 7]),
            components: &[3],
        };
        let layout = geometry.layout().unwrap();
        assert!(matches!(
            layout.validate(geometry.vertices, geometry.indices),
            Err(LayoutError::IndexOutOfRange { index: 7, .. })
        ));
    }

    #[test]
    fn quad_uvs_cover_unit_square() {
        let layout = TEXTURED_QUAD.layout().unwrap();
        let per_vertex = layout.floats_per_vertex();
        let uvs: Vec<_> = TEXTURED_QUAD
            .vertices
            .chunks(per_vertex)
            .map(|v| (v[6], v[7]))
            .collect();
        assert!(uvs.contains(&(0.0, 0.0)));
        assert!(uvs.contains(&(1.0, 1.0)));
        assert!(uvs.iter().all(|&(u, v)| (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v)));
    }
}
