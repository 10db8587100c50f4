//! Static quad geometry.
//!
//! Two triangles covering the full canvas in normalized device coordinates,
//! one UV pair per vertex. Uploaded once with `STATIC_DRAW` and never
//! mutated afterwards.

/// Vertex positions, 3 components per vertex.
#[rustfmt::skip]
pub(crate) const PLANE_VERTICES: [f32; 18] = [
    -1.0, -1.0, 0.0,
     1.0, -1.0, 0.0,
     1.0,  1.0, 0.0,
    -1.0, -1.0, 0.0,
     1.0,  1.0, 0.0,
    -1.0,  1.0, 0.0,
];

/// Texture coordinates, 2 components per vertex.
#[rustfmt::skip]
pub(crate) const PLANE_UVS: [f32; 12] = [
    0.0, 0.0,
    1.0, 0.0,
    1.0, 1.0,
    0.0, 0.0,
    1.0, 1.0,
    0.0, 1.0,
];

/// Number of vertices issued per draw call.
pub(crate) const VERTEX_COUNT: i32 = (PLANE_VERTICES.len() / 3) as i32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_form_whole_triangles() {
        assert_eq!(PLANE_VERTICES.len() % 9, 0);
        assert_eq!(VERTEX_COUNT, 6);
    }

    #[test]
    fn test_one_uv_pair_per_vertex() {
        assert_eq!(PLANE_UVS.len() / 2, PLANE_VERTICES.len() / 3);
    }
}
