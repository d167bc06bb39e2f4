//! # Cube Primitive
//!
//! Generates mesh for cube and rectangular box shapes.

use crate::geometry::Geometry;

/// Creates a box mesh centered at the origin.
///
/// # Arguments
///
/// * `x_length` - Extent along X
/// * `y_length` - Extent along Y
/// * `z_length` - Extent along Z
///
/// # Returns
///
/// A geometry with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::generate_cube;
///
/// let geometry = generate_cube(2.0, 2.0, 2.0);
/// assert_eq!(geometry.vertex_count(), 8);
/// assert_eq!(geometry.triangle_count(), 12);
/// ```
pub fn generate_cube(x_length: f64, y_length: f64, z_length: f64) -> Geometry {
    let (hx, hy, hz) = (x_length / 2.0, y_length / 2.0, z_length / 2.0);
    let mut geometry = Geometry::with_capacity(8, 12);

    // Bottom face (y = -hy)
    let v0 = geometry.add_vertex(-hx, -hy, -hz);
    let v1 = geometry.add_vertex(-hx, -hy, hz);
    let v2 = geometry.add_vertex(hx, -hy, hz);
    let v3 = geometry.add_vertex(hx, -hy, -hz);

    // Top face (y = +hy)
    let v4 = geometry.add_vertex(-hx, hy, -hz);
    let v5 = geometry.add_vertex(-hx, hy, hz);
    let v6 = geometry.add_vertex(hx, hy, hz);
    let v7 = geometry.add_vertex(hx, hy, -hz);

    // Counter-clockwise winding seen from outside

    // Bottom (-Y)
    geometry.add_triangle(v0, v2, v1);
    geometry.add_triangle(v0, v3, v2);

    // Left (-X)
    geometry.add_triangle(v0, v1, v5);
    geometry.add_triangle(v0, v5, v4);

    // Front (+Z)
    geometry.add_triangle(v1, v2, v6);
    geometry.add_triangle(v1, v6, v5);

    // Right (+X)
    geometry.add_triangle(v2, v3, v7);
    geometry.add_triangle(v2, v7, v6);

    // Back (-Z)
    geometry.add_triangle(v3, v0, v4);
    geometry.add_triangle(v3, v4, v7);

    // Top (+Y)
    geometry.add_triangle(v4, v5, v6);
    geometry.add_triangle(v4, v6, v7);

    geometry
}
