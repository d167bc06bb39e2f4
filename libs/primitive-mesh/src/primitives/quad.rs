//! # Quad Primitive
//!
//! Generates a flat rectangle on the XY plane.

use crate::geometry::Geometry;

/// Creates a rectangle centered at the origin, facing +Z.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::generate_quad;
///
/// let geometry = generate_quad(4.0, 2.0);
/// assert_eq!(geometry.vertex_count(), 4);
/// assert_eq!(geometry.triangle_count(), 2);
/// ```
pub fn generate_quad(width: f64, height: f64) -> Geometry {
    let (hw, hh) = (width / 2.0, height / 2.0);
    let mut geometry = Geometry::with_capacity(4, 2);

    let v0 = geometry.add_vertex(-hw, -hh, 0.0);
    let v1 = geometry.add_vertex(hw, -hh, 0.0);
    let v2 = geometry.add_vertex(hw, hh, 0.0);
    let v3 = geometry.add_vertex(-hw, hh, 0.0);

    geometry.add_triangle(v0, v1, v2);
    geometry.add_triangle(v0, v2, v3);

    geometry
}
