//! # Primitive Descriptors
//!
//! Data description of a primitive request, so scene or asset files can
//! name the mesh they need instead of calling a generator directly.

use serde::{Deserialize, Serialize};

use crate::error::MeshResult;
use crate::geometry::Geometry;
use crate::primitives::{generate_cube, generate_icosphere, generate_quad};

/// A primitive shape and its parameters.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::Primitive;
///
/// let sphere = Primitive::IcoSphere { radius: 1.0, subdivisions: 1 };
/// let geometry = sphere.generate().unwrap();
/// assert_eq!(geometry.triangle_count(), 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// Subdivided icosahedron.
    #[serde(rename = "icosphere")]
    IcoSphere {
        /// Distance of every vertex from the origin.
        radius: f64,
        /// Number of 4-way subdivision passes; negative values are rejected.
        subdivisions: i32,
    },
    /// Box centered at the origin.
    Cube {
        /// Extent along X.
        x_length: f64,
        /// Extent along Y.
        y_length: f64,
        /// Extent along Z.
        z_length: f64,
    },
    /// Rectangle on the XY plane facing +Z.
    Quad {
        /// Extent along X.
        width: f64,
        /// Extent along Y.
        height: f64,
    },
}

impl Primitive {
    /// Runs the matching generator.
    ///
    /// Only icospheres can fail; see [`generate_icosphere`].
    pub fn generate(&self) -> MeshResult<Geometry> {
        match *self {
            Primitive::IcoSphere {
                radius,
                subdivisions,
            } => generate_icosphere(radius, subdivisions),
            Primitive::Cube {
                x_length,
                y_length,
                z_length,
            } => Ok(generate_cube(x_length, y_length, z_length)),
            Primitive::Quad { width, height } => Ok(generate_quad(width, height)),
        }
    }

    /// Short name used in logs and descriptors.
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::IcoSphere { .. } => "icosphere",
            Primitive::Cube { .. } => "cube",
            Primitive::Quad { .. } => "quad",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;

    #[test]
    fn test_generate_dispatches() {
        let cube = Primitive::Cube {
            x_length: 2.0,
            y_length: 2.0,
            z_length: 2.0,
        };
        assert_eq!(cube.generate().unwrap(), generate_cube(2.0, 2.0, 2.0));

        let quad = Primitive::Quad {
            width: 4.0,
            height: 2.0,
        };
        assert_eq!(quad.generate().unwrap().vertex_count(), 4);
    }

    #[test]
    fn test_generate_propagates_errors() {
        let sphere = Primitive::IcoSphere {
            radius: 1.0,
            subdivisions: -1,
        };
        assert!(matches!(
            sphere.generate(),
            Err(MeshError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_deserialize_icosphere() {
        let json = r#"{ "type": "icosphere", "radius": 2.0, "subdivisions": 2 }"#;
        let primitive: Primitive = serde_json::from_str(json).unwrap();
        assert_eq!(
            primitive,
            Primitive::IcoSphere {
                radius: 2.0,
                subdivisions: 2
            }
        );
        assert_eq!(primitive.name(), "icosphere");
    }

    #[test]
    fn test_deserialize_cube_and_quad() {
        let cube: Primitive =
            serde_json::from_str(r#"{ "type": "cube", "x_length": 1.0, "y_length": 2.0, "z_length": 3.0 }"#)
                .unwrap();
        assert_eq!(cube.name(), "cube");

        let quad: Primitive =
            serde_json::from_str(r#"{ "type": "quad", "width": 4.0, "height": 2.0 }"#).unwrap();
        assert_eq!(
            quad,
            Primitive::Quad {
                width: 4.0,
                height: 2.0
            }
        );
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result: Result<Primitive, _> =
            serde_json::from_str(r#"{ "type": "torus", "radius": 1.0 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_tag() {
        let json = serde_json::to_string(&Primitive::Quad {
            width: 1.0,
            height: 1.0,
        })
        .unwrap();
        assert!(json.contains(r#""type":"quad""#));
    }
}
