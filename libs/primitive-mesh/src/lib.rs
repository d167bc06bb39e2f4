//! # Primitive Mesh
//!
//! Procedural triangle meshes for basic 3D primitives, consumed by the
//! rendering and physics pipeline.
//!
//! ## Architecture
//!
//! ```text
//! Primitive / generate_* → Geometry (vertices + triangles) → renderer, physics
//! ```
//!
//! ## Generators
//!
//! - **Icosphere**: recursive subdivision of an icosahedron; edge midpoints
//!   are shared between neighbouring triangles through a per-build cache
//! - **Cube**: 8 vertices, 12 triangles
//! - **Quad**: 4 vertices, 2 triangles
//!
//! All generators are pure, synchronous and deterministic.
//!
//! ## Usage
//!
//! ```rust
//! use primitive_mesh::{generate_cube, generate_icosphere, generate_quad};
//!
//! let sphere = generate_icosphere(1.0, 1)?;
//! assert_eq!(sphere.vertex_count(), 42);
//! assert_eq!(sphere.triangle_count(), 80);
//!
//! let cube = generate_cube(2.0, 2.0, 2.0);
//! assert_eq!(cube.triangle_count(), 12);
//!
//! let quad = generate_quad(4.0, 2.0);
//! assert_eq!(quad.triangle_count(), 2);
//! # Ok::<(), primitive_mesh::MeshError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod primitive;
pub mod primitives;

pub use error::{MeshError, MeshResult};
pub use geometry::Geometry;
pub use primitive::Primitive;
pub use primitives::{generate_cube, generate_icosphere, generate_quad};
