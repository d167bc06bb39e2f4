//! # Primitives
//!
//! Mesh generation for basic primitives (icosphere, cube, quad).

pub mod cube;
pub mod icosphere;
pub mod midpoint;
pub mod quad;

pub use cube::generate_cube;
pub use icosphere::{generate_icosphere, IcoSphereBuilder};
pub use midpoint::MidpointCache;
pub use quad::generate_quad;
