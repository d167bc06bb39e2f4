//! # IcoSphere Primitive
//!
//! Generates a sphere by repeatedly subdividing a regular icosahedron.
//!
//! ## Algorithm
//!
//! 1. Seed with the 12 golden-ratio corners of an icosahedron, normalized
//!    onto the unit sphere, and its 20 counter-clockwise faces.
//! 2. Each pass splits every triangle `(v1, v2, v3)` into four using the
//!    edge midpoints `a = mid(v1, v2)`, `b = mid(v2, v3)`, `c = mid(v3, v1)`:
//!    `(v1, a, c)`, `(v2, b, a)`, `(v3, c, b)`, `(a, b, c)`. Midpoints are
//!    pushed back onto the unit sphere and shared through [`MidpointCache`].
//! 3. After the last pass every vertex is scaled by the radius.
//!
//! Level `k` yields `20 * 4^k` triangles and `10 * 4^k + 2` vertices.

use config::constants::{icosphere_counts, GeneratorLimits, ICOSAHEDRON_VERTEX_COUNT};
use glam::DVec3;

use crate::error::{MeshError, MeshResult};
use crate::geometry::Geometry;
use crate::primitives::midpoint::MidpointCache;

/// Faces of the seed icosahedron, counter-clockwise seen from outside.
const ICOSAHEDRON_TRIANGLES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Corners of the seed icosahedron on the unit sphere.
///
/// Built from the three orthogonal golden rectangles `(±1, ±φ, 0)`,
/// `(0, ±1, ±φ)` and `(±φ, 0, ±1)`.
fn icosahedron_vertices(capacity: usize) -> Vec<DVec3> {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;

    let corners = [
        DVec3::new(-1.0, phi, 0.0),
        DVec3::new(1.0, phi, 0.0),
        DVec3::new(-1.0, -phi, 0.0),
        DVec3::new(1.0, -phi, 0.0),
        DVec3::new(0.0, -1.0, phi),
        DVec3::new(0.0, 1.0, phi),
        DVec3::new(0.0, -1.0, -phi),
        DVec3::new(0.0, 1.0, -phi),
        DVec3::new(phi, 0.0, -1.0),
        DVec3::new(phi, 0.0, 1.0),
        DVec3::new(-phi, 0.0, -1.0),
        DVec3::new(-phi, 0.0, 1.0),
    ];

    let mut vertices = Vec::with_capacity(capacity.max(ICOSAHEDRON_VERTEX_COUNT));
    vertices.extend(corners.iter().map(|corner| corner.normalize()));
    vertices
}

/// Builds the vertex and triangle buffers of one icosphere.
///
/// Construction validates the request; [`IcoSphereBuilder::build`] performs
/// the work. Each builder owns its buffers and midpoint cache for a single
/// build and nothing survives it.
///
/// # Examples
/// ```
/// use primitive_mesh::primitives::icosphere::IcoSphereBuilder;
///
/// let (vertices, triangles) = IcoSphereBuilder::new(1).unwrap().build(1.0);
/// assert_eq!(vertices.len(), 42);
/// assert_eq!(triangles.len(), 80);
/// ```
#[derive(Debug)]
pub struct IcoSphereBuilder {
    subdivisions: u32,
    vertex_count: usize,
    triangle_count: usize,
}

impl IcoSphereBuilder {
    /// Validates `subdivisions` against the default [`GeneratorLimits`].
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidArgument`] if `subdivisions` is negative
    /// - [`MeshError::TooManyTriangles`] / [`MeshError::TooManyVertices`] if
    ///   the resulting mesh would exceed the limits
    pub fn new(subdivisions: i32) -> MeshResult<Self> {
        Self::with_limits(subdivisions, GeneratorLimits::default())
    }

    /// Validates `subdivisions` against custom limits.
    ///
    /// When the counts overflow `usize` the request fails with
    /// [`MeshError::TooManyTriangles`] and a `count` of `usize::MAX`. The
    /// vertex budget of any [`GeneratorLimits`] fits in `u32`, so an
    /// accepted builder always has indexable vertices.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorLimits;
    /// use primitive_mesh::primitives::icosphere::IcoSphereBuilder;
    /// use primitive_mesh::MeshError;
    ///
    /// let limits = GeneratorLimits::new(100, 100).unwrap();
    /// assert!(IcoSphereBuilder::with_limits(1, limits).is_ok());
    /// assert!(matches!(
    ///     IcoSphereBuilder::with_limits(2, limits),
    ///     Err(MeshError::TooManyTriangles { count: 320, max: 100 })
    /// ));
    /// ```
    pub fn with_limits(subdivisions: i32, limits: GeneratorLimits) -> MeshResult<Self> {
        let subdivisions = u32::try_from(subdivisions).map_err(|_| {
            MeshError::invalid_argument(format!(
                "icosphere subdivisions must be >= 0, got {subdivisions}"
            ))
        })?;

        let Some((vertex_count, triangle_count)) = icosphere_counts(subdivisions) else {
            log::warn!("rejecting icosphere with {subdivisions} subdivisions: count overflow");
            return Err(MeshError::TooManyTriangles {
                count: usize::MAX,
                max: limits.max_triangles(),
            });
        };

        if triangle_count > limits.max_triangles() {
            log::warn!(
                "rejecting icosphere with {subdivisions} subdivisions: {triangle_count} triangles"
            );
            return Err(MeshError::TooManyTriangles {
                count: triangle_count,
                max: limits.max_triangles(),
            });
        }
        if vertex_count > limits.max_vertices() {
            log::warn!(
                "rejecting icosphere with {subdivisions} subdivisions: {vertex_count} vertices"
            );
            return Err(MeshError::TooManyVertices {
                count: vertex_count,
                max: limits.max_vertices(),
            });
        }
        debug_assert!(limits.allows_icosphere(subdivisions));

        Ok(Self {
            subdivisions,
            vertex_count,
            triangle_count,
        })
    }

    /// Number of subdivision passes this builder runs.
    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    /// Number of vertices [`IcoSphereBuilder::build`] will produce.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of triangles [`IcoSphereBuilder::build`] will produce.
    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    /// Runs seeding, all subdivision passes and the final scaling.
    ///
    /// A zero radius collapses every vertex onto the origin; a negative
    /// radius mirrors the sphere through it. Output is deterministic for
    /// identical inputs, index assignment order included.
    pub fn build(self, radius: f64) -> (Vec<DVec3>, Vec<[u32; 3]>) {
        log::debug!(
            "building icosphere: radius={radius}, subdivisions={}",
            self.subdivisions
        );

        let mut vertices = icosahedron_vertices(self.vertex_count);
        let mut triangles = ICOSAHEDRON_TRIANGLES.to_vec();
        // Every vertex past the seed is the midpoint of exactly one edge
        let mut midpoints = MidpointCache::with_capacity(self.vertex_count - vertices.len());

        for pass in 0..self.subdivisions {
            triangles = subdivide(&triangles, &mut vertices, &mut midpoints);
            log::trace!(
                "icosphere pass {}: {} vertices, {} triangles",
                pass + 1,
                vertices.len(),
                triangles.len()
            );
        }

        for vertex in &mut vertices {
            *vertex *= radius;
        }

        debug_assert_eq!(vertices.len(), self.vertex_count);
        debug_assert_eq!(triangles.len(), self.triangle_count);
        log::debug!(
            "icosphere built: {} vertices, {} triangles",
            vertices.len(),
            triangles.len()
        );

        (vertices, triangles)
    }
}

/// Replaces every triangle by its four children, in input order.
fn subdivide(
    triangles: &[[u32; 3]],
    vertices: &mut Vec<DVec3>,
    midpoints: &mut MidpointCache,
) -> Vec<[u32; 3]> {
    let mut children = Vec::with_capacity(triangles.len() * 4);

    for &[v1, v2, v3] in triangles {
        let a = midpoints.get_or_create(vertices, v1, v2);
        let b = midpoints.get_or_create(vertices, v2, v3);
        let c = midpoints.get_or_create(vertices, v3, v1);

        children.push([v1, a, c]);
        children.push([v2, b, a]);
        children.push([v3, c, b]);
        children.push([a, b, c]);
    }

    children
}

/// Creates an icosphere mesh.
///
/// # Arguments
///
/// * `radius` - Distance of every vertex from the origin (sign mirrors)
/// * `subdivisions` - Number of subdivision passes over the icosahedron
///
/// # Returns
///
/// A geometry with `10 * 4^k + 2` vertices and `20 * 4^k` triangles.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::generate_icosphere;
///
/// let geometry = generate_icosphere(2.0, 0).unwrap();
/// assert_eq!(geometry.vertex_count(), 12);
/// assert_eq!(geometry.triangle_count(), 20);
///
/// assert!(generate_icosphere(1.0, -1).is_err());
/// ```
pub fn generate_icosphere(radius: f64, subdivisions: i32) -> MeshResult<Geometry> {
    let (vertices, triangles) = IcoSphereBuilder::new(subdivisions)?.build(radius);
    Ok(Geometry::from_lists(vertices, triangles))
}
