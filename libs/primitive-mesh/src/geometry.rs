//! # Geometry
//!
//! Triangle mesh container handed to the rendering/physics pipeline.
//!
//! Table-based generators fill it incrementally with [`Geometry::add_vertex`]
//! and [`Geometry::add_triangle`]; the icosphere builder hands over finished
//! buffers through [`Geometry::from_lists`]. The container never renumbers or
//! deduplicates what it is given.

use config::constants::{MAX_INDEXABLE_VERTICES, VERTEX_MERGE_EPSILON};
use glam::DVec3;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the renderer boundary.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::Geometry;
///
/// let mut geometry = Geometry::new();
/// let a = geometry.add_vertex(0.0, 0.0, 0.0);
/// let b = geometry.add_vertex(1.0, 0.0, 0.0);
/// let c = geometry.add_vertex(0.0, 1.0, 0.0);
/// geometry.add_triangle(a, b, c);
/// assert_eq!(geometry.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices, counter-clockwise seen from outside
    triangles: Vec<[u32; 3]>,
}

impl Geometry {
    /// Creates an empty geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a geometry with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Wraps finished vertex and triangle buffers.
    ///
    /// Order and index values are kept exactly as supplied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use primitive_mesh::Geometry;
    ///
    /// let geometry = Geometry::from_lists(
    ///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
    ///     vec![[0, 1, 2]],
    /// );
    /// assert_eq!(geometry.triangle(0), [0, 1, 2]);
    /// ```
    pub fn from_lists(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Consumes the geometry and returns its buffers.
    pub fn into_lists(self) -> (Vec<DVec3>, Vec<[u32; 3]>) {
        (self.vertices, self.triangles)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the geometry has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    ///
    /// The vertex count must stay within the `u32` index space.
    pub fn add_vertex(&mut self, x: f64, y: f64, z: f64) -> u32 {
        let index = next_vertex_index(self.vertices.len());
        self.vertices.push(DVec3::new(x, y, z));
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.triangles.push([i0, i1, i2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the three corner positions of a triangle.
    #[inline]
    pub fn triangle_corners(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [self.vertex(a), self.vertex(b), self.vertex(c)]
    }

    /// Returns the unnormalized face normal of a triangle.
    ///
    /// Its direction follows the winding; its length is twice the area.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [v0, v1, v2] = self.triangle_corners(index);
        (v1 - v0).cross(v2 - v0)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates the geometry for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats an index
    /// - No zero-area triangles
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len();

        self.triangles.iter().enumerate().all(|(i, tri)| {
            if tri.iter().any(|&idx| idx as usize >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            self.face_normal(i).length() >= VERTEX_MERGE_EPSILON
        })
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

/// Index the next vertex appended to a buffer of `len` vertices receives.
///
/// Generators never produce more than [`MAX_INDEXABLE_VERTICES`] vertices
/// because `GeneratorLimits` caps the vertex budget there.
pub(crate) fn next_vertex_index(len: usize) -> u32 {
    debug_assert!(
        len < MAX_INDEXABLE_VERTICES,
        "vertex index {len} does not fit in u32"
    );
    len as u32
}
