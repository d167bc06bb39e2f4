//! # Configuration Constants
//!
//! Centralized constants for primitive mesh generation. Precision values,
//! seed mesh sizes and resource limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point tolerances
//! - **Seed Mesh**: Sizes of the icosahedron every icosphere starts from
//! - **Limits**: Maximum values for safety bounds

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for checking that a generated vertex lies on its sphere.
///
/// Midpoints are renormalized after every subdivision pass and then scaled
/// by the radius once, so the error stays a few ULPs of the radius. This
/// tolerance is relative to the radius.
///
/// # Example
///
/// ```rust
/// use config::constants::DISTANCE_TOLERANCE;
///
/// let radius: f64 = 2.0;
/// let distance: f64 = 2.0 + 1e-12;
/// assert!((distance - radius).abs() <= DISTANCE_TOLERANCE * radius.abs().max(1.0));
/// ```
pub const DISTANCE_TOLERANCE: f64 = 1e-9;

/// Minimum triangle area below which a triangle counts as degenerate.
///
/// Used by mesh validation. A collapsed sphere (`radius == 0`) is valid
/// output but fails validation by this measure.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// SEED MESH CONSTANTS
// =============================================================================

/// Number of vertices of the seed icosahedron.
pub const ICOSAHEDRON_VERTEX_COUNT: usize = 12;

/// Number of triangles of the seed icosahedron.
pub const ICOSAHEDRON_TRIANGLE_COUNT: usize = 20;

/// Number of child triangles a single subdivision pass turns one triangle into.
pub const SUBDIVISION_FACTOR: usize = 4;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// Safety limit to prevent memory exhaustion.
pub const MAX_TRIANGLES: usize = 10_000_000;

/// Deepest icosphere subdivision level admitted by the default limits.
///
/// Level `k` produces `20 * 4^k` triangles; level 9 gives 5_242_880, level
/// 10 would give 20_971_520 which exceeds [`MAX_TRIANGLES`].
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_ICOSPHERE_SUBDIVISIONS;
///
/// assert_eq!(MAX_ICOSPHERE_SUBDIVISIONS, 9);
/// ```
pub const MAX_ICOSPHERE_SUBDIVISIONS: u32 = deepest_icosphere_level(MAX_TRIANGLES, MAX_VERTICES);

/// Largest vertex budget whose indices still fit in a `u32`.
pub const MAX_INDEXABLE_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// GENERATOR LIMITS
// =============================================================================

/// Resource budget applied to a single generated mesh.
///
/// # Examples
/// ```
/// use config::constants::GeneratorLimits;
/// let limits = GeneratorLimits::new(1_000, 1_000).expect("valid limits");
/// assert!(limits.allows_icosphere(2));  // 320 triangles, 162 vertices
/// assert!(!limits.allows_icosphere(3)); // 1280 triangles
/// ```
///
/// Limits only come from [`GeneratorLimits::new`] or [`Default`], so the
/// vertex budget never exceeds the `u32` index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorLimits {
    max_triangles: usize,
    max_vertices: usize,
}

impl GeneratorLimits {
    /// Builds limits, rejecting budgets too small to hold the seed
    /// icosahedron and vertex budgets that overflow `u32` indices.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, GeneratorLimits};
    /// assert_eq!(
    ///     GeneratorLimits::new(10, 100).unwrap_err(),
    ///     ConfigError::InvalidTriangleBudget(10)
    /// );
    /// ```
    pub fn new(max_triangles: usize, max_vertices: usize) -> Result<Self, ConfigError> {
        if max_triangles < ICOSAHEDRON_TRIANGLE_COUNT {
            return Err(ConfigError::InvalidTriangleBudget(max_triangles));
        }
        if !(ICOSAHEDRON_VERTEX_COUNT..=MAX_INDEXABLE_VERTICES).contains(&max_vertices) {
            return Err(ConfigError::InvalidVertexBudget(max_vertices));
        }
        Ok(Self {
            max_triangles,
            max_vertices,
        })
    }

    /// Maximum number of triangles a generator may produce.
    pub fn max_triangles(&self) -> usize {
        self.max_triangles
    }

    /// Maximum number of vertices a generator may produce.
    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    /// Deepest icosphere subdivision level that fits in this budget.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{GeneratorLimits, MAX_ICOSPHERE_SUBDIVISIONS};
    /// assert_eq!(GeneratorLimits::default().max_subdivisions(), MAX_ICOSPHERE_SUBDIVISIONS);
    /// assert_eq!(GeneratorLimits::new(20, 12).unwrap().max_subdivisions(), 0);
    /// ```
    pub fn max_subdivisions(&self) -> u32 {
        deepest_icosphere_level(self.max_triangles, self.max_vertices)
    }

    /// Returns true if an icosphere at `subdivisions` fits in this budget.
    pub fn allows_icosphere(&self, subdivisions: u32) -> bool {
        subdivisions <= self.max_subdivisions()
    }
}

impl Default for GeneratorLimits {
    fn default() -> Self {
        Self {
            max_triangles: MAX_TRIANGLES,
            max_vertices: MAX_VERTICES,
        }
    }
}

/// Returns `(vertex_count, triangle_count)` of an icosphere after
/// `subdivisions` passes, or `None` if the counts overflow `usize`.
///
/// Triangles follow `20 * 4^k`; vertices follow Euler's formula for a
/// closed triangulated sphere, `T / 2 + 2`.
///
/// # Example
///
/// ```rust
/// use config::constants::icosphere_counts;
///
/// assert_eq!(icosphere_counts(0), Some((12, 20)));
/// assert_eq!(icosphere_counts(1), Some((42, 80)));
/// assert_eq!(icosphere_counts(200), None);
/// ```
pub fn icosphere_counts(subdivisions: u32) -> Option<(usize, usize)> {
    let triangles = SUBDIVISION_FACTOR
        .checked_pow(subdivisions)?
        .checked_mul(ICOSAHEDRON_TRIANGLE_COUNT)?;
    Some((triangles / 2 + 2, triangles))
}

/// Deepest subdivision level whose icosphere fits both budgets.
///
/// Assumes the budgets hold the seed icosahedron (level 0), which
/// [`GeneratorLimits::new`] guarantees. Stops before the triangle count
/// would overflow `usize`.
pub const fn deepest_icosphere_level(max_triangles: usize, max_vertices: usize) -> u32 {
    let mut level = 0;
    let mut triangles = ICOSAHEDRON_TRIANGLE_COUNT;
    loop {
        let next = match triangles.checked_mul(SUBDIVISION_FACTOR) {
            Some(next) => next,
            None => return level,
        };
        if next > max_triangles || next / 2 + 2 > max_vertices {
            return level;
        }
        triangles = next;
        level += 1;
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the triangle budget cannot hold the seed icosahedron.
    InvalidTriangleBudget(usize),
    /// Raised when the vertex budget cannot hold the seed icosahedron or
    /// exceeds the `u32` index space.
    InvalidVertexBudget(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTriangleBudget(value) => {
                write!(
                    f,
                    "max_triangles must be >= {ICOSAHEDRON_TRIANGLE_COUNT}: {value}"
                )
            }
            ConfigError::InvalidVertexBudget(value) => {
                write!(
                    f,
                    "max_vertices must be in {ICOSAHEDRON_VERTEX_COUNT}..={MAX_INDEXABLE_VERTICES}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
