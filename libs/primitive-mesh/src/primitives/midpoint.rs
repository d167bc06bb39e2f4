//! # Edge Midpoint Cache
//!
//! Shares the midpoint vertex of an edge between the two triangles that
//! border it, so a subdivided sphere stays a single connected surface.

use std::collections::HashMap;

use glam::DVec3;

use crate::geometry::next_vertex_index;

/// Packs an unordered vertex pair into a single key.
///
/// The smaller index goes in the high 32 bits, so `(a, b)` and `(b, a)`
/// produce the same key and distinct pairs never collide.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::midpoint::edge_key;
///
/// assert_eq!(edge_key(3, 7), edge_key(7, 3));
/// assert_eq!(edge_key(3, 7), (3u64 << 32) | 7);
/// ```
#[inline]
pub fn edge_key(v1: u32, v2: u32) -> u64 {
    let (low, high) = if v1 < v2 { (v1, v2) } else { (v2, v1) };
    (u64::from(low) << 32) | u64::from(high)
}

/// Edge-to-midpoint index table for one icosphere build.
///
/// The cache never evicts. It is created per build and dropped with it.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use primitive_mesh::primitives::midpoint::MidpointCache;
///
/// let mut vertices = vec![DVec3::X, DVec3::Y];
/// let mut cache = MidpointCache::new();
///
/// let mid = cache.get_or_create(&mut vertices, 0, 1);
/// assert_eq!(mid, 2);
/// assert_eq!(cache.get_or_create(&mut vertices, 1, 0), mid);
/// assert_eq!(vertices.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct MidpointCache {
    midpoints: HashMap<u64, u32>,
}

impl MidpointCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache sized for `edge_count` distinct edges.
    pub fn with_capacity(edge_count: usize) -> Self {
        Self {
            midpoints: HashMap::with_capacity(edge_count),
        }
    }

    /// Returns the index of the midpoint of edge `(v1, v2)`, creating it on
    /// first request.
    ///
    /// A new midpoint is the normalized average of both endpoints and is
    /// appended at the end of `vertices`. Both indices must be valid for
    /// `vertices`.
    pub fn get_or_create(&mut self, vertices: &mut Vec<DVec3>, v1: u32, v2: u32) -> u32 {
        let key = edge_key(v1, v2);
        if let Some(&index) = self.midpoints.get(&key) {
            return index;
        }

        let midpoint = ((vertices[v1 as usize] + vertices[v2 as usize]) / 2.0).normalize();
        let index = next_vertex_index(vertices.len());
        vertices.push(midpoint);
        self.midpoints.insert(key, index);
        index
    }

    /// Returns the cached midpoint of `(v1, v2)` without creating one.
    pub fn get(&self, v1: u32, v2: u32) -> Option<u32> {
        self.midpoints.get(&edge_key(v1, v2)).copied()
    }

    /// Number of distinct edges cached so far.
    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    /// Returns true if no midpoint has been created yet.
    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_edge_key_is_symmetric() {
        assert_eq!(edge_key(0, 1), edge_key(1, 0));
        assert_eq!(edge_key(11, 5), edge_key(5, 11));
    }

    #[test]
    fn test_edge_key_distinct_pairs_do_not_collide() {
        // Naive additive schemes would merge these
        assert_ne!(edge_key(1, 4), edge_key(2, 3));
        assert_ne!(edge_key(0, 5), edge_key(1, 4));
        assert_ne!(edge_key(0, u32::MAX), edge_key(1, 0));
    }

    #[test]
    fn test_edge_key_uses_full_index_range() {
        assert_eq!(edge_key(u32::MAX, u32::MAX - 1), 0xFFFF_FFFE_FFFF_FFFF);
    }

    #[test]
    fn test_miss_appends_normalized_midpoint() {
        let mut vertices = vec![DVec3::X, DVec3::Y];
        let mut cache = MidpointCache::new();

        let index = cache.get_or_create(&mut vertices, 0, 1);

        assert_eq!(index, 2);
        assert_eq!(vertices.len(), 3);
        let expected = DVec3::new(1.0, 1.0, 0.0).normalize();
        assert_relative_eq!(vertices[2].x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(vertices[2].y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(vertices[2].length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hit_returns_same_index_without_growing() {
        let mut vertices = vec![DVec3::X, DVec3::Y, DVec3::Z];
        let mut cache = MidpointCache::new();

        let first = cache.get_or_create(&mut vertices, 0, 2);
        let count = vertices.len();
        let second = cache.get_or_create(&mut vertices, 0, 2);
        let reversed = cache.get_or_create(&mut vertices, 2, 0);

        assert_eq!(first, second);
        assert_eq!(first, reversed);
        assert_eq!(vertices.len(), count);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_indices_assigned_in_request_order() {
        let mut vertices = vec![DVec3::X, DVec3::Y, DVec3::Z];
        let mut cache = MidpointCache::new();

        assert_eq!(cache.get_or_create(&mut vertices, 1, 2), 3);
        assert_eq!(cache.get_or_create(&mut vertices, 0, 1), 4);
        assert_eq!(cache.get_or_create(&mut vertices, 2, 0), 5);
        assert_eq!(cache.get_or_create(&mut vertices, 2, 1), 3);
    }

    #[test]
    fn test_get_does_not_create() {
        let mut vertices = vec![DVec3::X, DVec3::Y];
        let mut cache = MidpointCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get(0, 1), None);

        let index = cache.get_or_create(&mut vertices, 0, 1);
        assert_eq!(cache.get(1, 0), Some(index));
        assert_eq!(vertices.len(), 3);
    }
}
