//! Output mesh for rounded cell tessellation
//!
//! Engine-agnostic vertex and polygon data, one polygon per input site.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::DVec2;

/// Tessellation output
///
/// Contains raw data suitable for any downstream consumer:
/// - `vertices`: append-only 3D positions with z = 0
/// - `polygons`: ordered vertex-index lists, one per input site
///
/// Vertices shared by adjacent cells (chord endpoints on a shared edge,
/// intersection corners on a shared triangle) appear exactly once and are
/// referenced by index from both polygons.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellMesh {
    /// Vertex positions (z is always 0)
    pub vertices: Vec<[f64; 3]>,
    /// Per-site boundary polygons referencing `vertices`
    pub polygons: Vec<Vec<usize>>,
}

impl CellMesh {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of polygons (equals the number of input sites)
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append a 2D point as a z = 0 vertex and return its index.
    pub(crate) fn push_vertex(&mut self, point: DVec2) -> usize {
        let id = self.vertices.len();
        self.vertices.push([point.x, point.y, 0.0]);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_vertex_indices() {
        let mut mesh = CellMesh::default();
        assert!(mesh.is_empty());

        let a = mesh.push_vertex(DVec2::new(1.0, 2.0));
        let b = mesh.push_vertex(DVec2::new(-3.0, 0.5));

        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.vertices[1], [-3.0, 0.5, 0.0]);
    }
}
