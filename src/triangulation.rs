//! Delaunay triangulation input contract
//!
//! The rounding kernel treats the triangulator as an external collaborator:
//! it consumes a plain edge and triangle list and never inspects how they
//! were produced. A spade-backed adapter is provided behind the `delaunay`
//! feature for the common case.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "delaunay")]
use glam::DVec2;

use crate::error::{Result, RoundingError};

/// Delaunay triangulation of a site set
///
/// Collaborator contract:
/// - `edges` are unique and undirected; orientation of each pair is arbitrary
///   but fixed,
/// - `triangles` contain only finite faces (nothing touching the convex
///   hull's outer region) and are wound counterclockwise,
/// - all indices refer to the site list the triangulation was built from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Triangulation {
    /// Unique undirected edges as site-index pairs
    pub edges: Vec<(usize, usize)>,
    /// Finite counterclockwise triangles as site-index triples
    pub triangles: Vec<[usize; 3]>,
}

impl Triangulation {
    /// Check that all indices are in range and no edge or triangle is degenerate
    ///
    /// # Errors
    ///
    /// Returns `InvalidTriangulation` on the first out-of-range or repeated
    /// site index. A malformed triangulation is a fatal input-contract
    /// violation and is never masked.
    pub fn validate(&self, site_count: usize) -> Result<()> {
        for &(a, b) in &self.edges {
            if a >= site_count || b >= site_count {
                return Err(RoundingError::InvalidTriangulation(format!(
                    "edge ({}, {}) references a site outside 0..{}",
                    a, b, site_count
                )));
            }
            if a == b {
                return Err(RoundingError::InvalidTriangulation(format!(
                    "degenerate edge ({}, {})",
                    a, b
                )));
            }
        }
        for &[a, b, c] in &self.triangles {
            if a >= site_count || b >= site_count || c >= site_count {
                return Err(RoundingError::InvalidTriangulation(format!(
                    "triangle ({}, {}, {}) references a site outside 0..{}",
                    a, b, c, site_count
                )));
            }
            if a == b || b == c || a == c {
                return Err(RoundingError::InvalidTriangulation(format!(
                    "degenerate triangle ({}, {}, {})",
                    a, b, c
                )));
            }
        }
        Ok(())
    }
}

/// Triangulate a 2D site set with spade
///
/// Inner faces of a spade Delaunay triangulation are finite and wound
/// counterclockwise, which is exactly the contract [`Triangulation`] asks
/// for.
///
/// # Errors
///
/// Returns `TriangulationFailed` for non-finite coordinates or duplicate
/// site positions (spade would merge duplicates, which would silently break
/// the site-index mapping).
#[cfg(feature = "delaunay")]
pub fn triangulate(sites: &[DVec2]) -> Result<Triangulation> {
    use spade::{DelaunayTriangulation, Point2, Triangulation as _};

    let mut delaunay: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
    for site in sites {
        delaunay
            .insert(Point2::new(site.x, site.y))
            .map_err(|e| RoundingError::TriangulationFailed(format!("{:?}", e)))?;
    }
    if delaunay.num_vertices() != sites.len() {
        return Err(RoundingError::TriangulationFailed(format!(
            "duplicate site positions ({} sites, {} distinct)",
            sites.len(),
            delaunay.num_vertices()
        )));
    }

    let edges = delaunay
        .undirected_edges()
        .map(|edge| {
            let [v0, v1] = edge.vertices();
            (v0.fix().index(), v1.fix().index())
        })
        .collect();
    let triangles = delaunay
        .inner_faces()
        .map(|face| {
            let [v0, v1, v2] = face.vertices();
            [v0.fix().index(), v1.fix().index(), v2.fix().index()]
        })
        .collect();

    Ok(Triangulation { edges, triangles })
}
