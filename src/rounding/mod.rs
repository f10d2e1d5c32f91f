//! Rounded cell construction pipeline
//!
//! A strict sequence of phases communicating through the shared site, edge
//! and face records: adjacency, angular sort, chord computation,
//! intersection folding, hidden-chord culling and final assembly. Later
//! phases read state written by earlier ones, so a single configuration is
//! always processed sequentially; independent configurations share nothing
//! and can be fanned out by the caller.

mod adjacency;
mod angles;
mod assemble;
mod chords;
mod culling;
mod intersect;

use glam::DVec2;

use crate::config::RoundingConfig;
use crate::error::Result;
use crate::graph::CellGraph;
use crate::mesh::CellMesh;
use crate::triangulation::Triangulation;

/// Build rounded cells from sites and a collaborator-supplied triangulation
///
/// This is the kernel proper: it accepts any [`Triangulation`] honoring the
/// contract documented on that type and never calls a triangulator itself.
///
/// # Arguments
///
/// * `sites` - 2D site positions the triangulation was built from
/// * `triangulation` - unique undirected edges and finite CCW triangles
/// * `config` - radius and arc resolution
///
/// # Returns
///
/// One polygon per input site, in site order, over a shared vertex list.
/// Sites without usable chords degrade to full circles; a malformed
/// triangulation is a fatal error.
pub fn generate_rounded_cells_from_triangulation(
    sites: &[DVec2],
    triangulation: &Triangulation,
    config: &RoundingConfig,
) -> Result<CellMesh> {
    let mut graph = CellGraph::new(sites, triangulation)?;

    // Phase 1-2: neighbor lists, sorted clockwise per site
    adjacency::build_neighbor_lists(&mut graph, &triangulation.edges);
    angles::sort_neighbors_clockwise(&mut graph);

    // Phase 3: heights, visibility half-angles and chords, once per edge
    chords::compute_chords(&mut graph, config.radius);

    // Phase 4: per-face chord crossings, folded into adjusted chords
    intersect::resolve_intersections(&mut graph)?;

    // Phase 5: occlusion culling around crowded sites
    culling::cull_hidden_chords(&mut graph);

    // Phase 6: arcs, chord segments and circles
    Ok(assemble::assemble_cells(&mut graph, config))
}

/// Build rounded cells from bare sites, triangulating with spade
///
/// Convenience entry point for the common case.
///
/// # Example
///
/// ```rust
/// use rounded_voronoi::*;
///
/// let sites = vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(3.0, 0.0),
///     DVec2::new(0.0, 3.0),
/// ];
/// let config = RoundingConfigBuilder::new()
///     .radius(2.0)
///     .unwrap()
///     .resolution(0.5)
///     .build()
///     .unwrap();
///
/// let mesh = generate_rounded_cells(&sites, &config).unwrap();
/// assert_eq!(mesh.polygon_count(), sites.len());
/// ```
#[cfg(feature = "delaunay")]
pub fn generate_rounded_cells(sites: &[DVec2], config: &RoundingConfig) -> Result<CellMesh> {
    let triangulation = crate::triangulation::triangulate(sites)?;
    generate_rounded_cells_from_triangulation(sites, &triangulation, config)
}
