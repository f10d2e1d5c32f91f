//! Adjacency builder: edge list to per-site neighbor lists

use crate::graph::CellGraph;

/// Append each edge endpoint to the other's neighbor list.
///
/// Edges are already unique per the triangulator contract, so no dedup is
/// needed. The owning edge id is recorded alongside each neighbor so later
/// phases can reach the canonical edge record without a map lookup.
pub(crate) fn build_neighbor_lists(graph: &mut CellGraph, edges: &[(usize, usize)]) {
    for (eid, &(a, b)) in edges.iter().enumerate() {
        graph.sites[a].neighbors.push(b);
        graph.sites[a].edge_ids.push(eid);
        graph.sites[b].neighbors.push(a);
        graph.sites[b].edge_ids.push(eid);
    }
}
