//! Angular sorter: clockwise neighbor ordering per site

use std::f64::consts::TAU;

use glam::DVec2;

use crate::graph::CellGraph;

/// Clockwise-positive angle from `from` to `to`, normalized into [0, 2π).
pub(crate) fn clockwise_angle(from: DVec2, to: DVec2) -> f64 {
    let angle = (-from.perp_dot(to)).atan2(from.dot(to));
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Sort every site's neighbors clockwise and record the matching angles.
///
/// The reference direction is the first raw neighbor, whose angle is 0 by
/// construction. Coincident neighbor directions are ordered by neighbor
/// index ascending, a deterministic tie-break the source material left
/// undefined. The edge-id list is permuted in lockstep.
pub(crate) fn sort_neighbors_clockwise(graph: &mut CellGraph) {
    for site in 0..graph.sites.len() {
        let position = graph.sites[site].position;
        let record = &graph.sites[site];
        if record.neighbors.len() <= 1 {
            let angles = vec![0.0; record.neighbors.len()];
            graph.sites[site].angles = angles;
            continue;
        }

        let reference = graph.sites[record.neighbors[0]].position - position;
        let mut keyed: Vec<(f64, usize, usize)> = record
            .neighbors
            .iter()
            .zip(&record.edge_ids)
            .map(|(&neighbor, &eid)| {
                let direction = graph.sites[neighbor].position - position;
                (clockwise_angle(reference, direction), neighbor, eid)
            })
            .collect();
        // The reference slot must stay at exactly 0 regardless of rounding.
        keyed[0].0 = 0.0;
        keyed.sort_by(|x, y| {
            x.0.partial_cmp(&y.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(x.1.cmp(&y.1))
        });

        let record = &mut graph.sites[site];
        record.angles = keyed.iter().map(|&(angle, _, _)| angle).collect();
        record.neighbors = keyed.iter().map(|&(_, neighbor, _)| neighbor).collect();
        record.edge_ids = keyed.iter().map(|&(_, _, eid)| eid).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::adjacency::build_neighbor_lists;
    use crate::triangulation::Triangulation;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_clockwise_angle_quadrants() {
        let x = DVec2::X;
        assert_relative_eq!(clockwise_angle(x, DVec2::X), 0.0);
        // Counterclockwise +90° reads as 270° clockwise.
        assert_relative_eq!(clockwise_angle(x, DVec2::Y), 3.0 * FRAC_PI_2);
        assert_relative_eq!(clockwise_angle(x, -DVec2::Y), FRAC_PI_2);
        assert_relative_eq!(clockwise_angle(x, -DVec2::X), PI);
        assert_relative_eq!(clockwise_angle(DVec2::Y, DVec2::X), FRAC_PI_2);
    }

    #[test]
    fn test_sort_cross_neighbors() {
        // Center site with neighbors in the four axis directions.
        let sites = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(-1.0, 0.0),
            DVec2::new(0.0, -1.0),
        ];
        let triangulation = Triangulation {
            edges: vec![(0, 1), (0, 2), (0, 3), (0, 4)],
            triangles: vec![],
        };
        let mut graph = CellGraph::new(&sites, &triangulation).unwrap();
        build_neighbor_lists(&mut graph, &triangulation.edges);
        sort_neighbors_clockwise(&mut graph);

        // Reference is +X; clockwise order is +X, -Y, -X, +Y.
        assert_eq!(graph.sites[0].neighbors, vec![1, 4, 3, 2]);
        let angles = &graph.sites[0].angles;
        assert_relative_eq!(angles[0], 0.0);
        assert_relative_eq!(angles[1], FRAC_PI_2);
        assert_relative_eq!(angles[2], PI);
        assert_relative_eq!(angles[3], 3.0 * FRAC_PI_2);

        // Edge ids stay parallel to the permuted neighbors.
        assert_eq!(graph.sites[0].edge_ids, vec![0, 3, 2, 1]);
        // Wrap sentinel.
        assert_relative_eq!(graph.sites[0].angle_at(4), TAU);
    }

    #[test]
    fn test_tie_break_by_neighbor_index() {
        // Two neighbors collinear with the site in the same direction.
        let sites = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 1.0),
        ];
        let triangulation = Triangulation {
            edges: vec![(0, 2), (0, 1), (0, 3)],
            triangles: vec![],
        };
        let mut graph = CellGraph::new(&sites, &triangulation).unwrap();
        build_neighbor_lists(&mut graph, &triangulation.edges);
        sort_neighbors_clockwise(&mut graph);

        // Sites 1 and 2 share angle 0; the smaller index wins.
        assert_eq!(graph.sites[0].neighbors, vec![1, 2, 3]);
    }
}
