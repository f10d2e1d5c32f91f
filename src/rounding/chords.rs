//! Chord calculator: heights, visibility half-angles and chord endpoints

use glam::DVec2;

use crate::graph::CellGraph;

/// Compute every edge's height and, when one exists, its chord.
///
/// A chord is the segment where the radius circle around a site is capped by
/// the perpendicular bisector toward a neighbor. It exists only for
/// `height < radius` (strictly: two sites exactly `2 * radius` apart get no
/// chord). Bisector points are equidistant from both endpoints, so the pair
/// is computed once per canonical edge, from the `b` side, and stored in
/// `a`'s clockwise orientation; the `b` view reads it reversed.
pub(crate) fn compute_chords(graph: &mut CellGraph, radius: f64) {
    for eid in 0..graph.edges.len() {
        let a = graph.sites[graph.edges[eid].a].position;
        let b = graph.sites[graph.edges[eid].b].position;
        let height = a.distance(b) / 2.0;

        let edge = &mut graph.edges[eid];
        edge.height = height;
        if height < radius {
            let theta = (height / radius).acos();
            let direction = (a - b).normalize();
            let earlier = b + DVec2::from_angle(-theta).rotate(direction) * radius;
            let later = b + DVec2::from_angle(theta).rotate(direction) * radius;
            edge.chord = Some([earlier, later]);
            edge.vis_angle = Some(theta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::adjacency::build_neighbor_lists;
    use crate::rounding::angles::sort_neighbors_clockwise;
    use crate::triangulation::Triangulation;
    use approx::assert_relative_eq;

    fn pair_graph(b: DVec2, radius: f64) -> CellGraph {
        let sites = vec![DVec2::new(0.0, 0.0), b];
        let triangulation = Triangulation {
            edges: vec![(0, 1)],
            triangles: vec![],
        };
        let mut graph = CellGraph::new(&sites, &triangulation).unwrap();
        build_neighbor_lists(&mut graph, &triangulation.edges);
        sort_neighbors_clockwise(&mut graph);
        compute_chords(&mut graph, radius);
        graph
    }

    #[test]
    fn test_chord_endpoints() {
        // Sites 2 apart, radius 2: height 1, half-angle 60°.
        let graph = pair_graph(DVec2::new(2.0, 0.0), 2.0);
        let edge = &graph.edges[0];

        assert_relative_eq!(edge.height, 1.0);
        assert_relative_eq!(edge.vis_angle.unwrap(), std::f64::consts::FRAC_PI_3);

        let chord = edge.chord.unwrap();
        // The chord lies on the perpendicular bisector x = 1.
        assert_relative_eq!(chord[0].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(chord[1].x, 1.0, epsilon = 1e-12);
        // Endpoints are at the radius from both sites.
        for p in chord {
            assert_relative_eq!(p.length(), 2.0, epsilon = 1e-12);
            assert_relative_eq!(p.distance(DVec2::new(2.0, 0.0)), 2.0, epsilon = 1e-12);
        }
        // Clockwise-earlier endpoint first, as seen from site 0.
        assert!(chord[0].y > 0.0);
        assert!(chord[1].y < 0.0);
        assert_relative_eq!(chord[0].y, 3.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_no_chord_at_exact_radius() {
        // height == radius is the strict boundary: no chord.
        let graph = pair_graph(DVec2::new(2.0, 0.0), 1.0);
        assert_relative_eq!(graph.edges[0].height, 1.0);
        assert!(graph.edges[0].chord.is_none());
        assert!(graph.edges[0].vis_angle.is_none());
    }

    #[test]
    fn test_no_chord_when_far() {
        let graph = pair_graph(DVec2::new(10.0, 0.0), 1.0);
        assert!(graph.edges[0].chord.is_none());
    }

    #[test]
    fn test_chord_just_inside_radius() {
        let graph = pair_graph(DVec2::new(1.99, 0.0), 1.0);
        assert!(graph.edges[0].chord.is_some());
    }

    #[test]
    fn test_reversed_view_from_far_site() {
        let graph = pair_graph(DVec2::new(2.0, 0.0), 2.0);
        let from_a = graph.chord(0, 0).unwrap();
        let from_b = graph.chord(1, 0).unwrap();
        assert_eq!(from_a[0], from_b[1]);
        assert_eq!(from_a[1], from_b[0]);
    }
}
