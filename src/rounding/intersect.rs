//! Intersection resolver: chord crossings around triangle apexes

use std::f64::consts::PI;

use glam::DVec2;

use crate::error::{Result, RoundingError};
use crate::graph::CellGraph;

/// Straight-line intersection of two segments, or `None` when they do not
/// cross within their extents.
pub(crate) fn segment_intersection(
    a1: DVec2,
    a2: DVec2,
    b1: DVec2,
    b2: DVec2,
) -> Option<DVec2> {
    let r = a2 - a1;
    let s = b2 - b1;
    let denom = r.perp_dot(s);
    if denom.abs() <= f64::EPSILON {
        return None;
    }
    let t = (b1 - a1).perp_dot(s) / denom;
    let u = (b1 - a1).perp_dot(r) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a1 + r * t)
    } else {
        None
    }
}

/// Resolve per-face chord crossings, then fold them into every chord.
///
/// Chords lie on perpendicular bisectors, so the two chords meeting at a
/// face's middle corner cross at the face circumcenter whenever their
/// visibility cones overlap. The point is computed once per face and reused
/// by every edge and site touching that corner.
pub(crate) fn resolve_intersections(graph: &mut CellGraph) -> Result<()> {
    for fid in 0..graph.faces.len() {
        let [n1, mid, _n2] = graph.faces[fid].corners;
        let count = graph.sites[mid].neighbors.len();
        let Some(i) = graph.sites[mid].neighbors.iter().position(|&n| n == n1) else {
            return Err(RoundingError::InvalidTriangulation(format!(
                "face corner {} is not a neighbor of its middle site {}",
                n1, mid
            )));
        };
        let i_next = (i + 1) % count;

        let (Some(current), Some(next)) = (graph.chord(mid, i), graph.chord(mid, i_next))
        else {
            continue;
        };
        let span = graph.sites[mid].angle_at(i + 1) - graph.sites[mid].angles[i];
        let overlap = graph.vis_angle(mid, i).unwrap_or(0.0)
            + graph.vis_angle(mid, i_next).unwrap_or(0.0);
        if span < overlap {
            graph.faces[fid].intersection =
                segment_intersection(current[0], current[1], next[0], next[1]);
        }
    }

    fold_adjusted_chords(graph);
    Ok(())
}

/// Replace chord endpoints with the intersection points found on the two
/// adjoining faces, producing each edge's adjusted chord.
///
/// Folding happens once per canonical edge, from its `a` side; the `b` view
/// reverses both the endpoint pair and the origin flags.
fn fold_adjusted_chords(graph: &mut CellGraph) {
    for eid in 0..graph.edges.len() {
        let Some(chord) = graph.edges[eid].chord else {
            continue;
        };
        let (a, b) = (graph.edges[eid].a, graph.edges[eid].b);
        let site = &graph.sites[a];
        let count = site.neighbors.len();
        let Some(i) = site.neighbors.iter().position(|&n| n == b) else {
            continue;
        };

        let (adjusted, flags) = if count == 2 {
            // No "previous" face exists; the wrap angle decides which side
            // the single adjoining face's intersection replaces.
            let span = site.angle_at(i + 1) - site.angles[i];
            let other = site.neighbors[1 - i];
            let crossing = graph
                .face_id([a, b, other])
                .and_then(|fid| graph.faces[fid].intersection);
            if span > PI {
                (
                    [crossing.unwrap_or(chord[0]), chord[1]],
                    [crossing.is_some(), false],
                )
            } else {
                (
                    [chord[0], crossing.unwrap_or(chord[1])],
                    [false, crossing.is_some()],
                )
            }
        } else {
            let prev = site.neighbors[(i + count - 1) % count];
            let next = site.neighbors[(i + 1) % count];
            let crossing_prev = graph
                .face_id([a, b, prev])
                .and_then(|fid| graph.faces[fid].intersection);
            let crossing_next = graph
                .face_id([a, b, next])
                .and_then(|fid| graph.faces[fid].intersection);
            (
                [
                    crossing_prev.unwrap_or(chord[0]),
                    crossing_next.unwrap_or(chord[1]),
                ],
                [crossing_prev.is_some(), crossing_next.is_some()],
            )
        };

        let edge = &mut graph.edges[eid];
        edge.adjusted = Some(adjusted);
        edge.from_intersection = flags;
    }
}
