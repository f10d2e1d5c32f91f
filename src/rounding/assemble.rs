//! Geometry assembler: walks surviving chords and emits the output mesh

use std::f64::consts::TAU;

use glam::DVec2;

use crate::config::RoundingConfig;
use crate::graph::CellGraph;
use crate::mesh::CellMesh;

use super::angles::clockwise_angle;

/// Point on the clockwise circle parameterization, measured from +Y.
fn circle_point(center: DVec2, radius: f64, angle: f64) -> DVec2 {
    center + DVec2::new(angle.sin(), angle.cos()) * radius
}

/// Discretized clockwise arc from `start` to `end` around `center`,
/// including both endpoints.
fn arc_points(start: DVec2, end: DVec2, center: DVec2, resolution: f64) -> Vec<DVec2> {
    let vs = start - center;
    let ve = end - center;
    let radius = vs.length();
    let start_angle = clockwise_angle(DVec2::Y, vs);
    let sweep = clockwise_angle(vs, ve);
    let count = ((radius * sweep / resolution).round() as usize).max(3);
    (0..count)
        .map(|k| {
            let angle = start_angle + sweep * k as f64 / (count - 1) as f64;
            circle_point(center, radius, angle)
        })
        .collect()
}

/// Emit a full circle for a site with no usable chords.
fn emit_circle(mesh: &mut CellMesh, center: DVec2, config: &RoundingConfig) {
    let count = ((TAU * config.radius / config.resolution).round() as usize).max(5);
    let base = mesh.vertices.len();
    for k in 0..count {
        let angle = TAU * k as f64 / count as f64;
        mesh.push_vertex(circle_point(center, config.radius, angle));
    }
    // Reversed so the winding matches polygons assembled from chords.
    mesh.polygons.push((base..base + count).rev().collect());
}

/// Output-vertex id for a chord endpoint, deduplicated through the owning
/// edge's per-orientation cache.
fn edge_vertex(
    mesh: &mut CellMesh,
    graph: &mut CellGraph,
    site: usize,
    slot: usize,
    end: usize,
    point: DVec2,
) -> usize {
    let eid = graph.sites[site].edge_ids[slot];
    let index = if graph.edges[eid].a == site { end } else { 1 - end };
    match graph.edges[eid].emitted[index] {
        Some(id) => id,
        None => {
            let id = mesh.push_vertex(point);
            graph.edges[eid].emitted[index] = Some(id);
            id
        }
    }
}

/// Surviving chord slots in circular order, starting at the closest neighbor.
fn surviving_slots(graph: &CellGraph, site: usize) -> Vec<usize> {
    let count = graph.sites[site].neighbors.len();
    if count == 0 {
        return Vec::new();
    }
    let start = graph.min_height_slot(site);
    (0..count)
        .map(|k| (start + k) % count)
        .filter(|&slot| graph.adjusted(site, slot).is_some() && !graph.hidden(site, slot))
        .collect()
}

/// Walk each site's surviving chords and emit arcs, chord segments or full
/// circles, deduplicating shared corner vertices.
pub(crate) fn assemble_cells(graph: &mut CellGraph, config: &RoundingConfig) -> CellMesh {
    let mut mesh = CellMesh::default();

    for site in 0..graph.sites.len() {
        let surviving = surviving_slots(graph, site);
        if surviving.is_empty() {
            emit_circle(&mut mesh, graph.sites[site].position, config);
            continue;
        }

        let mut polygon = Vec::new();
        for (k, &current) in surviving.iter().enumerate() {
            let next = surviving[(k + 1) % surviving.len()];
            let (Some(current_chord), Some(next_chord)) =
                (graph.adjusted(site, current), graph.adjusted(site, next))
            else {
                continue;
            };

            // A shared corner exists when the next chord starts at an
            // intersection resolved on the face the two chords enclose.
            let corner_face = graph.face_id([
                site,
                graph.sites[site].neighbors[current],
                graph.sites[site].neighbors[next],
            ]);
            let corner = corner_face.and_then(|fid| graph.faces[fid].intersection);
            if graph.from_intersection(site, next)[0] {
                if let (Some(fid), Some(point)) = (corner_face, corner) {
                    let id = match graph.faces[fid].emitted {
                        Some(id) => id,
                        None => {
                            let id = mesh.push_vertex(point);
                            graph.faces[fid].emitted = Some(id);
                            id
                        }
                    };
                    polygon.push(id);
                    continue;
                }
            }

            // Chord end, connecting arc (endpoints trimmed), next chord start.
            let id = edge_vertex(&mut mesh, graph, site, current, 1, current_chord[1]);
            polygon.push(id);

            let position = graph.sites[site].position;
            let arc = arc_points(current_chord[1], next_chord[0], position, config.resolution);
            for &point in &arc[1..arc.len() - 1] {
                polygon.push(mesh.push_vertex(point));
            }

            let id = edge_vertex(&mut mesh, graph, site, next, 0, next_chord[0]);
            polygon.push(id);
        }

        polygon.reverse();
        mesh.polygons.push(polygon);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arc_points_endpoints_and_count() {
        let center = DVec2::new(1.0, 1.0);
        let start = center + DVec2::new(0.0, 2.0);
        let end = center + DVec2::new(2.0, 0.0);
        let arc = arc_points(start, end, center, 0.1);

        // Quarter arc of radius 2: length π, about 31 samples.
        let expected = (2.0 * std::f64::consts::FRAC_PI_2 / 0.1_f64).round() as usize;
        assert_eq!(arc.len(), expected);
        assert_relative_eq!(arc[0].x, start.x, epsilon = 1e-9);
        assert_relative_eq!(arc[0].y, start.y, epsilon = 1e-9);
        let last = arc[arc.len() - 1];
        assert_relative_eq!(last.x, end.x, epsilon = 1e-9);
        assert_relative_eq!(last.y, end.y, epsilon = 1e-9);
        for point in &arc {
            assert_relative_eq!(point.distance(center), 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_arc_points_minimum_count() {
        let center = DVec2::ZERO;
        let start = DVec2::new(0.0, 1.0);
        // Tiny clockwise sweep still yields three samples.
        let end = DVec2::new(0.01, 1.0).normalize();
        let arc = arc_points(start, end, center, 10.0);
        assert_eq!(arc.len(), 3);
    }

    #[test]
    fn test_emit_circle_count_and_winding() {
        let config = RoundingConfig {
            radius: 1.0,
            resolution: 0.5,
        };
        let mut mesh = CellMesh::default();
        emit_circle(&mut mesh, DVec2::new(5.0, -2.0), &config);

        let expected = (TAU / 0.5_f64).round() as usize;
        assert_eq!(expected, 13);
        assert_eq!(mesh.vertex_count(), expected);
        assert_eq!(mesh.polygons.len(), 1);
        assert_eq!(mesh.polygons[0].len(), expected);
        // Indices are emitted reversed.
        assert_eq!(mesh.polygons[0][0], expected - 1);
        assert_eq!(mesh.polygons[0][expected - 1], 0);

        for vertex in &mesh.vertices {
            let p = DVec2::new(vertex[0], vertex[1]);
            assert_relative_eq!(p.distance(DVec2::new(5.0, -2.0)), 1.0, epsilon = 1e-9);
            assert_eq!(vertex[2], 0.0);
        }
    }

    #[test]
    fn test_emit_circle_minimum_five() {
        let config = RoundingConfig {
            radius: 0.01,
            resolution: 0.5,
        };
        let mut mesh = CellMesh::default();
        emit_circle(&mut mesh, DVec2::ZERO, &config);
        assert_eq!(mesh.vertex_count(), 5);
    }
}
