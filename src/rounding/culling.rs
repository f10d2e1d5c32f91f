//! Hidden-chord culler: removes chords occluded by angular neighbors

use std::f64::consts::TAU;

use crate::graph::CellGraph;

/// Clockwise gap between two neighbor slots, wrapped through 2π when the
/// walk passes the sorted list's end.
fn clockwise_gap(graph: &CellGraph, site: usize, from: usize, to: usize) -> f64 {
    let a_from = graph.sites[site].angles[from];
    let a_to = graph.sites[site].angles[to];
    if from < to {
        a_to - a_from
    } else {
        TAU - (a_to - a_from).abs()
    }
}

/// Mark chords that are fully occluded by angularly-adjacent chords.
///
/// Only sites with more than two neighbors can occlude. The scan starts at
/// the closest neighbor and walks the sorted list circularly: for each
/// surviving chord it advances to the next candidate, hiding candidates that
/// fall in the shadow of the current chord or of the chord right after them.
/// Index arithmetic modulo the neighbor count bounds every walk, so the scan
/// always terminates.
pub(crate) fn cull_hidden_chords(graph: &mut CellGraph) {
    for site in 0..graph.sites.len() {
        let count = graph.sites[site].neighbors.len();
        if count <= 2 {
            continue;
        }

        let start = graph.min_height_slot(site);
        let order: Vec<usize> = (0..count).map(|k| (start + k) % count).collect();

        for (pos, &current) in order.iter().enumerate() {
            if graph.adjusted(site, current).is_none() || graph.hidden(site, current) {
                continue;
            }
            let vis_current = graph.vis_angle(site, current).unwrap_or(0.0);

            for step in 1..=count {
                let candidate = order[(pos + step) % count];
                if graph.adjusted(site, candidate).is_none() {
                    continue;
                }
                if candidate == current {
                    break;
                }
                if graph.hidden(site, candidate) {
                    continue;
                }

                let after = (candidate + 1) % count;
                let h_current = graph.height(site, current);
                let h_candidate = graph.height(site, candidate);
                let h_after = graph.height(site, after);
                let vis_candidate = graph.vis_angle(site, candidate).unwrap_or(0.0);

                // Shadow of the current chord.
                if h_candidate > h_current || h_candidate > h_after {
                    let gap = clockwise_gap(graph, site, current, candidate);
                    if gap + vis_current - vis_candidate > TAU
                        || vis_current > gap + vis_candidate
                    {
                        graph.set_hidden(site, candidate);
                        continue;
                    }
                }

                // Shadow of the chord right after the candidate.
                if h_candidate > h_after {
                    if let Some(vis_after) = graph.vis_angle(site, after) {
                        let gap = clockwise_gap(graph, site, candidate, after);
                        if vis_after - gap > vis_candidate
                            || gap + vis_after - vis_candidate > TAU
                        {
                            graph.set_hidden(site, candidate);
                            continue;
                        }
                    }
                }

                // Candidate survives; it becomes the next scan's current.
                break;
            }
        }
    }
}
