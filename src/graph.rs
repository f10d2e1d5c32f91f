//! Shared site/edge/face arenas for the rounding pipeline
//!
//! The pipeline phases communicate through three dense arenas addressed by
//! integer ids, with canonical-key maps built once from the triangulation.
//! Heights, chords and every derived value live on the canonical edge record
//! and are computed exactly once; sites read them through orientation-aware
//! views, so a second visit from the opposite endpoint can only reuse (and
//! reverse), never recompute.

use std::collections::HashMap;
use std::f64::consts::TAU;

use glam::DVec2;

use crate::error::{Result, RoundingError};
use crate::triangulation::Triangulation;

/// A chord endpoint pair, ordered clockwise as seen from the owning side.
pub(crate) type Chord = [DVec2; 2];

/// Per-site state filled by the adjacency and angular-sort phases.
#[derive(Debug, Clone)]
pub(crate) struct SiteRecord {
    pub position: DVec2,
    /// Neighbor site ids, sorted clockwise once the angular sorter has run.
    pub neighbors: Vec<usize>,
    /// Clockwise angles parallel to `neighbors`; the first entry is 0.
    pub angles: Vec<f64>,
    /// Owning edge ids parallel to `neighbors`.
    pub edge_ids: Vec<usize>,
}

impl SiteRecord {
    /// Angle at slot `k`, with the 2π wraparound sentinel at `k == len`.
    pub fn angle_at(&self, k: usize) -> f64 {
        if k == self.angles.len() {
            TAU
        } else {
            self.angles[k]
        }
    }
}

/// Canonical per-edge state; `a`/`b` orientation is fixed at first discovery.
#[derive(Debug, Clone)]
pub(crate) struct EdgeRecord {
    pub a: usize,
    pub b: usize,
    /// Half the distance between the endpoints.
    pub height: f64,
    /// Chord endpoints as seen from `a`; `None` when `height >= radius`.
    pub chord: Option<Chord>,
    /// Visibility half-angle `arccos(height / radius)`.
    pub vis_angle: Option<f64>,
    /// Chord after intersection folding, as seen from `a`.
    pub adjusted: Option<Chord>,
    /// Whether each adjusted endpoint came from a face intersection.
    pub from_intersection: [bool; 2],
    /// Set by the culler when the chord is occluded.
    pub hidden: bool,
    /// Cache of already-emitted output-vertex ids per chord endpoint.
    pub emitted: [Option<usize>; 2],
}

/// Canonical per-face state, keyed by the sorted corner triple.
#[derive(Debug, Clone)]
pub(crate) struct FaceRecord {
    /// Corners exactly as delivered by the triangulator: (n1, middle, n2).
    pub corners: [usize; 3],
    /// Crossing of the two chords meeting at the middle corner, if any.
    pub intersection: Option<DVec2>,
    /// Cache of the already-emitted output-vertex id for the intersection.
    pub emitted: Option<usize>,
}

pub(crate) struct CellGraph {
    pub sites: Vec<SiteRecord>,
    pub edges: Vec<EdgeRecord>,
    pub faces: Vec<FaceRecord>,
    edge_index: HashMap<(usize, usize), usize>,
    face_index: HashMap<[usize; 3], usize>,
}

impl CellGraph {
    /// Build empty records and the canonical lookup maps.
    ///
    /// Rejects edges joining coincident site positions: a zero-length edge
    /// has no perpendicular-bisector direction, so letting it through would
    /// poison downstream chords with NaN instead of surfacing the bad input.
    pub fn new(sites: &[DVec2], triangulation: &Triangulation) -> Result<Self> {
        triangulation.validate(sites.len())?;

        let mut edge_index = HashMap::with_capacity(triangulation.edges.len());
        let mut edges = Vec::with_capacity(triangulation.edges.len());
        for &(a, b) in &triangulation.edges {
            if sites[a] == sites[b] {
                return Err(RoundingError::InvalidTriangulation(format!(
                    "edge ({}, {}) joins coincident site positions",
                    a, b
                )));
            }
            if edge_index.insert(canonical_pair(a, b), edges.len()).is_some() {
                return Err(RoundingError::InvalidTriangulation(format!(
                    "duplicate edge ({}, {})",
                    a, b
                )));
            }
            edges.push(EdgeRecord {
                a,
                b,
                height: 0.0,
                chord: None,
                vis_angle: None,
                adjusted: None,
                from_intersection: [false; 2],
                hidden: false,
                emitted: [None; 2],
            });
        }

        let mut face_index = HashMap::with_capacity(triangulation.triangles.len());
        let mut faces = Vec::with_capacity(triangulation.triangles.len());
        for &corners in &triangulation.triangles {
            if face_index
                .insert(canonical_triple(corners), faces.len())
                .is_some()
            {
                return Err(RoundingError::InvalidTriangulation(format!(
                    "duplicate triangle ({}, {}, {})",
                    corners[0], corners[1], corners[2]
                )));
            }
            faces.push(FaceRecord {
                corners,
                intersection: None,
                emitted: None,
            });
        }

        let sites = sites
            .iter()
            .map(|&position| SiteRecord {
                position,
                neighbors: Vec::new(),
                angles: Vec::new(),
                edge_ids: Vec::new(),
            })
            .collect();

        Ok(Self {
            sites,
            edges,
            faces,
            edge_index,
            face_index,
        })
    }

    /// Canonical edge id for an unordered site pair.
    #[cfg(test)]
    pub fn edge_id(&self, a: usize, b: usize) -> Option<usize> {
        self.edge_index.get(&canonical_pair(a, b)).copied()
    }

    /// Canonical face id for an unordered corner triple.
    pub fn face_id(&self, corners: [usize; 3]) -> Option<usize> {
        self.face_index.get(&canonical_triple(corners)).copied()
    }

    // Orientation-aware views over the canonical edge records, addressed by
    // a site and a slot in its sorted neighbor list.

    pub fn height(&self, site: usize, slot: usize) -> f64 {
        self.edges[self.sites[site].edge_ids[slot]].height
    }

    pub fn vis_angle(&self, site: usize, slot: usize) -> Option<f64> {
        self.edges[self.sites[site].edge_ids[slot]].vis_angle
    }

    pub fn chord(&self, site: usize, slot: usize) -> Option<Chord> {
        let edge = &self.edges[self.sites[site].edge_ids[slot]];
        edge.chord.map(|c| oriented(c, edge.a == site))
    }

    pub fn adjusted(&self, site: usize, slot: usize) -> Option<Chord> {
        let edge = &self.edges[self.sites[site].edge_ids[slot]];
        edge.adjusted.map(|c| oriented(c, edge.a == site))
    }

    pub fn from_intersection(&self, site: usize, slot: usize) -> [bool; 2] {
        let edge = &self.edges[self.sites[site].edge_ids[slot]];
        let flags = edge.from_intersection;
        if edge.a == site {
            flags
        } else {
            [flags[1], flags[0]]
        }
    }

    pub fn hidden(&self, site: usize, slot: usize) -> bool {
        self.edges[self.sites[site].edge_ids[slot]].hidden
    }

    pub fn set_hidden(&mut self, site: usize, slot: usize) {
        let eid = self.sites[site].edge_ids[slot];
        self.edges[eid].hidden = true;
    }

    /// Slot of the closest neighbor (first occurrence on ties): the
    /// deterministic starting point for the culler and assembler scans.
    pub fn min_height_slot(&self, site: usize) -> usize {
        let mut best = 0;
        for slot in 1..self.sites[site].neighbors.len() {
            if self.height(site, slot) < self.height(site, best) {
                best = slot;
            }
        }
        best
    }
}

fn canonical_pair(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn canonical_triple(mut corners: [usize; 3]) -> [usize; 3] {
    corners.sort_unstable();
    corners
}

fn oriented(chord: Chord, forward: bool) -> Chord {
    if forward {
        chord
    } else {
        [chord[1], chord[0]]
    }
}
