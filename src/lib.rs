//! Rounded Voronoi cell tessellation
//!
//! A standalone 2D geometry kernel that turns a Delaunay triangulation of a
//! point set into smooth, bubble-like cells: each Voronoi-like boundary is
//! replaced by a mix of straight chords and circular arcs of a caller-chosen
//! radius.
//!
//! # Quick Start
//!
//! ```rust
//! use rounded_voronoi::*;
//!
//! let sites = vec![
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(3.0, 0.0),
//!     DVec2::new(0.0, 3.0),
//! ];
//!
//! let config = RoundingConfigBuilder::new()
//!     .radius(2.0)
//!     .unwrap()
//!     .resolution(0.5)
//!     .build()
//!     .unwrap();
//!
//! let mesh = generate_rounded_cells(&sites, &config).unwrap();
//! println!("Generated {} polygons", mesh.polygon_count());
//! ```
//!
//! The kernel itself never triangulates: pass a precomputed
//! [`Triangulation`] to [`generate_rounded_cells_from_triangulation`] to use
//! any collaborator triangulator.
//!
//! # Features
//!
//! - `delaunay` (default): spade-backed [`triangulate`] adapter and the
//!   [`generate_rounded_cells`] convenience entry point
//! - `serde`: serialization support for configuration, triangulation and
//!   mesh output

// Modules
pub mod config;
pub mod error;
pub mod mesh;
pub mod rounding;
pub mod triangulation;

mod graph;

// Re-export core types for convenience
pub use config::{RoundingConfig, RoundingConfigBuilder, MIN_RESOLUTION};
pub use error::{Result, RoundingError};
pub use mesh::CellMesh;
pub use rounding::generate_rounded_cells_from_triangulation;
pub use triangulation::Triangulation;

#[cfg(feature = "delaunay")]
pub use rounding::generate_rounded_cells;
#[cfg(feature = "delaunay")]
pub use triangulation::triangulate;

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
