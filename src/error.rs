//! Error types for rounded Voronoi tessellation

use std::fmt;

/// Errors that can occur while building rounded cells
#[derive(Debug, Clone)]
pub enum RoundingError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// The input triangulation violates the collaborator contract
    InvalidTriangulation(String),
    /// The Delaunay triangulator rejected the input sites
    TriangulationFailed(String),
}

impl fmt::Display for RoundingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            RoundingError::InvalidTriangulation(msg) => {
                write!(f, "invalid triangulation: {}", msg)
            }
            RoundingError::TriangulationFailed(msg) => {
                write!(f, "triangulation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for RoundingError {}

/// Result type alias for rounding operations
pub type Result<T> = std::result::Result<T, RoundingError>;
