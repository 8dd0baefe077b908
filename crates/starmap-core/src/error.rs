use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Malformed or edge-case input met while deriving part of a visual model.
///
/// None of these are fatal. Public engine operations absorb them and fall
/// back to a neutral value; see [`crate::Derived`].
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualError {
    #[error("node {node_id} has a non-finite {axis} coordinate")]
    NonFiniteCoordinate { node_id: String, axis: Axis },
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("node {node_id} has a non-finite risk level")]
    NonFiniteRisk { node_id: String },
    #[error("edge {source_id} -> {target_id} has a non-finite strength")]
    NonFiniteStrength { source_id: String, target_id: String },
    #[error("galaxy around {seed_id} overflows to a non-finite center or radius")]
    NonFiniteGeometry { seed_id: String },
}
