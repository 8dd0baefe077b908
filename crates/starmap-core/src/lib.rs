use serde::{Deserialize, Serialize};
use std::fmt;

pub mod derived;
pub mod error;
pub mod node_type;

pub use derived::Derived;
pub use error::{Axis, VisualError};
pub use node_type::NodeType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Vec3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A node of the risk graph as delivered by the graph-data API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Expected in `[0, 1]`; values outside are tolerated but render neutral.
    #[serde(alias = "riskLevel")]
    pub risk_level: f64,
}

impl GraphNode {
    pub fn new(
        id: impl Into<String>,
        node_type: NodeType,
        x: f64,
        y: f64,
        z: f64,
        risk_level: f64,
    ) -> Self {
        Self {
            id: id.into(),
            node_type,
            x,
            y,
            z,
            risk_level,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// First axis holding a NaN or infinite coordinate.
    pub fn non_finite_axis(&self) -> Option<Axis> {
        if !self.x.is_finite() {
            Some(Axis::X)
        } else if !self.y.is_finite() {
            Some(Axis::Y)
        } else if !self.z.is_finite() {
            Some(Axis::Z)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    #[serde(alias = "source", alias = "sourceId")]
    pub source_id: String,
    #[serde(alias = "target", alias = "targetId")]
    pub target_id: String,
    pub strength: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl GraphEdge {
    pub fn new(source_id: impl Into<String>, target_id: impl Into<String>, strength: f64) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            strength,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Graph payload as returned by the graph-data endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

/// Target drawing area for normalized node positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const DEFAULT_WIDTH: f64 = 800.0;
    pub const DEFAULT_HEIGHT: f64 = 600.0;

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_accepts_api_field_names() {
        let json = r##"{
            "nodes": [
                {"id": "h1", "type": "hydra_head", "x": 1.0, "y": 2.0, "z": 3.0, "riskLevel": 0.9},
                {"id": "w1", "type": "wallet", "x": 0.0, "y": 0.0, "z": 0.0, "risk_level": 0.1}
            ],
            "edges": [
                {"source": "h1", "target": "w1", "strength": 0.5, "color": "#abcdef"}
            ]
        }"##;
        let snapshot: GraphSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.nodes.len(), 2);
        assert_eq!(snapshot.nodes[0].node_type, NodeType::HydraHead);
        assert_eq!(snapshot.nodes[0].risk_level, 0.9);
        assert_eq!(snapshot.nodes[1].node_type, NodeType::Unknown);
        assert_eq!(snapshot.edges[0].source_id, "h1");
        assert_eq!(snapshot.edges[0].color.as_deref(), Some("#abcdef"));
    }

    #[test]
    fn test_snapshot_without_edges() {
        let snapshot: GraphSnapshot = serde_json::from_str(r#"{"nodes": []}"#).unwrap();
        assert!(snapshot.edges.is_empty());
    }

    #[test]
    fn test_vec3_distance() {
        let a = Vec3::new(0.0, 3.0, 0.0);
        let b = Vec3::new(4.0, 0.0, 0.0);
        assert_eq!(a.distance(&b), 5.0);
        assert!(!Vec3::new(f64::NAN, 0.0, 0.0).is_finite());
    }

    #[test]
    fn test_non_finite_axis() {
        let mut node = GraphNode::new("n", NodeType::Entity, 1.0, 2.0, 3.0, 0.5);
        assert_eq!(node.non_finite_axis(), None);
        node.y = f64::NAN;
        node.z = f64::INFINITY;
        assert_eq!(node.non_finite_axis(), Some(Axis::Y));
    }

    #[test]
    fn test_viewport_validity() {
        assert!(Viewport::default().is_valid());
        assert!(Viewport::new(0.0, 0.0).is_valid());
        assert!(!Viewport::new(-1.0, 600.0).is_valid());
        assert!(!Viewport::new(f64::INFINITY, 600.0).is_valid());
    }
}
