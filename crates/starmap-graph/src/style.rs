//! Risk Style System
//!
//! Maps risk scores, edge strengths and node types to the colors and sizes
//! the renderer draws with.

use serde::{Serialize, Serializer};
use starmap_core::NodeType;
use std::fmt;

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#ff9100`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// Color Constants
// ============================================================================

// Node risk tiers, most severe first
pub const COLOR_RISK_CRITICAL: Color = Color::rgb(255, 23, 68);
pub const COLOR_RISK_HIGH: Color = Color::rgb(255, 68, 68);
pub const COLOR_RISK_ELEVATED: Color = Color::rgb(255, 145, 0);
pub const COLOR_RISK_MODERATE: Color = Color::rgb(255, 214, 0);
pub const COLOR_RISK_LOW: Color = Color::rgb(118, 255, 3);
pub const COLOR_RISK_MINIMAL: Color = Color::rgb(0, 230, 118);

// Edge strength tiers
pub const COLOR_EDGE_STRONG: Color = Color::rgb(255, 68, 68);
pub const COLOR_EDGE_MEDIUM: Color = Color::rgb(255, 145, 0);
pub const COLOR_EDGE_WEAK: Color = Color::rgb(255, 214, 0);
pub const COLOR_EDGE_FAINT: Color = Color::rgb(64, 196, 255);

// Fallback for anything that cannot be classified
pub const COLOR_NEUTRAL: Color = Color::rgb(255, 255, 255);

// ============================================================================
// Thresholds
// ============================================================================

/// Lower bounds of the node risk tiers, paired with their color.
pub const RISK_TIERS: [(f64, Color); 6] = [
    (0.80, COLOR_RISK_CRITICAL),
    (0.65, COLOR_RISK_HIGH),
    (0.50, COLOR_RISK_ELEVATED),
    (0.35, COLOR_RISK_MODERATE),
    (0.20, COLOR_RISK_LOW),
    (0.0, COLOR_RISK_MINIMAL),
];

pub const EDGE_TIERS: [(f64, Color); 3] = [
    (0.80, COLOR_EDGE_STRONG),
    (0.60, COLOR_EDGE_MEDIUM),
    (0.40, COLOR_EDGE_WEAK),
];

// ============================================================================
// Style Resolution Functions
// ============================================================================

/// Color for a node's risk score.
///
/// Scores outside `[0, 1]` (including NaN) cannot be placed on the scale and
/// render neutral white.
pub fn compute_risk_color(risk_level: f64) -> Color {
    if !(0.0..=1.0).contains(&risk_level) {
        return COLOR_NEUTRAL;
    }

    RISK_TIERS
        .iter()
        .find(|(floor, _)| risk_level >= *floor)
        .map(|&(_, color)| color)
        .unwrap_or(COLOR_NEUTRAL)
}

/// Color for an edge that does not carry one of its own.
pub fn compute_edge_color(strength: f64) -> Color {
    if !strength.is_finite() {
        return COLOR_NEUTRAL;
    }

    EDGE_TIERS
        .iter()
        .find(|(floor, _)| strength >= *floor)
        .map(|&(_, color)| color)
        .unwrap_or(COLOR_EDGE_FAINT)
}

pub fn base_node_size(node_type: NodeType) -> f64 {
    match node_type {
        NodeType::HydraHead => 12.0,
        NodeType::Cluster => 10.0,
        NodeType::Entity => 6.0,
        NodeType::Token => 5.0,
        NodeType::Chain => 4.0,
        NodeType::Unknown => 6.0,
    }
}

/// Rendered radius of a node: the type's base size grown linearly with risk,
/// doubling at a risk of 1.0. A non-finite risk leaves the base size alone.
pub fn compute_node_size(node_type: NodeType, risk_level: f64) -> f64 {
    let risk = if risk_level.is_finite() {
        risk_level
    } else {
        0.0
    };
    base_node_size(node_type) * (1.0 + risk)
}
