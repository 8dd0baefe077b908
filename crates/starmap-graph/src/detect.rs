//! Extraction of the high-risk subsets drawn on top of the base graph:
//! supernovas (risky nodes), wormholes (strong edges) and galaxies
//! (clusters with their direct neighbours).

use crate::style::compute_edge_color;
use serde::{Deserialize, Serialize};
use starmap_core::{Derived, GraphEdge, GraphNode, NodeType, Vec3, VisualError};
use std::collections::{HashMap, HashSet};

pub const SUPERNOVA_THRESHOLD: f64 = 0.70;
pub const WORMHOLE_THRESHOLD: f64 = 0.70;

/// Extra pulse rate per unit of risk above [`SUPERNOVA_THRESHOLD`].
const PULSE_RAMP: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supernova {
    #[serde(flatten)]
    pub node: GraphNode,
    pub intensity: f64,
    pub pulse_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wormhole {
    pub edge: GraphEdge,
    pub flow: f64,
    pub color: String,
}

/// A cluster node together with every node one edge away from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Galaxy {
    pub seed_id: String,
    /// The seed first, then its neighbours in edge order.
    pub members: Vec<GraphNode>,
    pub center: Vec3,
    pub radius: f64,
    /// Mean risk level of the members.
    pub risk: f64,
}

impl Galaxy {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

pub fn detect_supernovas(nodes: &[GraphNode]) -> Vec<Supernova> {
    nodes
        .iter()
        .filter(|node| node.risk_level.is_finite() && node.risk_level >= SUPERNOVA_THRESHOLD)
        .map(|node| Supernova {
            node: node.clone(),
            intensity: node.risk_level,
            pulse_speed: 1.0 + (node.risk_level - SUPERNOVA_THRESHOLD) * PULSE_RAMP,
        })
        .collect()
}

pub fn detect_wormholes(edges: &[GraphEdge]) -> Vec<Wormhole> {
    edges
        .iter()
        .filter(|edge| edge.strength.is_finite() && edge.strength >= WORMHOLE_THRESHOLD)
        .map(|edge| Wormhole {
            edge: edge.clone(),
            flow: edge.strength,
            color: edge
                .color
                .clone()
                .unwrap_or_else(|| compute_edge_color(edge.strength).to_hex()),
        })
        .collect()
}

fn build_adjacency(edges: &[GraphEdge]) -> HashMap<&str, Vec<&str>> {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.source_id.as_str())
            .or_default()
            .push(edge.target_id.as_str());
        adjacency
            .entry(edge.target_id.as_str())
            .or_default()
            .push(edge.source_id.as_str());
    }
    adjacency
}

fn summarize(seed_id: &str, members: Vec<GraphNode>) -> Result<Galaxy, VisualError> {
    for member in &members {
        if let Some(axis) = member.non_finite_axis() {
            return Err(VisualError::NonFiniteCoordinate {
                node_id: member.id.clone(),
                axis,
            });
        }
        if !member.risk_level.is_finite() {
            return Err(VisualError::NonFiniteRisk {
                node_id: member.id.clone(),
            });
        }
    }

    let count = members.len() as f64;
    let sum = members.iter().fold(Vec3::ZERO, |acc, m| {
        Vec3::new(acc.x + m.x, acc.y + m.y, acc.z + m.z)
    });
    let center = Vec3::new(sum.x / count, sum.y / count, sum.z / count);
    let radius = members
        .iter()
        .map(|m| center.distance(&m.position()))
        .fold(0.0, f64::max);
    let risk = members.iter().map(|m| m.risk_level).sum::<f64>() / count;

    // Finite but huge inputs can still overflow the sums and distances.
    if !center.is_finite() || !radius.is_finite() || !risk.is_finite() {
        return Err(VisualError::NonFiniteGeometry {
            seed_id: seed_id.to_string(),
        });
    }

    Ok(Galaxy {
        seed_id: seed_id.to_string(),
        members,
        center,
        radius,
        risk,
    })
}

/// Summarize every cluster node that has at least one neighbour present in
/// `nodes`, one result per cluster in input order.
fn galaxy_results(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
) -> Vec<Result<Galaxy, VisualError>> {
    let adjacency = build_adjacency(edges);

    let mut by_id: HashMap<&str, &GraphNode> = HashMap::with_capacity(nodes.len());
    for node in nodes {
        // First occurrence wins for duplicated ids.
        by_id.entry(node.id.as_str()).or_insert(node);
    }

    let mut results = Vec::new();
    for seed in nodes.iter().filter(|n| n.node_type == NodeType::Cluster) {
        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(seed.id.as_str());
        let mut members = vec![seed.clone()];

        for &neighbour_id in adjacency.get(seed.id.as_str()).into_iter().flatten() {
            if !seen.insert(neighbour_id) {
                continue;
            }
            match by_id.get(neighbour_id) {
                Some(&neighbour) => members.push(neighbour.clone()),
                None => {
                    tracing::debug!(
                        "Cluster {} links to {} which is not in the node list",
                        seed.id,
                        neighbour_id
                    );
                }
            }
        }

        if members.len() > 1 {
            results.push(summarize(&seed.id, members));
        }
    }

    results
}

/// One galaxy per cluster node that has at least one neighbour present in
/// `nodes`. Overlapping galaxies are reported separately. Fails on the first
/// galaxy that cannot be summarized.
pub fn try_detect_galaxies(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
) -> Result<Vec<Galaxy>, VisualError> {
    galaxy_results(nodes, edges).into_iter().collect()
}

/// Like [`try_detect_galaxies`], but never fails: a galaxy that cannot be
/// summarized is left out and the rest are kept. The first such failure is
/// reported as the degradation reason.
pub fn detect_galaxies(nodes: &[GraphNode], edges: &[GraphEdge]) -> Derived<Vec<Galaxy>> {
    let mut galaxies = Vec::new();
    let mut first_failure = None;

    for result in galaxy_results(nodes, edges) {
        match result {
            Ok(galaxy) => galaxies.push(galaxy),
            Err(reason) => {
                tracing::warn!("Skipping galaxy: {}", reason);
                first_failure.get_or_insert(reason);
            }
        }
    }

    match first_failure {
        None => Derived::Ok(galaxies),
        Some(reason) => Derived::Degraded {
            value: galaxies,
            reason,
        },
    }
}
