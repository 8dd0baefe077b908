use crate::config::EngineConfig;
use crate::constellation::generate_constellations;
use crate::detect::{
    Galaxy, Supernova, Wormhole, detect_galaxies, detect_supernovas, detect_wormholes,
};
use crate::normalize::{NormalizedNode, normalize_coordinates};
use crate::starfield::{Starfield, generate_starfield};
use serde::{Deserialize, Serialize};
use starmap_core::{Derived, GraphEdge, GraphNode, Viewport, VisualError};
use std::fmt;

/// Steps of the visual-model pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Normalize,
    Supernovas,
    Wormholes,
    Galaxies,
    Starfield,
    Constellations,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normalize => "normalize",
            Self::Supernovas => "supernovas",
            Self::Wormholes => "wormholes",
            Self::Galaxies => "galaxies",
            Self::Starfield => "starfield",
            Self::Constellations => "constellations",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradedStage {
    pub stage: PipelineStage,
    pub reason: VisualError,
}

/// Everything the renderer needs for one frame of the risk graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualModel {
    pub nodes: Vec<NormalizedNode>,
    pub edges: Vec<GraphEdge>,
    pub supernovas: Vec<Supernova>,
    pub wormholes: Vec<Wormhole>,
    pub galaxies: Vec<Galaxy>,
    pub starfield: Starfield,
    /// Stages that fell back to a neutral value. Empty for a clean build.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<DegradedStage>,
}

impl VisualModel {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }

    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            supernovas: self.supernovas.len(),
            wormholes: self.wormholes.len(),
            galaxies: self.galaxies.len(),
            stars: self.starfield.len(),
            degraded: self.degraded.iter().map(|d| d.stage).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub nodes: usize,
    pub edges: usize,
    pub supernovas: usize,
    pub wormholes: usize,
    pub galaxies: usize,
    pub stars: usize,
    pub degraded: Vec<PipelineStage>,
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes:      {}", self.nodes)?;
        writeln!(f, "edges:      {}", self.edges)?;
        writeln!(f, "supernovas: {}", self.supernovas)?;
        writeln!(f, "wormholes:  {}", self.wormholes)?;
        writeln!(f, "galaxies:   {}", self.galaxies)?;
        writeln!(f, "stars:      {}", self.stars)?;
        if self.degraded.is_empty() {
            write!(f, "degraded:   none")
        } else {
            let stages: Vec<String> = self.degraded.iter().map(ToString::to_string).collect();
            write!(f, "degraded:   {}", stages.join(", "))
        }
    }
}

fn settle<T>(stage: PipelineStage, derived: Derived<T>, degraded: &mut Vec<DegradedStage>) -> T {
    match derived {
        Derived::Ok(value) => value,
        Derived::Degraded { value, reason } => {
            // The stage itself has already logged the reason.
            degraded.push(DegradedStage { stage, reason });
            value
        }
    }
}

/// Build the full visual model with the default star count.
pub fn build_visual_model(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    viewport: Viewport,
) -> VisualModel {
    build_visual_model_with(
        nodes,
        edges,
        &EngineConfig {
            viewport,
            ..EngineConfig::default()
        },
    )
}

/// Build the full visual model.
///
/// Stages run in a fixed order: normalize, supernovas, wormholes, galaxies,
/// starfield, constellations. Every stage reads the same input slices, and a
/// stage that cannot complete contributes its neutral value without
/// affecting the others.
pub fn build_visual_model_with(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    config: &EngineConfig,
) -> VisualModel {
    tracing::debug!(
        "Building visual model: {} nodes, {} edges, viewport {}x{}",
        nodes.len(),
        edges.len(),
        config.viewport.width,
        config.viewport.height
    );

    let mut degraded = Vec::new();

    let normalized = settle(
        PipelineStage::Normalize,
        normalize_coordinates(nodes, config.viewport),
        &mut degraded,
    );
    let supernovas = detect_supernovas(nodes);
    let wormholes = detect_wormholes(edges);
    let galaxies = settle(
        PipelineStage::Galaxies,
        detect_galaxies(nodes, edges),
        &mut degraded,
    );
    let starfield = generate_starfield(nodes, config.star_count);
    let constellations = generate_constellations(edges);

    VisualModel {
        nodes: normalized,
        edges: constellations,
        supernovas,
        wormholes,
        galaxies,
        starfield,
        degraded,
    }
}
