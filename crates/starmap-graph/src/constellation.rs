use crate::style::compute_edge_color;
use starmap_core::GraphEdge;

/// Edges at or below this strength are not drawn.
pub const MIN_VISIBLE_STRENGTH: f64 = 0.3;

/// Keep the edges strong enough to draw, in input order, filling in a
/// strength-based color where the edge has none.
pub fn generate_constellations(edges: &[GraphEdge]) -> Vec<GraphEdge> {
    edges
        .iter()
        .filter(|edge| edge.strength > MIN_VISIBLE_STRENGTH)
        .map(|edge| {
            let mut edge = edge.clone();
            if edge.color.is_none() {
                edge.color = Some(compute_edge_color(edge.strength).to_hex());
            }
            edge
        })
        .collect()
}
