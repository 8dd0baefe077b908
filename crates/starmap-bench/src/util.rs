use starmap_core::{GraphEdge, GraphNode, NodeType};

const NODE_TYPES: [NodeType; 5] = [
    NodeType::HydraHead,
    NodeType::Cluster,
    NodeType::Entity,
    NodeType::Token,
    NodeType::Chain,
];

/// Deterministic synthetic risk graph: nodes on a spiral, each linked to the
/// next one and to the nearest preceding cluster.
pub fn generate_synthetic_graph(node_count: usize) -> (Vec<GraphNode>, Vec<GraphEdge>) {
    let mut nodes = Vec::with_capacity(node_count);
    let mut edges = Vec::with_capacity(node_count * 2);
    let mut last_cluster: Option<usize> = None;

    for i in 0..node_count {
        let angle = i as f64 * 0.35;
        let radius = 5.0 + i as f64 * 0.8;
        let node_type = NODE_TYPES[i % NODE_TYPES.len()];
        nodes.push(GraphNode::new(
            format!("node_{}", i),
            node_type,
            radius * angle.cos(),
            radius * angle.sin(),
            (i % 17) as f64 * 3.0 - 24.0,
            (i * 37 % 100) as f64 / 100.0,
        ));

        if i > 0 {
            edges.push(GraphEdge::new(
                format!("node_{}", i - 1),
                format!("node_{}", i),
                (i * 53 % 100) as f64 / 100.0,
            ));
        }
        if let Some(cluster) = last_cluster {
            edges.push(GraphEdge::new(
                format!("node_{}", cluster),
                format!("node_{}", i),
                0.5,
            ));
        }
        if node_type == NodeType::Cluster {
            last_cluster = Some(i);
        }
    }

    (nodes, edges)
}
