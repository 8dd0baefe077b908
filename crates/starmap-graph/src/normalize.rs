use serde::{Deserialize, Serialize};
use starmap_core::{Axis, Derived, GraphNode, Viewport, VisualError};

/// Half-depth of the normalized z range; z lands in `[-Z_DEPTH, Z_DEPTH]`.
pub const Z_DEPTH: f64 = 100.0;

/// A graph node with its position rescaled into the viewport volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedNode {
    #[serde(flatten)]
    pub node: GraphNode,
    pub normalized_x: f64,
    pub normalized_y: f64,
    pub normalized_z: f64,
}

impl NormalizedNode {
    fn zeroed(node: &GraphNode) -> Self {
        Self {
            node: node.clone(),
            normalized_x: 0.0,
            normalized_y: 0.0,
            normalized_z: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct AxisRange {
    min: f64,
    span: f64,
}

impl AxisRange {
    fn of(values: impl Iterator<Item = f64>) -> Self {
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        let span = max - min;
        // Flat axes get a unit span so every node maps to the low end.
        let span = if span == 0.0 { 1.0 } else { span };
        Self { min, span }
    }

    fn unit(&self, value: f64) -> f64 {
        (value - self.min) / self.span
    }
}

/// Rescale node positions into the viewport: x to `[0, width]`, y to
/// `[0, height]`, z to `[-100, 100]`.
pub fn try_normalize_coordinates(
    nodes: &[GraphNode],
    viewport: Viewport,
) -> Result<Vec<NormalizedNode>, VisualError> {
    if !viewport.is_valid() {
        return Err(VisualError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if nodes.is_empty() {
        return Ok(Vec::new());
    }

    if let Some((node, axis)) = nodes
        .iter()
        .find_map(|node| node.non_finite_axis().map(|axis| (node, axis)))
    {
        return Err(VisualError::NonFiniteCoordinate {
            node_id: node.id.clone(),
            axis,
        });
    }

    let x_range = AxisRange::of(nodes.iter().map(|n| n.x));
    let y_range = AxisRange::of(nodes.iter().map(|n| n.y));
    let z_range = AxisRange::of(nodes.iter().map(|n| n.z));

    nodes
        .iter()
        .map(|node| {
            let normalized = NormalizedNode {
                node: node.clone(),
                normalized_x: x_range.unit(node.x) * viewport.width,
                normalized_y: y_range.unit(node.y) * viewport.height,
                normalized_z: z_range.unit(node.z) * (2.0 * Z_DEPTH) - Z_DEPTH,
            };
            // Spans wider than f64::MAX overflow to infinity and poison the ratio.
            for (value, axis) in [
                (normalized.normalized_x, Axis::X),
                (normalized.normalized_y, Axis::Y),
                (normalized.normalized_z, Axis::Z),
            ] {
                if !value.is_finite() {
                    return Err(VisualError::NonFiniteCoordinate {
                        node_id: node.id.clone(),
                        axis,
                    });
                }
            }
            Ok(normalized)
        })
        .collect()
}

/// Like [`try_normalize_coordinates`], but never fails: on bad input every
/// node comes back with zeroed normalized coordinates.
pub fn normalize_coordinates(
    nodes: &[GraphNode],
    viewport: Viewport,
) -> Derived<Vec<NormalizedNode>> {
    let derived = Derived::from_result(try_normalize_coordinates(nodes, viewport), || {
        nodes.iter().map(NormalizedNode::zeroed).collect()
    });
    if let Some(reason) = derived.reason() {
        tracing::warn!("Coordinate normalization fell back to zeroed positions: {}", reason);
    }
    derived
}

#[cfg(test)]
mod tests {
    use super::*;
    use starmap_core::NodeType;

    fn node(id: &str, x: f64, y: f64, z: f64) -> GraphNode {
        GraphNode::new(id, NodeType::Entity, x, y, z, 0.5)
    }

    #[test]
    fn test_empty_input() {
        let result = normalize_coordinates(&[], Viewport::default());
        assert!(!result.is_degraded());
        assert!(result.value().is_empty());
    }

    #[test]
    fn test_rescales_to_viewport() {
        let nodes = vec![node("a", -10.0, 0.0, 5.0), node("b", 10.0, 50.0, 15.0)];
        let result = normalize_coordinates(&nodes, Viewport::default()).into_value();

        assert_eq!(result[0].normalized_x, 0.0);
        assert_eq!(result[0].normalized_y, 0.0);
        assert_eq!(result[0].normalized_z, -100.0);
        assert_eq!(result[1].normalized_x, 800.0);
        assert_eq!(result[1].normalized_y, 600.0);
        assert_eq!(result[1].normalized_z, 100.0);
        assert_eq!(result[1].node.id, "b");
    }

    #[test]
    fn test_flat_axis_does_not_divide_by_zero() {
        let nodes = vec![node("a", 3.0, 1.0, 7.0), node("b", 3.0, 2.0, 7.0)];
        let result = normalize_coordinates(&nodes, Viewport::new(100.0, 100.0));

        assert!(!result.is_degraded());
        let result = result.into_value();
        assert!(result.iter().all(|n| n.normalized_x == 0.0));
        assert!(result.iter().all(|n| n.normalized_z == -Z_DEPTH));
        assert_eq!(result[1].normalized_y, 100.0);
    }

    #[test]
    fn test_single_node() {
        let result = normalize_coordinates(&[node("solo", 42.0, -3.0, 9.0)], Viewport::default())
            .into_value();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].normalized_x, 0.0);
        assert_eq!(result[0].normalized_y, 0.0);
    }

    #[test]
    fn test_nan_coordinate_degrades_to_zero() {
        let nodes = vec![node("a", 0.0, 0.0, 0.0), node("bad", 1.0, f64::NAN, 0.0)];
        let result = normalize_coordinates(&nodes, Viewport::default());

        assert_eq!(
            result.reason(),
            Some(&VisualError::NonFiniteCoordinate {
                node_id: "bad".to_string(),
                axis: Axis::Y,
            })
        );
        let value = result.into_value();
        assert_eq!(value.len(), 2);
        assert!(value.iter().all(|n| n.normalized_x == 0.0
            && n.normalized_y == 0.0
            && n.normalized_z == 0.0));
    }

    #[test]
    fn test_overflowing_span_degrades() {
        let nodes = vec![node("lo", -f64::MAX, 0.0, 0.0), node("hi", f64::MAX, 0.0, 0.0)];
        let result = normalize_coordinates(&nodes, Viewport::default());
        assert!(result.is_degraded());
        assert_eq!(result.value().len(), 2);
    }

    #[test]
    fn test_invalid_viewport_degrades() {
        let nodes = vec![node("a", 0.0, 0.0, 0.0)];
        let result = normalize_coordinates(&nodes, Viewport::new(-800.0, 600.0));
        assert!(matches!(
            result.reason(),
            Some(VisualError::InvalidViewport { .. })
        ));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn node_strategy() -> impl Strategy<Value = GraphNode> {
            (-1.0e6f64..1.0e6, -1.0e6f64..1.0e6, -1.0e6f64..1.0e6)
                .prop_map(|(x, y, z)| node("n", x, y, z))
        }

        proptest! {
            #[test]
            fn prop_normalized_positions_stay_in_viewport(
                nodes in proptest::collection::vec(node_strategy(), 0..40),
                width in 1.0f64..4000.0,
                height in 1.0f64..4000.0,
            ) {
                let result = normalize_coordinates(&nodes, Viewport::new(width, height));
                prop_assert!(!result.is_degraded());

                let result = result.into_value();
                prop_assert_eq!(result.len(), nodes.len());
                for n in &result {
                    prop_assert!((0.0..=width).contains(&n.normalized_x));
                    prop_assert!((0.0..=height).contains(&n.normalized_y));
                    prop_assert!((-Z_DEPTH..=Z_DEPTH).contains(&n.normalized_z));
                }
            }
        }
    }
}
