use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of entity a graph node stands for.
///
/// Deserialization never fails: type strings the API adds later land in
/// [`NodeType::Unknown`] so a newer backend cannot break rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum NodeType {
    HydraHead,
    Cluster,
    Entity,
    Token,
    Chain,
    #[default]
    Unknown,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::HydraHead => "hydra_head",
            NodeType::Cluster => "cluster",
            NodeType::Entity => "entity",
            NodeType::Token => "token",
            NodeType::Chain => "chain",
            NodeType::Unknown => "unknown",
        }
    }
}

impl FromStr for NodeType {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "hydra_head" => NodeType::HydraHead,
            "cluster" => NodeType::Cluster,
            "entity" => NodeType::Entity,
            "token" => NodeType::Token,
            "chain" => NodeType::Chain,
            _ => NodeType::Unknown,
        })
    }
}

impl From<String> for NodeType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_round_trip_through_str() {
        for kind in [
            NodeType::HydraHead,
            NodeType::Cluster,
            NodeType::Entity,
            NodeType::Token,
            NodeType::Chain,
        ] {
            assert_eq!(kind.as_str().parse::<NodeType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unrecognized_type_deserializes_to_unknown() {
        let kind: NodeType = serde_json::from_str(r#""wallet""#).unwrap();
        assert_eq!(kind, NodeType::Unknown);

        let kind: NodeType = serde_json::from_str(r#""hydra_head""#).unwrap();
        assert_eq!(kind, NodeType::HydraHead);
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&NodeType::HydraHead).unwrap();
        assert_eq!(json, r#""hydra_head""#);
    }
}
