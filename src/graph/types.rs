//! Identifier types for graph entities

use serde::Serialize;
use std::fmt;

/// Unique identifier for a node
///
/// Identifiers are opaque, caller-supplied strings. The graph never
/// generates or interprets them; uniqueness within one graph is all that
/// matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

/// Unique identifier for an edge
///
/// Caller-supplied, like [`NodeId`]. Callers that want endpoint-level
/// deduplication derive the edge id from the endpoint ids themselves; the
/// graph only ever compares edge ids for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, PartialOrd, Ord)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn new(id: impl Into<String>) -> Self {
        EdgeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EdgeId {
    fn from(id: String) -> Self {
        EdgeId(id)
    }
}

impl From<&str> for EdgeId {
    fn from(id: &str) -> Self {
        EdgeId(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new("server-01");
        assert_eq!(id.as_str(), "server-01");
        assert_eq!(format!("{}", id), "server-01");

        let id2: NodeId = "server-02".into();
        assert_eq!(id2.as_str(), "server-02");
        assert_ne!(id, id2);
    }

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new("e-99");
        assert_eq!(id.as_str(), "e-99");
        assert_eq!(format!("{}", id), "e-99");

        let id2: EdgeId = String::from("e-99").into();
        assert_eq!(id, id2);
    }

    #[test]
    fn test_id_ordering() {
        let id1 = NodeId::new("a");
        let id2 = NodeId::new("b");
        assert!(id1 < id2);
    }
}
