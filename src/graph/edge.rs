//! Edge implementation for the property graph

use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, NodeId};
use serde::Serialize;

/// An edge in the property graph
///
/// Edges carry:
/// - A unique, caller-supplied id
/// - Source and target node ids (plain identifiers, not live references)
/// - A `directed` flag; an undirected edge connects both endpoints
///   symmetrically for neighbor queries
/// - A free-form property bag
///
/// An edge does not validate that its endpoints exist as nodes; a graph may
/// store edges referencing unknown ids. Equality and hashing are by id
/// alone, so parallel edges between the same endpoints are distinct as long
/// as their ids differ.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Source node (edge goes FROM this node when directed)
    pub source: NodeId,

    /// Target node (edge goes TO this node when directed)
    pub target: NodeId,

    /// Whether the edge has a direction
    pub directed: bool,

    /// Properties associated with this edge
    pub properties: PropertyMap,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(id: impl Into<EdgeId>, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Edge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            directed: true,
            properties: PropertyMap::new(),
        }
    }

    /// Create a new undirected edge
    pub fn undirected(
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> Self {
        Edge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            directed: false,
            properties: PropertyMap::new(),
        }
    }

    /// Create a new edge with properties
    pub fn new_with_properties(
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        directed: bool,
        properties: PropertyMap,
    ) -> Self {
        Edge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            directed,
            properties,
        }
    }

    /// Set a property value, returning the previous value if any
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value.into())
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Check if property exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Get number of properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Iterate over property names in insertion order
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(|k| k.as_str())
    }

    /// Check if this edge connects two specific nodes (in either direction)
    pub fn connects(&self, node1: &NodeId, node2: &NodeId) -> bool {
        (self.source == *node1 && self.target == *node2)
            || (self.source == *node2 && self.target == *node1)
    }

    /// Check if this edge goes FROM a specific node
    pub fn starts_from(&self, node: &NodeId) -> bool {
        self.source == *node
    }

    /// Check if this edge goes TO a specific node
    pub fn ends_at(&self, node: &NodeId) -> bool {
        self.target == *node
    }

    /// Check if this edge is incident on a node, at either endpoint
    pub fn touches(&self, node: &NodeId) -> bool {
        self.source == *node || self.target == *node
    }

    /// Given one endpoint id, return the other endpoint
    ///
    /// For a self-loop both endpoints are the same id and that id is
    /// returned. The caller is expected to pass an id this edge touches.
    pub fn other_endpoint(&self, node: &NodeId) -> &NodeId {
        if self.source == *node {
            &self.target
        } else {
            &self.source
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
