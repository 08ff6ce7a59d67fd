//! In-memory graph storage
//!
//! One insertion-ordered map per entity kind is simultaneously the
//! existence index, the first-wins dedup source of truth, and the
//! deterministic export order.

use super::edge::Edge;
use super::node::Node;
use super::property::PropertyValue;
use super::types::{EdgeId, NodeId};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::debug;

/// An in-memory property graph
///
/// The graph owns its nodes and edges, keyed by id with insertion order
/// preserved. It grows monotonically: entities can be added and queried but
/// never removed or mutated in place. Insertion is idempotent — re-adding
/// an id that is already present is a silent no-op and the first-inserted
/// entity wins.
///
/// Intended for small to medium graphs that are assembled in memory and
/// then exported for visualization (see [`crate::export`]). All operations
/// are synchronous and single-threaded; wrap the whole graph in one
/// exclusive lock if shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: IndexMap<NodeId, Node>,
    edges: IndexMap<EdgeId, Edge>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Graph {
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// Build a graph from pre-computed entity lists
    ///
    /// Applies the same first-wins dedup as sequential [`Graph::add_node`]
    /// and [`Graph::add_edge`] calls.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut graph = Graph::new();
        for node in nodes {
            graph.add_node(node);
        }
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Add a node unless one with the same id is already present
    ///
    /// Duplicate insertion is a no-op, not an error: the retained node is
    /// the one from the first insertion and later properties are never
    /// merged in. Returns whether the node was inserted.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.id) {
            debug!(id = %node.id, "duplicate node insert ignored");
            return false;
        }
        self.nodes.insert(node.id.clone(), node);
        true
    }

    /// Add an edge unless one with the same id is already present
    ///
    /// Same idempotent-by-id semantics as [`Graph::add_node`]. Endpoint
    /// existence is not validated; edges may reference ids that never
    /// appear as nodes.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if self.edges.contains_key(&edge.id) {
            debug!(id = %edge.id, "duplicate edge insert ignored");
            return false;
        }
        self.edges.insert(edge.id.clone(), edge);
        true
    }

    /// Check whether a node with the given id is present
    pub fn node_exists(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Look up a node by id
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Look up an edge by id
    pub fn get_edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Number of stored nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph holds no nodes and no edges
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Iterate over nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate over edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Every edge incident on a node id, in insertion order
    ///
    /// An edge qualifies if the id is its source or its target, regardless
    /// of the `directed` flag. This is the primitive underlying neighbor
    /// lookup.
    pub fn get_all_edges(&self, node_id: &NodeId) -> Vec<&Edge> {
        self.edges.values().filter(|e| e.touches(node_id)).collect()
    }

    /// Neighbor nodes of a node id, one entry per incident edge
    ///
    /// For each edge returned by [`Graph::get_all_edges`], the other
    /// endpoint is resolved to its stored node. Endpoints with no stored
    /// node are skipped silently. The result mirrors edge multiplicity: a
    /// neighbor reachable through several edges appears once per edge.
    pub fn get_node_neighbors(&self, node_id: &NodeId) -> Vec<&Node> {
        self.get_all_edges(node_id)
            .into_iter()
            .filter_map(|e| self.nodes.get(e.other_endpoint(node_id)))
            .collect()
    }

    /// Union of property names across all nodes
    pub fn get_all_node_property_names(&self) -> FxHashSet<String> {
        self.nodes
            .values()
            .flat_map(|n| n.property_names().map(str::to_string))
            .collect()
    }

    /// Union of property names across all edges
    pub fn get_all_edge_property_names(&self) -> FxHashSet<String> {
        self.edges
            .values()
            .flat_map(|e| e.property_names().map(str::to_string))
            .collect()
    }

    /// Distinct values stored under a property key across all nodes
    ///
    /// First-seen order. Distinctness is by value equality, so `1` and
    /// `1.0` are different values.
    pub fn get_all_node_property_values(&self, key: &str) -> Vec<&PropertyValue> {
        Self::distinct_values(self.nodes.values().filter_map(|n| n.get_property(key)))
    }

    /// Distinct values stored under a property key across all edges
    pub fn get_all_edge_property_values(&self, key: &str) -> Vec<&PropertyValue> {
        Self::distinct_values(self.edges.values().filter_map(|e| e.get_property(key)))
    }

    fn distinct_values<'a>(values: impl Iterator<Item = &'a PropertyValue>) -> Vec<&'a PropertyValue> {
        // PropertyValue holds floats, so it cannot live in a hash set;
        // linear dedup is fine at this scale.
        let mut distinct: Vec<&PropertyValue> = Vec::new();
        for value in values {
            if !distinct.contains(&value) {
                distinct.push(value);
            }
        }
        distinct
    }

    /// All ancestors of a node, in breadth-first discovery order
    ///
    /// A parent of `n` is the source of any directed edge ending at `n`,
    /// or the other endpoint of any undirected edge touching `n` (an
    /// undirected edge has no parent/child distinction). The walk repeats
    /// from each parent and accumulates every ancestor reachable that way.
    ///
    /// The traversal is an explicit worklist with a visited set: it
    /// terminates on cyclic input and reports each ancestor at most once.
    /// Parent ids with no stored node are skipped and not walked through,
    /// matching the neighbor query's behavior for ghost endpoints.
    pub fn get_all_node_parents(&self, node_id: &NodeId) -> Vec<&Node> {
        let mut seen: FxHashSet<&NodeId> = FxHashSet::default();
        seen.insert(node_id);

        let mut queue: VecDeque<&NodeId> = VecDeque::new();
        queue.push_back(node_id);

        let mut parents: Vec<&Node> = Vec::new();
        while let Some(current) = queue.pop_front() {
            for edge in self.edges.values() {
                let parent_id = if edge.ends_at(current) {
                    &edge.source
                } else if !edge.directed && edge.starts_from(current) {
                    &edge.target
                } else {
                    continue;
                };
                if !seen.insert(parent_id) {
                    continue;
                }
                if let Some(node) = self.nodes.get(parent_id) {
                    parents.push(node);
                    queue.push_back(parent_id);
                }
            }
        }
        parents
    }
}
