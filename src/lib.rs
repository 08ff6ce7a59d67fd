//! Vizgraph
//!
//! A small, in-memory, general-purpose property graph for building static
//! graphs that are later exported for visualization.
//!
//! The data model is deliberately minimal: nodes and edges carry
//! caller-supplied ids and free-form property bags, insertion is
//! idempotent by id (first insertion wins), and a handful of queries cover
//! incident edges, neighbors, ancestors, and property-name unions. Export
//! produces a deterministic JSON document or a script-literal assignment
//! of the same structure; there is no persistence, no query language, no
//! concurrency, and no re-import of exported graphs.
//!
//! ## Example Usage
//!
//! ```rust
//! use vizgraph::{Edge, Graph, Node, NodeId};
//!
//! let mut graph = Graph::new();
//!
//! // Create nodes
//! let mut alice = Node::new("alice");
//! alice.set_property("name", "Alice");
//! alice.set_property("age", 30i64);
//! graph.add_node(alice);
//! graph.add_node(Node::new("bob"));
//!
//! // Connect them; endpoints are plain ids
//! graph.add_edge(Edge::new("e1", "alice", "bob"));
//!
//! // Query
//! assert!(graph.node_exists(&NodeId::new("alice")));
//! let neighbors = graph.get_node_neighbors(&NodeId::new("alice"));
//! assert_eq!(neighbors.len(), 1);
//!
//! // Export for a visualizer
//! let json = graph.as_json().unwrap();
//! assert!(json.contains("\"nodes\""));
//! let script = graph.as_javascript("graphData").unwrap();
//! assert!(script.starts_with("const graphData = "));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod export;
pub mod graph;

// Re-export main types for convenience
pub use export::{ExportError, GraphSnapshot};
pub use graph::{Edge, EdgeId, Graph, Node, NodeId, PropertyMap, PropertyValue};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
