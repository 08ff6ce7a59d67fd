//! Export of a graph to serializable representations
//!
//! Two textual forms are produced, both deterministic given stable
//! insertion order:
//! - [`Graph::as_json`]: a standalone JSON document with a `nodes` array
//!   and an `edges` array, the contract consumed by downstream
//!   visualization tooling
//! - [`Graph::as_javascript`]: the same structure embedded as a script
//!   assignment, for static inclusion in a visualizer page
//!
//! Export is one-directional. [`GraphSnapshot`] and the entity types
//! implement `Serialize` only; there is no decoder and re-importing an
//! exported document is out of scope.

use crate::graph::{Edge, Graph, Node};
use serde::Serialize;
use thiserror::Error;
use tracing::trace;

/// Errors that can occur during graph export
#[derive(Error, Debug)]
pub enum ExportError {
    /// A stored property value has no JSON representation (non-finite
    /// float). Insertion is permissive; this surfaces at export time only.
    #[error("graph serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A serializable snapshot of a graph's full state
///
/// Entities appear in insertion order. The snapshot owns clones of the
/// stored entities, so it stays valid after the source graph is dropped
/// and can be handed to any `serde` serializer. There is deliberately no
/// deserialization counterpart.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Snapshot the full graph state for programmatic serialization
    pub fn serialize(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().cloned().collect(),
            edges: self.edges().cloned().collect(),
        }
    }

    /// Render the graph as a pretty-printed JSON document
    ///
    /// Schema:
    ///
    /// ```json
    /// {
    ///   "nodes": [ { "id": "...", "properties": { } } ],
    ///   "edges": [ { "id": "...", "source": "...", "target": "...",
    ///                "directed": true, "properties": { } } ]
    /// }
    /// ```
    ///
    /// Array order is insertion order and property order is property
    /// insertion order, so repeated exports of the same graph are
    /// byte-identical.
    pub fn as_json(&self) -> Result<String, ExportError> {
        trace!(
            nodes = self.node_count(),
            edges = self.edge_count(),
            "exporting graph as JSON"
        );
        Ok(serde_json::to_string_pretty(&self.serialize())?)
    }

    /// Render the graph as a script-host variable assignment
    ///
    /// Produces `const <variable_name> = <literal>;` where the literal is
    /// the [`Graph::as_json`] document, suitable for static inclusion in a
    /// visualizer's source file. Evaluating it binds the variable to the
    /// same structure the JSON document decodes to.
    pub fn as_javascript(&self, variable_name: &str) -> Result<String, ExportError> {
        let literal = self.as_json()?;
        Ok(format!("const {} = {};", variable_name, literal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        let mut a = Node::new("a");
        a.set_property("name", "Alpha");
        a.set_property("weight", 1.5);
        graph.add_node(a);
        graph.add_node(Node::new("b"));
        let mut e = Edge::new("e1", "a", "b");
        e.set_property("since", 2020i64);
        graph.add_edge(e);
        graph.add_edge(Edge::undirected("e2", "b", "a"));
        graph
    }

    #[test]
    fn test_json_schema_fields() {
        let graph = sample_graph();
        let doc: serde_json::Value = serde_json::from_str(&graph.as_json().unwrap()).unwrap();

        let nodes = doc["nodes"].as_array().unwrap();
        let edges = doc["edges"].as_array().unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(edges.len(), 2);

        assert_eq!(nodes[0]["id"], "a");
        assert_eq!(nodes[0]["properties"]["name"], "Alpha");
        assert_eq!(nodes[0]["properties"]["weight"], 1.5);
        assert_eq!(nodes[1]["id"], "b");

        assert_eq!(edges[0]["id"], "e1");
        assert_eq!(edges[0]["source"], "a");
        assert_eq!(edges[0]["target"], "b");
        assert_eq!(edges[0]["directed"], true);
        assert_eq!(edges[0]["properties"]["since"], 2020);
        assert_eq!(edges[1]["directed"], false);
    }

    #[test]
    fn test_empty_graph_export() {
        let graph = Graph::new();
        let doc: serde_json::Value = serde_json::from_str(&graph.as_json().unwrap()).unwrap();
        assert_eq!(doc["nodes"].as_array().unwrap().len(), 0);
        assert_eq!(doc["edges"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_export_is_stable() {
        let graph = sample_graph();
        assert_eq!(graph.as_json().unwrap(), graph.as_json().unwrap());
    }

    #[test]
    fn test_javascript_assignment_wraps_json() {
        let graph = sample_graph();
        let js = graph.as_javascript("graphData").unwrap();

        assert!(js.starts_with("const graphData = {"));
        assert!(js.ends_with(';'));

        let literal = js
            .strip_prefix("const graphData = ")
            .and_then(|s| s.strip_suffix(';'))
            .unwrap();
        let decoded: serde_json::Value = serde_json::from_str(literal).unwrap();
        let from_json: serde_json::Value =
            serde_json::from_str(&graph.as_json().unwrap()).unwrap();
        assert_eq!(decoded, from_json);
    }

    #[test]
    fn test_non_finite_float_fails_at_export() {
        let mut graph = Graph::new();
        let mut n = Node::new("n");
        n.set_property("bad", f64::NAN);
        // Insertion is permissive
        assert!(graph.add_node(n));
        // Export is strict
        assert!(matches!(
            graph.as_json(),
            Err(ExportError::Serialization(_))
        ));
        assert!(graph.as_javascript("g").is_err());
    }

    #[test]
    fn test_snapshot_outlives_graph() {
        let snapshot = sample_graph().serialize();
        assert_eq!(snapshot.nodes.len(), 2);
        assert_eq!(snapshot.edges.len(), 2);
        assert_eq!(snapshot.nodes[0].id.as_str(), "a");
        assert!(serde_json::to_string(&snapshot).is_ok());
    }
}
