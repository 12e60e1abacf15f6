//! Directed weighted graph.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::GraphError;

/// Opaque node identifier. Ordered lexicographically.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Node(String);

impl Node {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Node(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Node {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Node {
    fn from(id: &str) -> Self {
        Node(id.to_string())
    }
}

impl From<String> for Node {
    fn from(id: String) -> Self {
        Node(id)
    }
}

/// Directed edge with a non-negative finite cost.
#[derive(Clone, PartialEq, Debug)]
pub struct Edge {
    pub source: Node,
    pub destination: Node,
    pub cost: f64,
}

/// Directed weighted graph. Nodes are created on first reference.
///
/// Parallel edges are kept as is. Incoming edges are indexed as well,
/// so that distances *to* a node can be computed without rebuilding the graph.
#[derive(Clone, Default, Debug)]
pub struct WeightedGraph {
    /// Links node to the list of its outgoing edges, in insertion order.
    outgoing: BTreeMap<Node, Vec<Edge>>,
    /// Links node to the list of its incoming edges, in insertion order.
    incoming: BTreeMap<Node, Vec<Edge>>,
    edge_count: usize,
}

impl WeightedGraph {
    /// Create new empty graph.
    pub fn new() -> Self {
        WeightedGraph::default()
    }

    /// Insert node `id` with no edges, unless it already exists.
    pub fn ensure_node<N: Into<Node>>(&mut self, id: N) {
        let id = id.into();
        if !self.outgoing.contains_key(&id) {
            self.incoming.insert(id.clone(), Vec::new());
            self.outgoing.insert(id, Vec::new());
        }
    }

    /// Add edge `source -> destination`, creating both endpoints if needed.
    pub fn add_edge<S: Into<Node>, D: Into<Node>>(&mut self, source: S, destination: D, cost: f64) -> Result<(), GraphError> {
        let (source, destination) = (source.into(), destination.into());
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidEdge { from: source, to: destination, cost });
        }

        self.ensure_node(source.clone());
        self.ensure_node(destination.clone());

        let edge = Edge { source, destination, cost };
        if let Some(edges) = self.incoming.get_mut(&edge.destination) {
            edges.push(edge.clone());
        }
        if let Some(edges) = self.outgoing.get_mut(&edge.source) {
            edges.push(edge);
        }
        self.edge_count += 1;

        Ok(())
    }

    /// Outgoing edges of `node`. Empty for unknown nodes.
    pub fn edges_from(&self, node: &str) -> &[Edge] {
        self.outgoing.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Incoming edges of `node`. Empty for unknown nodes.
    pub fn edges_into(&self, node: &str) -> &[Edge] {
        self.incoming.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cheapest edge cost from `node` to each of its direct successors.
    pub fn cheapest_successors(&self, node: &str) -> BTreeMap<&Node, f64> {
        let mut res = BTreeMap::new();
        for edge in self.edges_from(node) {
            let cost = res.entry(&edge.destination).or_insert(edge.cost);
            if edge.cost < *cost {
                *cost = edge.cost;
            }
        }
        res
    }

    pub fn contains(&self, node: &str) -> bool {
        self.outgoing.contains_key(node)
    }

    /// Stored node identifier equal to `node`, if any.
    pub fn node(&self, node: &str) -> Option<&Node> {
        self.outgoing.get_key_value(node).map(|(n, _)| n)
    }

    /// All nodes, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.outgoing.keys()
    }

    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
