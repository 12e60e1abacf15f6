//! Errors.

use thiserror::Error;

use crate::graph::Node;

/// Graph construction and query errors.
#[derive(Error, Clone, PartialEq, Debug)]
pub enum GraphError {
    #[error("Invalid edge {from} -> {to}: cost {cost} must be finite and non-negative")]
    InvalidEdge { from: Node, to: Node, cost: f64 },

    #[error("No such node: {0}")]
    NoSuchNode(Node),
}

/// Errors raised while collecting trips for a client.
#[derive(Error, Clone, PartialEq, Debug)]
pub enum TripError {
    #[error("Route search failed: {0}")]
    Graph(#[from] GraphError),
}
