//! Routing core for the taxi trip simulator.
//!
//! Builds a directed weighted graph, enumerates every minimum-cost route between
//! two nodes (ties included), aggregates them across the set of shop nodes
//! and renders the per-client report.

pub use self::cost::CostTolerance;
pub use self::errors::{GraphError, TripError};
pub use self::format::TripFormatter;
pub use self::graph::{Edge, Node, WeightedGraph};
pub use self::pathsearch::{Direction, ExcludedRoutes, ShortestPathSolver};
pub use self::route::{PathResult, Route, Trip, TripSet};
pub use self::trips::{TripAggregator, TripEnumerator};

mod cost;
mod errors;
mod format;
mod graph;
mod route;
mod trips;

pub mod pathsearch;
