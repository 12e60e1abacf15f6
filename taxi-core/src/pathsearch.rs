//! Path search in a weighted graph.

pub use self::dijkstra::{shortest_distances, Direction};
pub use self::solver::{ExcludedRoutes, ShortestPathSolver};

mod dijkstra;
mod frontier;
mod solver;
