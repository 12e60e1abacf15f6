//! Dijkstra distance search.

use std::collections::{HashMap, HashSet};

use crate::graph::{Edge, Node, WeightedGraph};

use super::frontier::Frontier;

/// Which way edges are followed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    /// Distances from the origin to every other node.
    Forward,
    /// Distances from every other node to the origin, following edges backwards.
    Backward,
}

/// Minimum cost between `origin` and every node connected to it in the given direction.
///
/// Nodes that are not connected are absent from the result. `origin` itself maps to `0`.
/// An unknown `origin` yields an empty map.
pub fn shortest_distances<'g>(graph: &'g WeightedGraph, origin: &str, direction: Direction) -> HashMap<&'g Node, f64> {
    match graph.node(origin) {
        Some(origin) => restricted_distances(graph, origin, 0.0, direction, |_| true),
        None => HashMap::new(),
    }
}

/// Same as [`shortest_distances`], starting at `origin_cost` and following only the edges
/// accepted by `allowed`. Costs are accumulated in route order, so a forward search seeded with
/// the cost of a route prefix yields the exact cost of that prefix extended to each node.
pub(super) fn restricted_distances<'g, F>(
    graph: &'g WeightedGraph,
    origin: &'g Node,
    origin_cost: f64,
    direction: Direction,
    allowed: F,
) -> HashMap<&'g Node, f64>
    where F: Fn(&Edge) -> bool
{
    let mut distances = HashMap::<&Node, f64>::new();

    // Algorithm state
    let mut explored = HashSet::<&Node>::new();
    let mut frontier = Frontier::<&Node>::new();

    frontier.push(origin, origin_cost);

    // Run until we have visited every node in the frontier
    while let Some((id, cost)) = frontier.pop() {
        explored.insert(id);
        distances.insert(id, cost);

        let edges = match direction {
            Direction::Forward => graph.edges_from(id.as_str()),
            Direction::Backward => graph.edges_into(id.as_str()),
        };

        for edge in edges.iter().filter(|&e| allowed(e)) {
            let n_node = match direction {
                Direction::Forward => &edge.destination,
                Direction::Backward => &edge.source,
            };

            if explored.contains(n_node) {
                continue;
            }

            frontier.try_insert_or_decrease_cost(&n_node, cost + edge.cost);
        }
    }

    distances
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeightedGraph {
        let mut g = WeightedGraph::new();
        for (s, d, w) in &[
            ("1", "2", 7.0), ("1", "3", 9.0), ("1", "6", 14.0),
            ("2", "3", 10.0), ("2", "4", 15.0),
            ("3", "4", 11.0), ("3", "6", 2.0),
            ("4", "5", 6.0),
            ("6", "5", 9.0),
        ] {
            g.add_edge(*s, *d, *w).unwrap();
        }
        g
    }

    fn dist(d: &HashMap<&Node, f64>, n: &str) -> Option<f64> {
        d.get(&Node::from(n)).copied()
    }

    #[test]
    fn test_forward_distances() {
        let g = sample();
        let d = shortest_distances(&g, "1", Direction::Forward);
        assert_eq!(dist(&d, "1"), Some(0.0));
        assert_eq!(dist(&d, "2"), Some(7.0));
        assert_eq!(dist(&d, "3"), Some(9.0));
        assert_eq!(dist(&d, "4"), Some(20.0));
        assert_eq!(dist(&d, "5"), Some(20.0));
        assert_eq!(dist(&d, "6"), Some(11.0));
    }

    #[test]
    fn test_backward_distances() {
        let g = sample();
        let d = shortest_distances(&g, "5", Direction::Backward);
        assert_eq!(dist(&d, "5"), Some(0.0));
        assert_eq!(dist(&d, "4"), Some(6.0));
        assert_eq!(dist(&d, "6"), Some(9.0));
        assert_eq!(dist(&d, "3"), Some(11.0));
        assert_eq!(dist(&d, "1"), Some(20.0));

        // Edges are directed: nothing reaches "1"
        let d = shortest_distances(&g, "1", Direction::Backward);
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn test_restricted_distances() {
        let g = sample();
        let origin = g.node("1").unwrap();

        // Without 1 -> 3, node 3 is only reached through 2
        let d = restricted_distances(&g, origin, 5.0, Direction::Forward, |e| !(e.source.as_str() == "1" && e.destination.as_str() == "3"));
        assert_eq!(dist(&d, "1"), Some(5.0));
        assert_eq!(dist(&d, "3"), Some(22.0));
        assert_eq!(dist(&d, "6"), Some(19.0));

        // Node 3 cut off entirely
        let d = restricted_distances(&g, origin, 0.0, Direction::Forward, |e| e.destination.as_str() != "3");
        assert_eq!(dist(&d, "3"), None);
        assert_eq!(dist(&d, "4"), Some(22.0));
        assert_eq!(dist(&d, "5"), Some(23.0));
    }

    #[test]
    fn test_unknown_origin() {
        let g = sample();
        assert!(shortest_distances(&g, "42", Direction::Forward).is_empty());
    }
}
