//! Shortest route search with route exclusion.
//!
//! Routes that are not excluded are split by the longest prefix they share with an
//! excluded route: such a route leaves its prefix through a next hop that no excluded
//! route takes right after that prefix. Each prefix gets one Dijkstra search from its
//! last node, with the other prefix nodes and the taken next hops removed (the spur
//! search of Yen's k-shortest-paths algorithm). The best spur result over all prefixes
//! is the answer, so a call costs one Dijkstra run per distinct excluded prefix.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use log::trace;

use crate::cost::OrdCost;
use crate::errors::GraphError;
use crate::graph::{Edge, Node, WeightedGraph};
use crate::route::{PathResult, Route};

use super::dijkstra::{restricted_distances, shortest_distances, Direction};

/// Routes a search must not return again.
pub type ExcludedRoutes = HashSet<Route>;

/// Prefix tree of the excluded routes: every proper prefix maps to the next hops
/// excluded routes take after it.
type Prefixes<'g> = BTreeMap<Vec<&'g Node>, BTreeSet<&'g Node>>;

/// Route found by a spur search.
struct Candidate<'g> {
    cost: f64,
    nodes: Vec<&'g Node>,
}

impl<'g> Candidate<'g> {
    /// Lower cost first, then smallest predecessor of the destination, then its
    /// predecessor, and so on.
    fn precedes(&self, other: &Candidate<'g>) -> bool {
        let order = OrdCost(self.cost).cmp(&OrdCost(other.cost))
            .then_with(|| self.nodes.iter().rev().cmp(other.nodes.iter().rev()));
        order == Ordering::Less
    }
}

/// Single-source shortest route search over a read-only graph.
pub struct ShortestPathSolver<'g> {
    graph: &'g WeightedGraph,
}

impl<'g> ShortestPathSolver<'g> {
    pub fn new(graph: &'g WeightedGraph) -> Self {
        ShortestPathSolver { graph }
    }

    fn known_node(&self, id: &str) -> Result<&'g Node, GraphError> {
        self.graph.node(id).ok_or_else(|| GraphError::NoSuchNode(Node::from(id)))
    }

    /// Cheapest route from `start` to every node of the graph, skipping `excluded` routes.
    pub fn solve(&self, start: &str, excluded: &ExcludedRoutes) -> Result<BTreeMap<Node, PathResult>, GraphError> {
        let start = self.known_node(start)?;
        let reachable = shortest_distances(self.graph, start.as_str(), Direction::Forward);

        let mut res = BTreeMap::new();
        for node in self.graph.nodes() {
            let result = if reachable.contains_key(node) {
                self.solve_to(start.as_str(), node.as_str(), excluded)?
            } else {
                PathResult::Unreachable { destination: node.clone() }
            };
            res.insert(node.clone(), result);
        }

        Ok(res)
    }

    /// Cheapest route from `start` to `end` that is not in `excluded`.
    ///
    /// Equal-cost routes are returned smallest predecessor first (comparing the
    /// routes backwards from `end`). Returns `Unreachable` when no route exists or
    /// every route has been excluded.
    pub fn solve_to(&self, start: &str, end: &str, excluded: &ExcludedRoutes) -> Result<PathResult, GraphError> {
        let start = self.known_node(start)?;
        let end = self.known_node(end)?;

        let unreachable = || PathResult::Unreachable { destination: end.clone() };

        if start == end {
            return Ok(match Route::new(vec![start.clone()]) {
                Some(route) if !excluded.contains(&route) => PathResult::Reachable { route, cost: 0.0 },
                _ => unreachable(),
            });
        }

        if !shortest_distances(self.graph, end.as_str(), Direction::Backward).contains_key(start) {
            return Ok(unreachable());
        }

        let mut best: Option<Candidate> = None;
        for (prefix, taken) in self.prefixes(start, end, excluded) {
            if let Some(candidate) = self.spur(&prefix, &taken, end) {
                if best.as_ref().map_or(true, |b| candidate.precedes(b)) {
                    best = Some(candidate);
                }
            }
        }

        let (route, cost) = match best {
            Some(c) => match Route::new(c.nodes.into_iter().cloned().collect()) {
                Some(route) => (route, c.cost),
                None => return Ok(unreachable()),
            },
            None => return Ok(unreachable()),
        };

        let res = PathResult::Reachable { route, cost };
        trace!("route {} -> {}: {}", start, end, res);
        Ok(res)
    }

    /// Excluded routes from `start` to `end` as a prefix tree, rooted at `[start]`.
    ///
    /// Routes that repeat a node or leave the graph can't match a real route and are left out.
    fn prefixes(&self, start: &'g Node, end: &'g Node, excluded: &ExcludedRoutes) -> Prefixes<'g> {
        let mut res = Prefixes::new();
        res.insert(vec![start], BTreeSet::new());

        for route in excluded {
            if route.first() != start || route.last() != end {
                continue;
            }
            let nodes = match route.nodes().iter().map(|n| self.graph.node(n.as_str())).collect::<Option<Vec<_>>>() {
                Some(nodes) => nodes,
                None => continue,
            };
            if nodes.iter().collect::<HashSet<_>>().len() != nodes.len() {
                continue;
            }

            for i in 1..nodes.len() {
                res.entry(nodes[..i].to_vec()).or_default().insert(nodes[i]);
            }
        }

        res
    }

    /// Cheapest route that starts with `prefix` and does not continue through any of `taken`.
    fn spur(&self, prefix: &[&'g Node], taken: &BTreeSet<&'g Node>, end: &'g Node) -> Option<Candidate<'g>> {
        let (&spur, root) = prefix.split_last()?;
        let root_cost = self.prefix_cost(prefix)?;

        // Simple routes only: the root can't be entered again
        let allowed = |e: &Edge| {
            !root.iter().any(|&n| *n == e.destination) && !(e.source == *spur && taken.contains(&e.destination))
        };

        let dist = restricted_distances(self.graph, spur, root_cost, Direction::Forward, &allowed);
        let cost = *dist.get(end)?;
        let tail = self.cheapest_tail(spur, end, &dist, &allowed)?;

        let mut nodes = root.to_vec();
        nodes.extend(tail);
        Some(Candidate { cost, nodes })
    }

    /// Cost of `nodes` when each hop takes the cheapest edge, summed in route order.
    fn prefix_cost(&self, nodes: &[&'g Node]) -> Option<f64> {
        nodes.windows(2).try_fold(0.0, |acc, hop| {
            self.graph.cheapest_successors(hop[0].as_str()).get(hop[1]).map(|w| acc + w)
        })
    }

    /// Rebuilds a cheapest route from `spur` to `end` out of the `dist` map, walking back from
    /// `end` and taking at each step the smallest predecessor that keeps the cost exact and can
    /// still be reached from `spur` without going through the nodes already picked.
    fn cheapest_tail<F>(&self, spur: &'g Node, end: &'g Node, dist: &HashMap<&'g Node, f64>, allowed: &F) -> Option<Vec<&'g Node>>
        where F: Fn(&Edge) -> bool
    {
        let mut tail = vec![end];
        let mut picked = HashSet::new();
        picked.insert(end);

        let mut current = end;
        while current != spur {
            let reachable = self.tight_reachable(spur, dist, &picked, allowed);
            let current_cost = *dist.get(current)?;

            let next = self.graph.edges_into(current.as_str()).iter()
                .filter(|&e| allowed(e))
                .filter_map(|e| {
                    let &source = reachable.get(&e.source)?;
                    let &source_cost = dist.get(source)?;
                    if source_cost + e.cost == current_cost { Some(source) } else { None }
                })
                .min()?;

            tail.push(next);
            picked.insert(next);
            current = next;
        }

        tail.reverse();
        Some(tail)
    }

    /// Nodes reachable from `spur` through edges that keep the `dist` cost exact, avoiding `picked`.
    fn tight_reachable<F>(&self, spur: &'g Node, dist: &HashMap<&'g Node, f64>, picked: &HashSet<&'g Node>, allowed: &F) -> HashSet<&'g Node>
        where F: Fn(&Edge) -> bool
    {
        let mut seen = HashSet::new();
        let mut stack = vec![spur];
        seen.insert(spur);

        while let Some(node) = stack.pop() {
            let node_cost = match dist.get(node) {
                Some(&cost) => cost,
                None => continue,
            };
            for edge in self.graph.edges_from(node.as_str()).iter().filter(|&e| allowed(e)) {
                let next = match self.graph.node(edge.destination.as_str()) {
                    Some(next) => next,
                    None => continue,
                };
                if picked.contains(next) || seen.contains(next) {
                    continue;
                }
                if dist.get(next) == Some(&(node_cost + edge.cost)) {
                    seen.insert(next);
                    stack.push(next);
                }
            }
        }

        seen
    }
}
