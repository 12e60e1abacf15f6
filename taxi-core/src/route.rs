//! Routes and their costs.

use std::fmt;
use std::slice;

use crate::graph::Node;

/// Non-empty sequence of nodes, each joined to the next by an edge.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Route(Vec<Node>);

impl Route {
    /// Returns `None` for an empty node list.
    pub fn new(nodes: Vec<Node>) -> Option<Self> {
        if nodes.is_empty() {
            None
        } else {
            Some(Route(nodes))
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    pub fn first(&self) -> &Node {
        &self.0[0]
    }

    pub fn last(&self) -> &Node {
        &self.0[self.0.len() - 1]
    }

    /// Number of nodes (not edges).
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Space-separated node list, as printed in trip reports.
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

/// Outcome of a single route search.
#[derive(Clone, PartialEq, Debug)]
pub enum PathResult {
    Reachable { route: Route, cost: f64 },
    Unreachable { destination: Node },
}

impl PathResult {
    /// Route cost, `+inf` when unreachable.
    pub fn cost(&self) -> f64 {
        match self {
            PathResult::Reachable { cost, .. } => *cost,
            PathResult::Unreachable { .. } => f64::INFINITY,
        }
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            PathResult::Reachable { route, .. } => Some(route),
            PathResult::Unreachable { .. } => None,
        }
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathResult::Reachable { route, cost } => write!(f, "({}) {}", cost, route),
            PathResult::Unreachable { destination } => write!(f, "{} is unreachable", destination),
        }
    }
}

/// Reachable route with its cost.
#[derive(Clone, PartialEq, Debug)]
pub struct Trip {
    pub route: Route,
    pub cost: f64,
}

/// Routes sharing the same minimal cost, in the order they were found.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct TripSet {
    trips: Vec<Trip>,
}

impl TripSet {
    pub fn new() -> Self {
        TripSet::default()
    }

    /// Shared cost: the cost of the first trip.
    pub fn cost(&self) -> Option<f64> {
        self.trips.first().map(|t| t.cost)
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.trips.iter().map(|t| &t.route)
    }

    pub(crate) fn push(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    pub(crate) fn append(&mut self, other: TripSet) {
        self.trips.extend(other.trips);
    }

    pub(crate) fn clear(&mut self) {
        self.trips.clear();
    }
}

impl<'a> IntoIterator for &'a TripSet {
    type Item = &'a Trip;
    type IntoIter = slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}

#[cfg(test)]
pub(crate) fn route(nodes: &[&str]) -> Route {
    Route::new(nodes.iter().map(|&n| Node::from(n)).collect()).expect("empty route")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route() {
        assert!(Route::new(Vec::new()).is_none());
        let r = route(&["A", "B", "C"]);
        assert_eq!(r.first().as_str(), "A");
        assert_eq!(r.last().as_str(), "C");
        assert_eq!(r.len(), 3);
        assert_eq!(r.to_string(), "A B C");
        assert_eq!(route(&["A"]).to_string(), "A");
    }

    #[test]
    fn test_path_result() {
        let ok = PathResult::Reachable { route: route(&["A", "B"]), cost: 2.0 };
        let ko = PathResult::Unreachable { destination: "B".into() };
        assert_eq!(ok.route(), Some(&route(&["A", "B"])));
        assert_eq!(ko.route(), None);
        assert_eq!(ok.cost(), 2.0);
        assert_eq!(ko.cost(), f64::INFINITY);
        assert_eq!(ok.to_string(), "(2) A B");
        assert_eq!(ko.to_string(), "B is unreachable");
    }

    #[test]
    fn test_trip_set_cost_is_first() {
        let mut set = TripSet::new();
        assert_eq!(set.cost(), None);
        set.push(Trip { route: route(&["A", "B"]), cost: 3.0 });
        set.push(Trip { route: route(&["A", "C", "B"]), cost: 3.0000000001 });
        assert_eq!(set.cost(), Some(3.0));
        assert_eq!(set.len(), 2);
        set.clear();
        assert!(set.is_empty());
    }
}
