//! All tied cheapest routes between two nodes.

use log::debug;

use crate::cost::CostTolerance;
use crate::errors::TripError;
use crate::pathsearch::{ExcludedRoutes, ShortestPathSolver};
use crate::route::{PathResult, Trip, TripSet};

/// Drives the solver repeatedly for one `(start, end)` pair.
pub struct TripEnumerator<'g> {
    solver: ShortestPathSolver<'g>,
    tolerance: CostTolerance,
}

impl<'g> TripEnumerator<'g> {
    pub fn new(solver: ShortestPathSolver<'g>, tolerance: CostTolerance) -> Self {
        TripEnumerator { solver, tolerance }
    }

    pub fn tolerance(&self) -> CostTolerance {
        self.tolerance
    }

    /// Every route from `start` to `end` whose cost ties the cheapest one.
    ///
    /// Each found route is excluded from the following search, and the loop stops
    /// at the first unreachable result or the first cost above the minimum.
    /// The result is empty iff `end` can't be reached from `start`.
    pub fn enumerate(&self, start: &str, end: &str) -> Result<TripSet, TripError> {
        let mut excluded = ExcludedRoutes::new();
        let mut best_cost = f64::INFINITY;
        let mut res = TripSet::new();

        loop {
            let (route, cost) = match self.solver.solve_to(start, end, &excluded)? {
                PathResult::Reachable { route, cost } => (route, cost),
                PathResult::Unreachable { .. } => break,
            };

            if !self.tolerance.at_most(cost, best_cost) {
                break;
            }
            if res.is_empty() {
                best_cost = cost;
            }

            let is_new = excluded.insert(route.clone());
            debug_assert!(is_new, "route {} returned twice", route);
            res.push(Trip { route, cost });
        }

        debug!("{} -> {}: {} trip(s), cost {:?}", start, end, res.len(), res.cost());
        Ok(res)
    }
}
