//! Taxi trip simulation: one report per client.

use log::info;

use taxi_core::{CostTolerance, ShortestPathSolver, TripAggregator, TripEnumerator, TripError, TripFormatter};
use taxi_input::Scenario;

/// Reports for every client of `scenario`, in declaration order.
pub fn simulate(scenario: &Scenario, tolerance: CostTolerance) -> Result<Vec<String>, TripError> {
    info!(
        "{} node(s), {} edge(s), {} shop(s), {} client(s)",
        scenario.graph.node_count(),
        scenario.graph.edge_count(),
        scenario.shops.len(),
        scenario.clients.len(),
    );

    let solver = ShortestPathSolver::new(&scenario.graph);
    let aggregator = TripAggregator::new(TripEnumerator::new(solver, tolerance), scenario.shops.clone());

    let mut reports = Vec::with_capacity(scenario.clients.len());
    for client in &scenario.clients {
        let to_client = aggregator.trips_from_shop(client.as_str())?;
        let to_shop = aggregator.trips_to_shop(client.as_str())?;
        reports.push(TripFormatter::format(client, &to_client, &to_shop));
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> Vec<String> {
        let scenario = Scenario::parse(input).unwrap();
        simulate(&scenario, CostTolerance::default()).unwrap()
    }

    #[test]
    fn test_tied_shops_both_printed() {
        let reports = run("3\nA B 2 C 2\nB A 1\nC A 1\n2\nB C\n1\nA\n");
        assert_eq!(reports, vec!["client A\ntaxi B\nB A\ntaxi C\nC A\nshop B\nA B\nshop C\nA C"]);
    }

    #[test]
    fn test_parallel_edges_single_route() {
        let reports = run("3\nA B 2 B 3 C 5\nB A 1\nC A 1\n2\nB C\n1\nA\n");
        assert_eq!(reports, vec!["client A\ntaxi B\nB A\ntaxi C\nC A\nshop B\nA B"]);
    }

    #[test]
    fn test_multiple_solutions() {
        let reports = run("4\nS X 1.5 Y 1\nX C 1\nY C 1.5\nC S 2.75\n1\nS\n1\nC\n");
        assert_eq!(reports, vec!["client C\ntaxi S\nmultiple solutions cost 2\nshop S\nC S"]);
    }

    #[test]
    fn test_cannot_be_helped() {
        let reports = run("2\nA B 1\nB\n1\nB\n2\nA B\n");
        assert_eq!(reports, vec!["client A\ncannot be helped", "client B\ntaxi B\nB\nshop B\nB"]);
    }

    #[test]
    fn test_no_clients() {
        assert!(run("1\nA\n1\nA\n0\n\n").is_empty());
    }
}
