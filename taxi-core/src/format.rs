//! Per-client trip report.
//!
//! ```text
//! client <id>
//! taxi <start node>
//! <route>                          (a single cheapest route from this taxi)
//! taxi <start node>
//! multiple solutions cost <int>    (several; cost truncated toward zero)
//! shop <end node>
//! <route>
//! ```
//!
//! or `cannot be helped` in place of both blocks when either is empty.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::graph::Node;
use crate::route::{Trip, TripSet};

/// Renders the trips found for a client.
pub struct TripFormatter;

impl TripFormatter {
    /// Report for `client`, given the taxi trips (shop to client) and the shop trips (client to shop).
    /// Trailing whitespace is trimmed.
    pub fn format(client: &Node, to_client: &TripSet, to_shop: &TripSet) -> String {
        let mut res = format!("client {}\n", client);

        if to_client.is_empty() || to_shop.is_empty() {
            res.push_str("cannot be helped\n");
        } else {
            Self::append_block(&mut res, "taxi", to_client, |trip| trip.route.first());
            Self::append_block(&mut res, "shop", to_shop, |trip| trip.route.last());
        }

        res.truncate(res.trim_end().len());
        res
    }

    /// Groups `trips` by anchor node, ascending, and appends one section per group.
    fn append_block<'a, F>(out: &mut String, header: &str, trips: &'a TripSet, anchor: F) where F: Fn(&'a Trip) -> &'a Node {
        let mut groups = BTreeMap::<&Node, Vec<&Trip>>::new();
        for trip in trips {
            groups.entry(anchor(trip)).or_default().push(trip);
        }

        for (node, group) in groups {
            // Writing into a `String` can't fail
            let _ = writeln!(out, "{} {}", header, node);
            match group.as_slice() {
                [single] => {
                    let _ = writeln!(out, "{}", single.route);
                }
                [first, ..] => {
                    let _ = writeln!(out, "multiple solutions cost {}", first.cost.trunc() as i64);
                }
                [] => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::route;

    fn trips(items: &[(&[&str], f64)]) -> TripSet {
        let mut set = TripSet::new();
        for &(nodes, cost) in items {
            set.push(Trip { route: route(nodes), cost });
        }
        set
    }

    #[test]
    fn test_cannot_be_helped() {
        let some = trips(&[(&["S", "C"], 1.0)]);
        let none = TripSet::new();
        let client = Node::from("C");
        assert_eq!(TripFormatter::format(&client, &none, &some), "client C\ncannot be helped");
        assert_eq!(TripFormatter::format(&client, &some, &none), "client C\ncannot be helped");
        assert_eq!(TripFormatter::format(&client, &none, &none), "client C\ncannot be helped");
    }

    #[test]
    fn test_single_routes() {
        let to_client = trips(&[(&["S", "X", "C"], 3.0)]);
        let to_shop = trips(&[(&["C", "B"], 2.0), (&["C", "A"], 2.0)]);
        assert_eq!(
            TripFormatter::format(&Node::from("C"), &to_client, &to_shop),
            "client C\ntaxi S\nS X C\nshop A\nC A\nshop B\nC B",
        );
    }

    #[test]
    fn test_groups_sorted_and_merged() {
        let to_client = trips(&[
            (&["T2", "C"], 4.0),
            (&["T1", "X", "C"], 4.0),
            (&["T2", "Y", "C"], 4.0),
        ]);
        let to_shop = trips(&[(&["C", "X", "S"], 7.0), (&["C", "Y", "S"], 7.0)]);
        assert_eq!(
            TripFormatter::format(&Node::from("C"), &to_client, &to_shop),
            "client C\ntaxi T1\nT1 X C\ntaxi T2\nmultiple solutions cost 4\nshop S\nmultiple solutions cost 7",
        );
    }

    #[test]
    fn test_cost_is_truncated_not_rounded() {
        let to_client = trips(&[(&["S", "A", "C"], 2.9), (&["S", "B", "C"], 2.9)]);
        let to_shop = trips(&[(&["C", "S"], 0.99)]);
        let report = TripFormatter::format(&Node::from("C"), &to_client, &to_shop);
        assert!(report.contains("multiple solutions cost 2\n"), "{}", report);
    }

    #[test]
    fn test_anchor_order_is_lexicographic() {
        let to_client = trips(&[(&["b", "C"], 1.0), (&["B", "C"], 1.0), (&["10", "C"], 1.0), (&["9", "C"], 1.0)]);
        let to_shop = trips(&[(&["C", "S"], 1.0)]);
        let report = TripFormatter::format(&Node::from("C"), &to_client, &to_shop);
        let headers = report.lines().filter(|l| l.starts_with("taxi ")).collect::<Vec<_>>();
        assert_eq!(headers, vec!["taxi 10", "taxi 9", "taxi B", "taxi b"]);
    }
}
