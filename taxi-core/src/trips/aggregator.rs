//! Cheapest trips between a client and any of the shops.

use log::debug;

use crate::errors::TripError;
use crate::graph::Node;
use crate::route::TripSet;

use super::enumerator::TripEnumerator;

/// Runs the enumerator against every shop, keeping the globally cheapest trips.
pub struct TripAggregator<'g> {
    enumerator: TripEnumerator<'g>,
    shops: Vec<Node>,
}

impl<'g> TripAggregator<'g> {
    pub fn new(enumerator: TripEnumerator<'g>, shops: Vec<Node>) -> Self {
        TripAggregator { enumerator, shops }
    }

    /// Cheapest trips from `client` to any shop.
    ///
    /// A shop cheaper than the trips collected so far replaces them,
    /// a shop with exactly the same cost extends them.
    pub fn trips_to_shop(&self, client: &str) -> Result<TripSet, TripError> {
        let tolerance = self.enumerator.tolerance();
        let mut res = TripSet::new();

        for shop in &self.shops {
            let found = self.enumerator.enumerate(client, shop.as_str())?;
            let cost = match found.cost() {
                Some(cost) => cost,
                None => continue,
            };

            if let Some(best) = res.cost() {
                if tolerance.exceeds(best, cost) {
                    res.clear();
                }
            }
            match res.cost() {
                Some(best) if !tolerance.ties(best, cost) => {}
                _ => {
                    debug!("client {} to shop {}: {} trip(s) at cost {}", client, shop, found.len(), cost);
                    res.append(found);
                }
            }
        }

        Ok(res)
    }

    /// Cheapest trips from any shop to `client`.
    ///
    /// Same accumulation as [`trips_to_shop`](Self::trips_to_shop), except that a shop is folded
    /// in whenever the collected cost is greater than or equal to its own. Since strictly
    /// cheaper shops have already cleared the collected trips at that point, both
    /// directions end up selecting the same shops.
    pub fn trips_from_shop(&self, client: &str) -> Result<TripSet, TripError> {
        let tolerance = self.enumerator.tolerance();
        let mut res = TripSet::new();

        for shop in &self.shops {
            let found = self.enumerator.enumerate(shop.as_str(), client)?;
            let cost = match found.cost() {
                Some(cost) => cost,
                None => continue,
            };

            if let Some(best) = res.cost() {
                if tolerance.exceeds(best, cost) {
                    res.clear();
                }
            }
            match res.cost() {
                Some(best) if !tolerance.at_most(cost, best) => {}
                _ => {
                    debug!("shop {} to client {}: {} trip(s) at cost {}", shop, client, found.len(), cost);
                    res.append(found);
                }
            }
        }

        Ok(res)
    }
}
