//! Collecting every minimum-cost trip between clients and shops.

pub use self::aggregator::TripAggregator;
pub use self::enumerator::TripEnumerator;

mod aggregator;
mod enumerator;
