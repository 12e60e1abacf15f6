//! Frontier for the Dijkstra algorithm.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

use crate::cost::OrdCost;

/// Frontier for the Dijkstra algorithm.
/// Internally uses binary search to maintain priority queue and hashmap-based index.
pub(super) struct Frontier<T> {
    /// Stores items in cost-descending order, ties in tag-descending order,
    /// so the item with the lowest cost and the smallest tag is placed at the end of the array.
    queue: Vec<(T, f64)>,

    /// Links node tag `<T>` to the index in the `queue`.
    index: HashMap<T, usize>,
}

impl<T> Frontier<T> where T: Clone + Ord + Eq + Hash {
    pub fn new() -> Frontier<T> {
        Frontier {
            queue: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn key_fn(item: &(T, f64)) -> (Reverse<OrdCost>, Reverse<T>) {
        let (t, w) = item;
        (Reverse(OrdCost(*w)), Reverse(t.clone()))
    }

    /// Find position in the queue where to insert a new item.
    fn insertion_pos(&self, item: &(T, f64)) -> usize {
        match self.queue.binary_search_by_key(&Self::key_fn(item), Self::key_fn) {
            Ok(index) | Err(index) => index
        }
    }

    fn insert_at(&mut self, index: usize, item: (T, f64)) {
        self.index.iter_mut().for_each(|(_, old_idx)| if *old_idx >= index { *old_idx += 1; });
        self.index.insert(item.0.clone(), index);
        self.queue.insert(index, item);
    }

    /// Insert a node with associated cost into the priority queue.
    pub fn push(&mut self, tag: T, cost: f64) {
        let item = (tag, cost);
        let index = self.insertion_pos(&item);
        self.insert_at(index, item);
    }

    /// Extract node with the least cost from the queue, smallest tag first on ties.
    pub fn pop(&mut self) -> Option<(T, f64)> {
        let (tag, cost) = self.queue.pop()?;
        // The highest index was removed, other indices stay valid.
        self.index.remove(&tag);
        Some((tag, cost))
    }

    /// Insert a node if it is not in the queue yet,
    /// otherwise update associated cost if the new cost is less than the existing one.
    /// Returns `true` if the node was either inserted or updated.
    pub fn try_insert_or_decrease_cost(&mut self, tag: &T, new_cost: f64) -> bool {
        match self.index.get(tag) {
            Some(&i) if new_cost < self.queue[i].1 => {
                self.queue.remove(i);
                self.index.remove(tag);
                self.index.iter_mut().for_each(|(_, old_idx)| if *old_idx > i { *old_idx -= 1; });
                self.push(tag.clone(), new_cost);
                true
            }
            Some(_) => false,
            None => {
                self.push(tag.clone(), new_cost);
                true
            }
        }
    }
}

#[test]
fn test_push_pop() {
    let mut f = Frontier::new();
    assert_eq!(f.pop(), None);

    f.push("N", 1.0);
    assert_eq!(f.pop(), Some(("N", 1.0)));
    assert_eq!(f.pop(), None);

    f.push("X", 2.0);
    f.push("Y", 1.0);
    assert_eq!(f.pop(), Some(("Y", 1.0)));
    assert_eq!(f.pop(), Some(("X", 2.0)));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_ties_pop_smallest_tag_first() {
    let mut f = Frontier::new();
    f.push("C", 1.0);
    f.push("A", 1.0);
    f.push("B", 1.0);
    f.push("Z", 0.5);
    assert_eq!(f.pop(), Some(("Z", 0.5)));
    assert_eq!(f.pop(), Some(("A", 1.0)));
    assert_eq!(f.pop(), Some(("B", 1.0)));
    assert_eq!(f.pop(), Some(("C", 1.0)));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_decrease_cost() {
    let mut f = Frontier::new();

    assert_eq!(f.try_insert_or_decrease_cost(&"A", 1.0), true);
    assert_eq!(f.pop(), Some(("A", 1.0)));
    assert_eq!(f.pop(), None);

    f.push("X", 1.0);
    assert_eq!(f.try_insert_or_decrease_cost(&"X", 2.0), false);
    assert_eq!(f.pop(), Some(("X", 1.0)));
    assert_eq!(f.pop(), None);

    f.push("X", 1.0);
    f.push("Y", 3.0);
    f.push("W", 4.0);
    assert_eq!(f.try_insert_or_decrease_cost(&"W", 2.0), true);
    assert_eq!(f.try_insert_or_decrease_cost(&"Y", 0.5), true);
    assert_eq!(f.pop(), Some(("Y", 0.5)));
    assert_eq!(f.pop(), Some(("X", 1.0)));
    assert_eq!(f.pop(), Some(("W", 2.0)));
    assert_eq!(f.pop(), None);
}
