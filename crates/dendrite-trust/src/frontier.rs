// crates/dendrite-trust/src/frontier.rs
//
// Min-priority frontier for the trust-distance search.
//
// Entries pop in ascending distance order. Equal distances pop in the order
// they were pushed, so the search behaves like a stably re-sorted list.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node waiting to be expanded, with its tentative distance.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    /// Index of the node in the search's node list.
    pub node: usize,
    /// Cumulative distance from the starting moderator.
    pub distance: f64,
    seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    // Reversed so that `BinaryHeap` (a max-heap) yields the smallest distance,
    // then the earliest push.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of nodes ordered by ascending distance.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `node` at `distance`.
    pub fn push(&mut self, node: usize, distance: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            node,
            distance,
            seq,
        });
    }

    /// Remove and return the entry with the lowest distance.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    /// Drop every queued entry, ending the search.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_distance() {
        let mut frontier = Frontier::new();
        frontier.push(0, 0.5);
        frontier.push(1, 0.1);
        frontier.push(2, 0.3);

        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn ties_pop_in_push_order() {
        let mut frontier = Frontier::new();
        frontier.push(7, 0.25);
        frontier.push(3, 0.25);
        frontier.push(5, 0.25);

        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![7, 3, 5]);
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut frontier = Frontier::new();
        frontier.push(0, 0.0);
        frontier.push(1, 0.2);
        assert_eq!(frontier.len(), 2);

        frontier.clear();
        assert!(frontier.is_empty());
        assert!(frontier.pop().is_none());
    }
}
