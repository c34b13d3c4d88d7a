//! Two `binary_heap_plus` heaps over the same logical node set: one keyed by
//! the active discipline's priority key (for `enqueue`/`dequeue`), one keyed
//! by `lb` ascending (for `peek_min_lb`/`pop_min_lb`). An `alive` set of
//! stable node indices implements lazy deletion — popping from either heap
//! discards anything no longer in `alive` instead of eagerly patching the
//! other heap, which would need a decrease-key-capable structure neither
//! heap provides.

use std::cmp::Ordering;

use binary_heap_plus::BinaryHeap;
use compare::Compare;
use fxhash::FxHashSet;
use ordered_float::OrderedFloat;

use super::discipline::{PriorityKeyed, QueueDiscipline, QueueEntry};

struct ByDiscipline(QueueDiscipline);

impl Compare<QueueEntry> for ByDiscipline {
    fn compare(&self, a: &QueueEntry, b: &QueueEntry) -> Ordering {
        // binary_heap_plus is a max-heap; we want the *smallest* priority
        // key to come out first, so the comparator is reversed.
        self.0.priority_key(b).cmp(&self.0.priority_key(a))
    }
}

struct ByLb;

impl Compare<QueueEntry> for ByLb {
    fn compare(&self, a: &QueueEntry, b: &QueueEntry) -> Ordering {
        OrderedFloat(b.lb).cmp(&OrderedFloat(a.lb))
    }
}

pub struct PriorityQueue {
    discipline: QueueDiscipline,
    main: BinaryHeap<QueueEntry, ByDiscipline>,
    by_lb: BinaryHeap<QueueEntry, ByLb>,
    alive: FxHashSet<u64>,
}

impl PriorityQueue {
    pub fn new(discipline: QueueDiscipline) -> Self {
        PriorityQueue {
            discipline,
            main: BinaryHeap::from_vec_cmp(Vec::new(), ByDiscipline(discipline)),
            by_lb: BinaryHeap::from_vec_cmp(Vec::new(), ByLb),
            alive: FxHashSet::default(),
        }
    }

    pub fn enqueue(&mut self, entry: QueueEntry) {
        self.alive.insert(entry.index);
        self.main.push(entry);
        self.by_lb.push(entry);
    }

    pub fn dequeue(&mut self) -> Option<QueueEntry> {
        while let Some(entry) = self.main.pop() {
            if self.alive.remove(&entry.index) {
                return Some(entry);
            }
        }
        None
    }

    /// Returns, without removing, the live entry with the smallest `lb`.
    pub fn peek_min_lb(&mut self) -> Option<QueueEntry> {
        while let Some(entry) = self.by_lb.peek().copied() {
            if self.alive.contains(&entry.index) {
                return Some(entry);
            }
            self.by_lb.pop();
        }
        None
    }

    pub fn pop_min_lb(&mut self) -> Option<QueueEntry> {
        while let Some(entry) = self.by_lb.pop() {
            if self.alive.remove(&entry.index) {
                return Some(entry);
            }
        }
        None
    }

    /// Drops every live entry with `lb >= max_lb` and rebuilds both heaps
    /// from what remains, so dead entries stop accumulating in either one.
    pub fn filter_by_lb(&mut self, max_lb: f64) {
        let mut survivors = Vec::with_capacity(self.alive.len());
        while let Some(entry) = self.main.pop() {
            if self.alive.contains(&entry.index) && entry.lb < max_lb {
                survivors.push(entry);
            }
        }
        self.alive = survivors.iter().map(|e| e.index).collect();
        self.by_lb = BinaryHeap::from_vec_cmp(survivors.clone(), ByLb);
        self.main = BinaryHeap::from_vec_cmp(survivors, ByDiscipline(self.discipline));
    }

    pub fn clear(&mut self) {
        self.alive.clear();
        self.main.clear();
        self.by_lb.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    pub fn len(&self) -> usize {
        self.alive.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;

    fn entry(level: usize, lb: f64, index: u64) -> QueueEntry {
        QueueEntry {
            node_id: NodeId(index as usize),
            level,
            lb,
            index,
        }
    }

    #[test]
    fn dfs_dequeues_deepest_first() {
        let mut q = PriorityQueue::new(QueueDiscipline::Dfs(super::super::discipline::Dfs));
        q.enqueue(entry(1, 0.0, 0));
        q.enqueue(entry(3, 0.0, 1));
        q.enqueue(entry(2, 0.0, 2));
        assert_eq!(q.dequeue().unwrap().level, 3);
        assert_eq!(q.dequeue().unwrap().level, 2);
        assert_eq!(q.dequeue().unwrap().level, 1);
        assert!(q.dequeue().is_none());
    }

    #[test]
    fn peek_and_pop_min_lb_ignore_dequeued_entries() {
        let mut q = PriorityQueue::new(QueueDiscipline::Bfs(super::super::discipline::Bfs));
        q.enqueue(entry(0, 5.0, 0));
        q.enqueue(entry(1, 2.0, 1));
        q.enqueue(entry(2, 9.0, 2));
        assert_eq!(q.peek_min_lb().unwrap().lb, 2.0);
        let popped = q.dequeue().unwrap();
        assert_eq!(popped.level, 0);
        // entry 1 (lb 2.0) is still alive, still the minimum
        assert_eq!(q.peek_min_lb().unwrap().lb, 2.0);
        assert_eq!(q.pop_min_lb().unwrap().lb, 2.0);
        assert_eq!(q.peek_min_lb().unwrap().lb, 9.0);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn filter_by_lb_drops_entries_at_or_above_threshold() {
        let mut q = PriorityQueue::new(QueueDiscipline::Bfs(super::super::discipline::Bfs));
        q.enqueue(entry(0, 1.0, 0));
        q.enqueue(entry(1, 5.0, 1));
        q.enqueue(entry(2, 9.0, 2));
        q.filter_by_lb(5.0);
        assert_eq!(q.len(), 1);
        assert_eq!(q.peek_min_lb().unwrap().lb, 1.0);
    }
}
