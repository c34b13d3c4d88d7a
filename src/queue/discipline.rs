//! The four ordering disciplines, as a closed `enum_dispatch` set rather
//! than a trait object — there are exactly four, they are known at compile
//! time, and the driver calls `priority_key` once per enqueue/dequeue.

use enum_dispatch::enum_dispatch;
use ordered_float::OrderedFloat;

use crate::node::NodeId;

/// A lightweight, `Copy` view of the fields a queue needs from a node —
/// the queue never touches the node's owned problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueEntry {
    pub node_id: NodeId,
    pub level: usize,
    pub lb: f64,
    /// Stable, monotonically increasing creation order, used as the final
    /// tie-break.
    pub index: u64,
}

/// `(primary, secondary, tie)`, all mapped to `OrderedFloat` so the four
/// disciplines can share one comparator shape despite mixing `level` (an
/// integer) and `lb` (a float) across primary/secondary slots.
pub type PriorityKey = (OrderedFloat<f64>, OrderedFloat<f64>, OrderedFloat<f64>);

/// Ties are broken in favour of the most recently created node — the same
/// LIFO-leaning tie-break the original's `Node.__lt__` implements by
/// comparing sort indices in reverse.
fn tie_break(entry: &QueueEntry) -> OrderedFloat<f64> {
    OrderedFloat(-(entry.index as f64))
}

#[enum_dispatch]
pub trait PriorityKeyed {
    fn priority_key(&self, entry: &QueueEntry) -> PriorityKey;
}

/// Deepest first, ties by best bound: `(-level, lb)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dfs;

impl PriorityKeyed for Dfs {
    fn priority_key(&self, entry: &QueueEntry) -> PriorityKey {
        (
            OrderedFloat(-(entry.level as f64)),
            OrderedFloat(entry.lb),
            tie_break(entry),
        )
    }
}

/// Shallowest first: `(level, lb)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bfs;

impl PriorityKeyed for Bfs {
    fn priority_key(&self, entry: &QueueEntry) -> PriorityKey {
        (
            OrderedFloat(entry.level as f64),
            OrderedFloat(entry.lb),
            tie_break(entry),
        )
    }
}

/// Best bound first, ties by deeper: `(lb, -level)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BestFirst;

impl PriorityKeyed for BestFirst {
    fn priority_key(&self, entry: &QueueEntry) -> PriorityKey {
        (
            OrderedFloat(entry.lb),
            OrderedFloat(-(entry.level as f64)),
            tie_break(entry),
        )
    }
}

/// Same key as `Dfs`; kept as a distinct variant because it names the mode
/// the PFSSP driver actually runs under (DFS traversal plus `peek_min_lb`/
/// `pop_min_lb`-driven best-bound restarts — see `PriorityQueue`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DfsFlow;

impl PriorityKeyed for DfsFlow {
    fn priority_key(&self, entry: &QueueEntry) -> PriorityKey {
        Dfs.priority_key(entry)
    }
}

#[enum_dispatch(PriorityKeyed)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueDiscipline {
    Dfs(Dfs),
    Bfs(Bfs),
    BestFirst(BestFirst),
    DfsFlow(DfsFlow),
}
