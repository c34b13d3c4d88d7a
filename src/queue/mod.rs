//! The search frontier: a priority queue of node references supporting four
//! ordering disciplines plus the bound-refresh operations the driver needs
//! (`peek_min_lb`, `pop_min_lb`, `filter_by_lb`).

pub mod discipline;
pub mod priority_queue;

pub use discipline::QueueDiscipline;
pub use priority_queue::{PriorityQueue, QueueEntry};
