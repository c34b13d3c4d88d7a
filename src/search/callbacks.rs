//! Per-node extension points, bracketing the driver's main loop.
//!
//! Every method is a do-nothing default; `NoOpCallbacks` is what `solve`
//! uses. The PFSSP driver (`pfssp::problem::PfsspCallbacks`) overrides
//! `post_eval` to tighten LB1 into LB5 and `on_solution` to run insertion
//! local search, matching what the original's `CallbackBnB` wires up.

use crate::abstraction::problem::Problem;
use crate::node::{Arena, Node, NodeId};

pub trait SearchCallbacks<P: Problem> {
    fn pre_eval(&mut self, _node: &Node<P>) {}

    /// Runs immediately after `compute_bound`. The PFSSP callback set uses
    /// this to call `bound_upgrade` and tighten `node.lb` further.
    fn post_eval(&mut self, _arena: &mut Arena<P>, _id: NodeId) {}

    fn on_enqueue(&mut self, _arena: &Arena<P>, _id: NodeId) {}

    fn on_dequeue(&mut self, _arena: &Arena<P>, _id: NodeId) {}

    /// Runs once a node's solution has been committed as a (possibly new)
    /// incumbent.
    fn on_solution(&mut self, _arena: &mut Arena<P>, _id: NodeId) {}
}

/// The default, do-nothing callback set.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpCallbacks;

impl<P: Problem> SearchCallbacks<P> for NoOpCallbacks {}
