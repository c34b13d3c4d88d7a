//! The main branch-and-bound loop.
//!
//! Ported control-flow-for-control-flow from the original's
//! `BranchAndBound.solve`/`_enqueue_core`/`_dequeue_core`/`_update_bound`/
//! `_check_termination`, generalised from a `Node`-with-parent-links object
//! graph to the arena of §9's design note. One simplification from the
//! original: because our `lb`-ordered heap gives an `O(log n)` `peek_min_lb`
//! (rather than the original's `O(n)` `min(queue, key=...)` scan), the
//! driver refreshes the global bound after every queue mutation instead of
//! only when the node occupying `bound_node` specifically leaves the
//! queue — cheaper to always refresh than to track which node currently
//! holds that title.

use crate::abstraction::problem::Problem;
use crate::common::Solution;
use crate::error::SearchError;
use crate::logging::SearchLog;
use crate::node::{Arena, NodeId};
use crate::queue::{PriorityQueue, QueueEntry};

use super::callbacks::{NoOpCallbacks, SearchCallbacks};
use super::config::{EvalNode, SearchConfig};
use super::cutoff::{Cutoff, NoCutoff, TimeBudget};

/// Outcome of a completed `solve`: the final solution plus, if one was
/// found, a copy of the problem instance it came from.
pub struct SearchResults<P> {
    pub solution: Solution,
    pub problem: Option<P>,
    pub explored: u64,
}

impl<P> SearchResults<P> {
    pub fn gap(&self) -> f64 {
        if self.solution.cost.is_finite() {
            (self.solution.cost - self.solution.lb).abs() / self.solution.cost.abs()
        } else {
            f64::INFINITY
        }
    }
}

pub struct Search<P: Problem> {
    config: SearchConfig,
    _marker: std::marker::PhantomData<P>,
}

impl<P: Problem> Search<P> {
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Search {
            config,
            _marker: std::marker::PhantomData,
        })
    }

    pub fn solve(&self, problem: P) -> SearchResults<P> {
        let mut callbacks = NoOpCallbacks;
        self.run(problem, &mut callbacks)
    }

    pub fn run<C: SearchCallbacks<P>>(&self, problem: P, callbacks: &mut C) -> SearchResults<P> {
        let cutoff: Box<dyn Cutoff> = match self.config.timelimit {
            Some(d) => Box::new(TimeBudget::new(d)),
            None => Box::new(NoCutoff),
        };

        let mut arena: Arena<P> = Arena::new(self.config.save_tree);
        let mut queue = PriorityQueue::new(self.config.discipline);

        let mut incumbent: Option<Solution> = None;
        let mut incumbent_problem: Option<P> = None;
        let mut bound_lb: Option<f64> = None;
        let mut explored: u64 = 0;
        let mut sol_age: u64 = 0;
        let mut queue_emptied = false;

        SearchLog::header();

        if let Some(mut warm) = problem.warmstart() {
            warm.compute_bound();
            if warm.check_feasible() {
                let sol = *warm.solution();
                if sol.lb < Self::ub_of(&incumbent) {
                    SearchLog::row(explored, sol.cost, sol.lb, 0.0, "Warmstart");
                    incumbent = Some(sol);
                    incumbent_problem = Some(warm);
                }
            }
        }

        let root = arena.new_root(problem);
        let ub = Self::ub_of(&incumbent);
        self.enqueue_core(&mut arena, &mut queue, root, ub, callbacks);
        self.update_bound(&mut queue, &incumbent, &mut bound_lb, explored);

        let mut termination: Option<&'static str> = None;

        while !queue.is_empty() {
            if cutoff.must_stop() {
                termination = Some("Time Limit");
                break;
            }
            if let Some(maxiter) = self.config.maxiter {
                if explored >= maxiter {
                    termination = Some("Iter Limit");
                    break;
                }
            }

            sol_age += 1;
            let entry = self.next_entry(&mut queue, explored, sol_age);
            let entry = match entry {
                Some(e) => e,
                None => break,
            };

            let ub = Self::ub_of(&incumbent);
            let id = match self.dequeue_core(&mut arena, entry, ub, callbacks) {
                Some(id) => id,
                None => {
                    self.update_bound(&mut queue, &incumbent, &mut bound_lb, explored);
                    if let Some(reason) = self.check_termination(&incumbent, bound_lb, explored) {
                        termination = Some(reason);
                        break;
                    }
                    continue;
                }
            };

            explored += 1;

            let is_feasible = {
                let problem_ref = arena.get_mut(id).problem.as_mut().expect("node released early");
                problem_ref.check_feasible()
            };

            if is_feasible {
                let sol = *arena.get(id).problem.as_ref().unwrap().solution();
                if sol.lb < Self::ub_of(&incumbent) {
                    SearchLog::row(
                        explored,
                        sol.cost,
                        bound_lb.unwrap_or(f64::NEG_INFINITY),
                        Self::gap(sol.lb, bound_lb.unwrap_or(f64::NEG_INFINITY)),
                        "New incumbent",
                    );
                    incumbent = Some(sol);
                    sol_age = 0;
                    callbacks.on_solution(&mut arena, id);
                    // `on_solution` (e.g. PFSSP's local search) may have
                    // tightened the node's own solution in place; copy
                    // *after* it runs so the incumbent reflects that.
                    let node_problem = arena.get(id).problem.as_ref().unwrap();
                    incumbent = Some(*node_problem.solution());
                    incumbent_problem = Some(node_problem.copy(true));
                    let ub_now = Self::ub_of(&incumbent);
                    queue.filter_by_lb(ub_now);
                }
            } else {
                let children = arena.branch(id);
                if children.is_empty() {
                    SearchLog::row(
                        explored,
                        Self::ub_of(&incumbent),
                        bound_lb.unwrap_or(f64::NEG_INFINITY),
                        Self::gap(Self::ub_of(&incumbent), bound_lb.unwrap_or(f64::NEG_INFINITY)),
                        "Cutoff",
                    );
                } else {
                    let ub_now = Self::ub_of(&incumbent);
                    for child in children {
                        self.enqueue_core(&mut arena, &mut queue, child, ub_now, callbacks);
                    }
                }
            }

            arena.cleanup(id);
            self.update_bound(&mut queue, &incumbent, &mut bound_lb, explored);

            if let Some(reason) = self.check_termination(&incumbent, bound_lb, explored) {
                termination = Some(reason);
                break;
            }
        }

        if termination.is_none() && queue.is_empty() {
            queue_emptied = true;
        }

        let mut solution = match (&termination, &incumbent) {
            (Some("Optimal"), Some(sol)) => {
                let mut s = *sol;
                s.set_optimal();
                s
            }
            (_, Some(sol)) => *sol,
            (_, None) if queue_emptied => {
                let mut s = Solution::new();
                s.set_lb(bound_lb.unwrap_or(f64::NEG_INFINITY));
                s.set_infeasible();
                s
            }
            _ => {
                let mut s = Solution::new();
                if let Some(lb) = bound_lb {
                    s.set_lb(lb);
                }
                s
            }
        };
        solution.lb = bound_lb.unwrap_or(solution.lb);

        if let Some(reason) = termination {
            SearchLog::row(explored, solution.cost, solution.lb, Self::gap(solution.cost, solution.lb), reason);
        }

        SearchResults {
            solution,
            problem: incumbent_problem,
            explored,
        }
    }

    /// §4.2.7: every `restart_freq` dequeues, pull the best-bound node
    /// directly instead of letting the discipline pick. The `age` variant
    /// counts dequeues since the last incumbent improvement (`sol_age`)
    /// rather than dequeues overall (`explored`).
    fn next_entry(&self, queue: &mut PriorityQueue, explored: u64, sol_age: u64) -> Option<QueueEntry> {
        let counter = if self.config.restart_on_age { sol_age } else { explored };
        let restart = match self.config.restart_freq {
            Some(freq) if freq > 0 => counter % freq == 0,
            _ => false,
        };
        if restart {
            queue.pop_min_lb().or_else(|| queue.dequeue())
        } else {
            queue.dequeue()
        }
    }

    fn enqueue_core<C: SearchCallbacks<P>>(
        &self,
        arena: &mut Arena<P>,
        queue: &mut PriorityQueue,
        id: NodeId,
        ub: f64,
        callbacks: &mut C,
    ) {
        if matches!(self.config.eval_node, EvalNode::In | EvalNode::Both) {
            callbacks.pre_eval(arena.get(id));
            arena.compute_bound(id);
            callbacks.post_eval(arena, id);
        }
        let lb = arena.get(id).lb;
        if lb < ub {
            callbacks.on_enqueue(arena, id);
            let node = arena.get(id);
            queue.enqueue(QueueEntry {
                node_id: id,
                level: node.level,
                lb: node.lb,
                index: node.index,
            });
        } else {
            arena.fathom(id);
            arena.cleanup(id);
        }
    }

    fn dequeue_core<C: SearchCallbacks<P>>(
        &self,
        arena: &mut Arena<P>,
        entry: QueueEntry,
        ub: f64,
        callbacks: &mut C,
    ) -> Option<NodeId> {
        let id = entry.node_id;
        callbacks.on_dequeue(arena, id);
        if matches!(self.config.eval_node, EvalNode::Out | EvalNode::Both) {
            callbacks.pre_eval(arena.get(id));
            arena.compute_bound(id);
            callbacks.post_eval(arena, id);
        }
        let lb = arena.get(id).lb;
        if lb >= ub {
            arena.fathom(id);
            arena.cleanup(id);
            return None;
        }
        Some(id)
    }

    /// §4.2.5: refresh the global lower bound from the queue's best entry,
    /// falling back to the incumbent once the queue is empty. Logs only
    /// when the bound strictly improves.
    fn update_bound(
        &self,
        queue: &mut PriorityQueue,
        incumbent: &Option<Solution>,
        bound_lb: &mut Option<f64>,
        explored: u64,
    ) {
        let new_lb = queue
            .peek_min_lb()
            .map(|e| e.lb)
            .or_else(|| incumbent.map(|s| s.lb));

        if let Some(lb) = new_lb {
            let improved = bound_lb.map_or(true, |old| lb > old);
            if improved {
                let ub = Self::ub_of(incumbent);
                SearchLog::row(explored, ub, lb, Self::gap(ub, lb), "LB update");
            }
            *bound_lb = Some(lb);
        } else {
            *bound_lb = None;
        }
    }

    fn check_termination(&self, incumbent: &Option<Solution>, bound_lb: Option<f64>, explored: u64) -> Option<&'static str> {
        let ub = Self::ub_of(incumbent);
        if let Some(lb) = bound_lb {
            if ub.is_finite() {
                let abs_gap = (ub - lb).abs();
                let rel_gap = abs_gap / ub.abs();
                if abs_gap <= self.config.atol || rel_gap <= self.config.rtol {
                    return Some("Optimal");
                }
            }
        }
        if let Some(maxiter) = self.config.maxiter {
            if explored >= maxiter {
                return Some("Iter Limit");
            }
        }
        None
    }

    fn ub_of(incumbent: &Option<Solution>) -> f64 {
        incumbent.map_or(f64::INFINITY, |s| s.lb)
    }

    fn gap(ub: f64, lb: f64) -> f64 {
        if ub.is_finite() {
            (ub - lb).abs() / ub.abs()
        } else {
            f64::INFINITY
        }
    }
}
