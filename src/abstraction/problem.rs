//! The `Problem` contract: anything the search driver can branch-and-bound
//! over.
//!
//! Monomorphised generics are used throughout (`Search<P: Problem>`) rather
//! than `dyn Problem` — the trait is called on every node of the hot loop,
//! and a closed, compile-time-specialised driver per concrete problem is
//! cheaper than a vtable and lets the optimizer see through `branch`/
//! `calc_bound`.

use crate::common::{Solution, Status};

/// An optimization (sub)problem: owns its own [`Solution`].
///
/// Implementors are expected to be cheap to clone-on-branch: `branch`
/// produces already-specialised children (e.g. with one more job fixed),
/// not abstract diffs the driver has to apply.
pub trait Problem: Sized {
    /// Current solution triple (cost, lb, status).
    fn solution(&self) -> &Solution;

    fn solution_mut(&mut self) -> &mut Solution;

    /// Lower bound of the relaxation at this node. `+inf` means "relaxation
    /// infeasible", which fathoms the node.
    fn calc_bound(&mut self) -> f64;

    /// Whether this (sub)problem, taken as a complete instance, is feasible.
    /// Takes `&mut self` because a positive answer may need to commit
    /// final derived state (e.g. PFSSP's exact per-job start times), not
    /// just inspect it.
    fn is_feasible(&mut self) -> bool;

    /// Child (sub)problems produced by branching. An empty vector means
    /// "no children" (cutoff), not an error.
    fn branch(&self) -> Vec<Self>;

    /// An optional feasible starting solution, used to initialise the
    /// incumbent before the root node is even evaluated. `None` by default.
    fn warmstart(&self) -> Option<Self> {
        None
    }

    /// `deep = true` duplicates every owned buffer; `deep = false` may share
    /// immutable substructure (processing times, latency tables) by
    /// reference where this is otherwise guaranteed not to be mutated.
    fn copy(&self, deep: bool) -> Self;

    /// Lower bound of the current solution.
    fn lb(&self) -> f64 {
        self.solution().lb
    }

    /// Runs `calc_bound` and records the result on `solution.lb`.
    fn compute_bound(&mut self) {
        let lb = self.calc_bound();
        self.solution_mut().set_lb(lb);
    }

    /// Runs `is_feasible` and records the outcome on `solution`.
    fn check_feasible(&mut self) -> bool {
        let feasible = self.is_feasible();
        if feasible {
            self.solution_mut().set_feasible();
        } else {
            self.solution_mut().set_infeasible();
        }
        feasible
    }

    /// Overwrites the solution outright; if no bound had been computed yet,
    /// computes one so `solution.lb` stays consistent with the invariant.
    fn set_solution(&mut self, solution: Solution) {
        let had_no_solution = self.solution().status == Status::NoSolution;
        *self.solution_mut() = solution;
        if had_no_solution {
            self.compute_bound();
        }
    }
}
