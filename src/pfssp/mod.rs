//! Permutation flow-shop scheduling (PFSSP): minimise makespan over an
//! `n x m` processing matrix using two-sided head/tail bounds.
//!
//! [`job::Job`] carries one job's processing row plus its mutable `r`/`q`
//! vectors; [`sigma`] holds the two fixed ends a [`permutation::Permutation`]
//! grows from; [`neh`] and [`local_search`] are the constructive and
//! improvement heuristics; [`problem::PfsspProblem`] is the
//! [`crate::abstraction::problem::Problem`] implementation the search driver
//! runs, paired with [`problem::PfsspCallbacks`] for LB5 tightening and
//! insertion local search on each new incumbent. [`generator`] is an
//! optional seeded synthetic-instance source, the PFSSP counterpart to
//! [`crate::deadline::generator`].

pub mod generator;
pub mod job;
pub mod local_search;
pub mod neh;
pub mod permutation;
pub mod problem;
pub mod sigma;

pub use job::Job;
pub use permutation::Permutation;
pub use problem::{PfsspCallbacks, PfsspProblem, WarmstartStrategy};
