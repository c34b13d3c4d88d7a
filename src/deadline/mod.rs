//! Single-machine weighted-completion-time scheduling under deadlines:
//! [`job::Job`] is the instance record; [`smith`] applies Smith's rule
//! back-to-front; [`lagrangian::LagrangianHelper`] turns a Smith order into
//! blocks and multipliers; [`problem::DeadlineProblem`] is the
//! [`crate::abstraction::problem::Problem`] implementation the search
//! driver runs, sharing a dominance cache across every descendant of one
//! search. [`generator`] is an optional seeded synthetic-instance source.

pub mod generator;
pub mod job;
pub mod lagrangian;
pub mod problem;
pub mod smith;

pub use job::Job;
pub use problem::DeadlineProblem;
