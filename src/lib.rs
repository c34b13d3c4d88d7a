//! A generic branch-and-bound search engine, plus two concrete problems built
//! on top of it: a permutation flow-shop scheduler (bounds LB1/LB5, NEH
//! construction, insertion local search) and a single-machine weighted
//! completion-time scheduler with deadlines (Smith's rule, Lagrangian
//! relaxation, dominance pruning).
//!
//! The engine itself knows nothing about either problem: it is generic over
//! [`abstraction::problem::Problem`], and the two concrete problem modules
//! ([`pfssp`], [`deadline`]) are independent implementations of that trait.

pub mod abstraction;
pub mod common;
pub mod deadline;
pub mod error;
pub mod logging;
pub mod node;
pub mod pfssp;
pub mod queue;
pub mod search;

pub use common::{Solution, Status};
pub use error::SearchError;
pub use search::{solve, solve_with, SearchConfig, SearchResults};
