//! The generic branch-and-bound engine: [`Search`] drives the loop,
//! [`SearchConfig`] configures it, [`SearchCallbacks`] extends it.
//!
//! [`solve`]/[`solve_with`] are the entry points most callers want; reaching
//! for [`Search::new`] directly only matters if the config is reused across
//! several `solve` calls.

pub mod callbacks;
pub mod config;
pub mod cutoff;
pub mod driver;

pub use callbacks::{NoOpCallbacks, SearchCallbacks};
pub use config::{EvalNode, SearchConfig};
pub use cutoff::{Cutoff, NoCutoff, TimeBudget};
pub use driver::{Search, SearchResults};

use crate::abstraction::problem::Problem;
use crate::error::SearchError;

/// Runs branch-and-bound over `problem` under `config`, with no callbacks.
pub fn solve<P: Problem>(problem: P, config: SearchConfig) -> Result<SearchResults<P>, SearchError> {
    let search = Search::new(config)?;
    Ok(search.solve(problem))
}

/// As [`solve`], but wired through a caller-supplied [`SearchCallbacks`] set
/// — e.g. the PFSSP driver's LB5 tightening and insertion local search.
pub fn solve_with<P: Problem, C: SearchCallbacks<P>>(
    problem: P,
    config: SearchConfig,
    callbacks: &mut C,
) -> Result<SearchResults<P>, SearchError> {
    let search = Search::new(config)?;
    Ok(search.run(problem, callbacks))
}
