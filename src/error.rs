//! Fail-fast construction errors.
//!
//! Domain-level outcomes (infeasibility, time/iteration limits) are never
//! represented here: they live on [`crate::common::Solution::status`] and a
//! call to [`crate::search::solve`] always returns a result. `SearchError`
//! covers only the handful of things that must be rejected before a search
//! ever starts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The machine-precedence graph (assembly variant) contains a cycle.
    #[error("machine-precedence graph contains a cycle")]
    CyclicPrecedence,

    /// A branching rule, tolerance, or other configuration value is invalid.
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),

    /// `configure_logfile` could not open its target file.
    #[error("failed to open log file")]
    LogFile(#[from] std::io::Error),
}
