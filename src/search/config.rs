//! Search configuration. A plain struct, not a CLI parser — instance and
//! driver construction are both out of scope for a `clap`-style layer here
//! (spec Non-goal); `SearchConfig` is meant to be built by the embedding
//! application and handed to [`crate::search::solve`].

use crate::error::SearchError;
use crate::queue::discipline::{Dfs, QueueDiscipline};

/// When `compute_bound` runs relative to a node's place in the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalNode {
    /// On enqueue — lets the driver fathom a doomed child before it ever
    /// occupies queue space.
    In,
    /// On dequeue — cheaper per-enqueue, at the cost of holding dead wood
    /// in the queue a little longer.
    Out,
    /// Both. A diagnostic mode; double-evaluates every surviving node and
    /// is not meant to be fast.
    Both,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub rtol: f64,
    pub atol: f64,
    pub eval_node: EvalNode,
    pub save_tree: bool,
    pub discipline: QueueDiscipline,
    pub maxiter: Option<u64>,
    pub timelimit: Option<std::time::Duration>,
    /// Every `restart_freq` dequeues, pull the best-bound node directly
    /// (`pop_min_lb`) instead of the discipline's own next pick.
    pub restart_freq: Option<u64>,
    /// When true, `restart_freq` counts dequeues *since the last incumbent
    /// improvement* rather than dequeues overall.
    pub restart_on_age: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            rtol: 1e-4,
            atol: 1e-4,
            eval_node: EvalNode::In,
            save_tree: false,
            discipline: QueueDiscipline::Dfs(Dfs),
            maxiter: None,
            timelimit: None,
            restart_freq: None,
            restart_on_age: false,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(0.0..=1.0).contains(&self.rtol) {
            return Err(SearchError::InvalidConfig(format!(
                "rtol must lie in [0, 1], got {}",
                self.rtol
            )));
        }
        if self.atol < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "atol must be non-negative, got {}",
                self.atol
            )));
        }
        if self.restart_freq == Some(0) {
            return Err(SearchError::InvalidConfig(
                "restart_freq must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn negative_atol_is_rejected() {
        let cfg = SearchConfig {
            atol: -1.0,
            ..SearchConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rtol_out_of_range_is_rejected() {
        let cfg = SearchConfig {
            rtol: 1.5,
            ..SearchConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
