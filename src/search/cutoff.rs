//! Wall-clock cutoffs. Ported near-verbatim from the teacher's
//! `TimeBudget`: a background thread sleeps for the budget then flips an
//! `AtomicBool`. It never touches search state, so this is the one thread
//! the engine spawns despite being otherwise single-threaded (§5).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub trait Cutoff {
    fn must_stop(&self) -> bool;
}

/// The default: never stop early, run until the queue is exhausted or
/// optimality is proven.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCutoff;

impl Cutoff for NoCutoff {
    fn must_stop(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
pub struct TimeBudget {
    stop: Arc<AtomicBool>,
}

impl TimeBudget {
    pub fn new(budget: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        std::thread::spawn(move || {
            std::thread::sleep(budget);
            flag.store(true, Ordering::Relaxed);
        });
        TimeBudget { stop }
    }
}

impl Cutoff for TimeBudget {
    fn must_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}
