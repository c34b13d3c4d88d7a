//! Insertion-neighbourhood local search ("best improvement") over a
//! complete sequence: try removing every job and reinserting it at every
//! other position, keep the single best improving move.

use super::job::{recompute_r0, Job};
use super::neh::build_sigma1;

/// Returns the best strictly-improving reordering of `sequence`, or `None`
/// if no single remove-reinsert move beats `base_cost` (the caller's
/// current makespan). `j ∈ {i, i+1}` is skipped per spec.md §4.3: both are
/// no-ops (same position, or the symmetric shift of a single slot).
pub fn best_insertion(mut sequence: Vec<Job>, base_cost: f64) -> Option<Vec<Job>> {
    let n = sequence.len();
    if n < 2 {
        return None;
    }
    recompute_r0(&mut sequence);

    let mut best_cost = base_cost;
    let mut best_seq: Option<Vec<Job>> = None;

    for i in 0..n {
        for j in 0..n {
            if j == i || j == i + 1 {
                continue;
            }
            let mut trial: Vec<Job> = sequence.iter().cloned().collect();
            let job = trial.remove(i);
            trial.insert(j, job);
            let sigma1 = build_sigma1(trial.clone());
            let cost = *sigma1.c.iter().max().unwrap() as f64;
            if cost < best_cost {
                best_cost = cost;
                best_seq = Some(trial);
            }
        }
    }

    best_seq
}
