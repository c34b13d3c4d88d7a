//! Smith's rule applied back-to-front: repeatedly pick, among the jobs
//! whose deadline can still accommodate being scheduled last among what
//! remains, the one with the smallest `w/p` ratio — the choice a
//! single-machine weighted completion-time objective favours scheduling
//! latest.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use super::job::Job;

#[derive(Debug, Clone)]
pub struct SmithResult {
    /// Earliest-first order once Smith's rule succeeds; the input jobs
    /// unchanged, in their original order, if it fails.
    pub jobs: Vec<Job>,
    pub success: bool,
}

/// `total_time` defaults to `Σ p` over `jobs`. `reverse` controls whether
/// the back-to-front construction is flipped back to earliest-first before
/// being returned (the driver always wants `reverse = true`; `false` is
/// useful for inspecting the raw back-to-front order in tests).
pub fn apply(jobs: &[Job], total_time: Option<i64>, reverse: bool) -> SmithResult {
    let mut total_time = total_time.unwrap_or_else(|| jobs.iter().map(|j| j.p).sum());

    let mut pool = jobs.to_vec();
    pool.sort_by_key(|j| j.d);

    let mut candidates: BinaryHeap<Reverse<(OrderedFloat<f64>, usize, Job)>> = BinaryHeap::new();
    let mut sol: Vec<Job> = Vec::with_capacity(jobs.len());

    for _ in 0..jobs.len() {
        update_pool(&mut pool, &mut candidates, total_time);
        let Some(Reverse((_, _, job))) = candidates.pop() else {
            return SmithResult {
                jobs: jobs.to_vec(),
                success: false,
            };
        };
        total_time -= job.p;
        sol.push(job);
    }

    if reverse {
        sol.reverse();
    }

    SmithResult { jobs: sol, success: true }
}

fn update_pool(
    pool: &mut Vec<Job>,
    candidates: &mut BinaryHeap<Reverse<(OrderedFloat<f64>, usize, Job)>>,
    total_time: i64,
) {
    while let Some(job) = pool.last() {
        if job.d >= total_time {
            let job = pool.pop().unwrap();
            candidates.push(Reverse((OrderedFloat(job.ratio()), job.id, job)));
        } else {
            break;
        }
    }
}
