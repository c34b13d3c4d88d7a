//! Smith ordering → block partition → per-job Lagrangian multipliers. This
//! is what tightens the single-machine deadline relaxation: within each
//! maximal run of binding deadlines (a "block"), the multiplier chain
//! recursion propagates back to front so the augmented cost never
//! undershoots the true weighted completion time.

use super::job::Job;
use super::smith;

#[derive(Debug, Clone)]
pub struct LagrangianHelper {
    /// Earliest-first order Smith's rule settled on (or the input order
    /// unchanged, if Smith's rule failed).
    pub smith: Vec<Job>,
    /// Cumulative processing time through each position of `smith`.
    pub completion_times: Vec<i64>,
    /// One non-negative multiplier per job, aligned with `smith`.
    pub lagrangian_multipliers: Vec<f64>,
    /// Maximal runs of `smith` whose deadlines remain binding.
    pub blocks: Vec<Vec<Job>>,
    pub success: bool,
}

impl LagrangianHelper {
    pub fn new(jobs: &[Job], total_time: Option<i64>) -> Self {
        let result = smith::apply(jobs, total_time, true);
        let smith = result.jobs;
        let success = result.success;
        let completion_times = completion_times(&smith);
        let blocks = compute_blocks(&smith, &completion_times);
        let lagrangian_multipliers = multipliers(&blocks);
        LagrangianHelper {
            smith,
            completion_times,
            lagrangian_multipliers,
            blocks,
            success,
        }
    }
}

fn completion_times(smith: &[Job]) -> Vec<i64> {
    let mut c = 0i64;
    smith
        .iter()
        .map(|job| {
            c += job.p;
            c
        })
        .collect()
}

/// Partitions `smith` into maximal runs whose deadlines still bind: a block
/// closes before job `i+1` once the running max deadline no longer exceeds
/// `completion_times[i+1]`. `max_d` is the running max over the whole order,
/// not reset per block, matching the original's partition. The final job
/// always joins whatever block is open when the scan ends, even a singleton
/// list.
fn compute_blocks(smith: &[Job], completion_times: &[i64]) -> Vec<Vec<Job>> {
    let n = smith.len();
    if n == 0 {
        return Vec::new();
    }
    let mut blocks: Vec<Vec<Job>> = vec![vec![smith[0]]];
    if n == 1 {
        return blocks;
    }
    let mut max_d = smith[0].d;
    for (i, job) in smith.iter().enumerate().take(n - 1).skip(1) {
        max_d = max_d.max(job.d);
        if max_d > completion_times[i + 1] {
            blocks.last_mut().unwrap().push(*job);
        } else {
            blocks.push(vec![*job]);
        }
    }
    blocks.last_mut().unwrap().push(smith[n - 1]);
    blocks
}

/// Processes blocks from last to first and, within each, jobs from last to
/// first: the last job of a block always gets multiplier `0`; every job
/// ahead of it inherits a multiplier derived from the one behind it, clamped
/// at `0`.
fn multipliers(blocks: &[Vec<Job>]) -> Vec<f64> {
    let mut rev: Vec<f64> = Vec::new();
    for block in blocks.iter().rev() {
        let Some((&last, rest)) = block.split_last() else { continue };
        let mut lag_mult = 0.0f64;
        rev.push(lag_mult);
        let mut last_job = last;
        for job in rest.iter().rev() {
            lag_mult = (0.0f64)
                .max((job.p as f64 / last_job.p as f64) * (last_job.w as f64 + lag_mult) - job.w as f64);
            rev.push(lag_mult);
            last_job = *job;
        }
    }
    rev.reverse();
    rev
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs() -> Vec<Job> {
        vec![
            Job::new(0, 4, 1, 10),
            Job::new(1, 3, 1, 20),
            Job::new(2, 8, 1, 20),
            Job::new(3, 2, 1, 30),
            Job::new(4, 7, 1, 30),
            Job::new(5, 6, 1, 30),
        ]
    }

    #[test]
    fn multipliers_are_non_negative() {
        let helper = LagrangianHelper::new(&jobs(), None);
        assert!(helper.success);
        assert!(helper.lagrangian_multipliers.iter().all(|&l| l >= 0.0));
    }

    #[test]
    fn blocks_partition_every_job_exactly_once() {
        let helper = LagrangianHelper::new(&jobs(), None);
        let total: usize = helper.blocks.iter().map(|b| b.len()).sum();
        assert_eq!(total, helper.smith.len());
    }

    #[test]
    fn singleton_job_list_forms_one_block_without_duplication() {
        let single = vec![Job::new(0, 4, 1, 10)];
        let helper = LagrangianHelper::new(&single, None);
        assert_eq!(helper.blocks.len(), 1);
        assert_eq!(helper.blocks[0].len(), 1);
    }
}
