//! Constructive heuristics that build a complete permutation from scratch:
//! Nawaz-Enscore-Ham (1983) insertion construction, and Palmer's (1965)
//! slope-index sort as a cheaper alternative warmstart.

use super::job::{recompute_r0, Job};
use super::permutation::Permutation;
use super::sigma::Sigma1;

/// Replays `jobs` onto a fresh `Sigma1`, first refreshing `r[0]` for this
/// exact order. The shared building block every candidate ordering below
/// is scored through.
pub(crate) fn build_sigma1(mut jobs: Vec<Job>) -> Sigma1 {
    let m = jobs[0].p.len();
    recompute_r0(&mut jobs);
    let mut sigma1 = Sigma1::empty(m);
    for job in jobs {
        sigma1.job_to_bottom(job);
    }
    sigma1
}

fn makespan(sigma1: &Sigma1) -> i64 {
    *sigma1.c.iter().max().unwrap()
}

/// Palmer's (1965) quick constructive: sort by slope index descending,
/// push in that order. Cheap, looser than NEH.
pub fn quick_constructive(mut jobs: Vec<Job>) -> Permutation {
    jobs.sort_by(|a, b| b.slope.partial_cmp(&a.slope).unwrap());
    Permutation::from_complete_sigma1(build_sigma1(jobs))
}

/// Nawaz-Enscore-Ham (1983): sort jobs by total processing time descending,
/// seed with the better of the two orderings of the longest two jobs, then
/// insert every remaining job (in that sorted order) at whichever position
/// of the growing sequence minimises the resulting makespan.
pub fn neh_constructive(mut jobs: Vec<Job>) -> Permutation {
    jobs.sort_by_key(|j| std::cmp::Reverse(j.total_p()));

    let order_a = vec![jobs[0].clone(), jobs[1].clone()];
    let order_b = vec![jobs[1].clone(), jobs[0].clone()];
    let cost_a = makespan(&build_sigma1(order_a.clone()));
    let cost_b = makespan(&build_sigma1(order_b.clone()));
    let mut current = if cost_a <= cost_b { order_a } else { order_b };

    for job in jobs.into_iter().skip(2) {
        let mut best_cost = i64::MAX;
        let mut best_seq = None;
        for i in 0..=current.len() {
            let mut trial: Vec<Job> = current.iter().cloned().collect();
            trial.insert(i, job.clone());
            let cost = makespan(&build_sigma1(trial.clone()));
            if cost < best_cost {
                best_cost = cost;
                best_seq = Some(trial);
            }
        }
        current = best_seq.expect("at least the position after the last job is always tried");
    }

    Permutation::from_complete_sigma1(build_sigma1(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pfssp::job::Job;

    fn jobs(p: Vec<Vec<i64>>) -> Vec<Job> {
        p.into_iter().enumerate().map(|(j, row)| Job::new(j, row)).collect()
    }

    #[test]
    fn neh_matches_scenario_s3() {
        let p = vec![
            vec![5, 9, 8, 10, 1],
            vec![9, 3, 10, 1, 8],
            vec![9, 4, 5, 8, 6],
            vec![4, 8, 8, 7, 2],
        ];
        let perm = neh_constructive(jobs(p));
        assert_eq!(perm.free_jobs.len(), 0);
        assert_eq!(makespan(&perm.sigma1), 54);
    }

    #[test]
    fn neh_produces_a_permutation_of_every_job() {
        let p = vec![vec![5, 9, 7, 4], vec![9, 3, 3, 8], vec![8, 10, 5, 6], vec![1, 8, 6, 2]];
        let perm = neh_constructive(jobs(p));
        let mut ids: Vec<usize> = perm.sigma1.jobs.iter().map(|j| j.id).collect();
        ids.sort();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }
}
