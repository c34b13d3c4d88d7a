//! A partial (or complete) flow-shop schedule: two fixed ends (`sigma1`
//! growing from machine order, `sigma2` from the reverse) plus a free set
//! still to be placed. `level` parity decides which end the next `push_job`
//! grows — even levels extend `sigma1`, odd levels extend `sigma2`, so the
//! tree alternates ends and keeps both head and tail bounds tight at every
//! depth instead of only at the leaves.

use super::job::Job;
use super::sigma::{Sigma1, Sigma2};

#[derive(Debug, Clone)]
pub struct Permutation {
    pub m: usize,
    pub free_jobs: Vec<Job>,
    pub sigma1: Sigma1,
    pub sigma2: Sigma2,
    pub level: usize,
}

impl Permutation {
    /// Builds a fresh permutation with every job free and both ends empty,
    /// then runs the initial `front_updates`/`back_updates` pass.
    pub fn new(m: usize, free_jobs: Vec<Job>) -> Self {
        let mut perm = Permutation {
            m,
            free_jobs,
            sigma1: Sigma1::empty(m),
            sigma2: Sigma2::empty(m),
            level: 0,
        };
        perm.update_params();
        perm
    }

    pub fn from_processing_times(p: &[Vec<i64>]) -> Self {
        let m = p[0].len();
        let jobs = p.iter().enumerate().map(|(j, row)| Job::new(j, row.clone())).collect();
        Permutation::new(m, jobs)
    }

    /// Wraps a fully-ordered, already-consistent `Sigma1` (every job's
    /// `r[0]` replayed in this order via [`super::job::recompute_r0`] and
    /// pushed with [`Sigma1::job_to_bottom`]) as a complete permutation:
    /// no free jobs, empty tail, `level = n`. Used by NEH and local search,
    /// which both build candidate sequences machine-0-first before scoring
    /// them.
    pub fn from_complete_sigma1(sigma1: Sigma1) -> Self {
        let m = sigma1.c.len();
        let level = sigma1.jobs.len();
        Permutation {
            m,
            free_jobs: Vec::new(),
            sigma2: Sigma2::empty(m),
            sigma1,
            level,
        }
    }

    pub fn sequence(&self) -> Vec<Job> {
        let mut seq = self.sigma1.jobs.clone();
        seq.extend(self.free_jobs.iter().cloned());
        seq.extend(self.sigma2.jobs.iter().cloned());
        seq
    }

    pub fn n_free(&self) -> usize {
        self.free_jobs.len()
    }

    pub fn update_params(&mut self) {
        self.front_updates();
        self.back_updates();
    }

    pub fn front_updates(&mut self) {
        for job in &mut self.free_jobs {
            job.r[0] = self.sigma1.c[0];
            for k in 1..self.m {
                job.r[k] = self.sigma1.c[k].max(job.r[k - 1] + job.p[k - 1]);
            }
        }
    }

    pub fn back_updates(&mut self) {
        let m = self.m - 1;
        for job in &mut self.free_jobs {
            job.q[m] = self.sigma2.c[m];
            for k in 1..=m {
                job.q[m - k] = self.sigma2.c[m - k].max(job.q[m - k + 1] + job.p[m - k + 1]);
            }
        }
    }

    /// Moves the `j`-th free job onto the end `level`'s parity selects, and
    /// refreshes the remaining free jobs' `r`/`q` against the new fixed end.
    pub fn push_job(&mut self, j: usize) {
        let job = self.free_jobs.remove(j);
        if self.level % 2 == 0 {
            self.sigma1.job_to_bottom(job);
            self.front_updates();
        } else {
            self.sigma2.job_to_top(job);
            self.back_updates();
        }
        self.level += 1;
    }

    /// The bound used by `calc_bound`: LB1 while jobs remain free, the exact
    /// makespan once the permutation is complete.
    pub fn calc_lb_1m(&self) -> f64 {
        if self.free_jobs.is_empty() {
            self.calc_lb_full()
        } else {
            self.lower_bound_1m()
        }
    }

    /// The tighter bound `bound_upgrade` folds in: `max(LB1, LB5)`.
    pub fn calc_lb_2m(&self) -> f64 {
        if self.free_jobs.is_empty() {
            self.calc_lb_full()
        } else {
            self.lower_bound_1m().max(self.lower_bound_2m())
        }
    }

    pub fn calc_lb_full(&self) -> f64 {
        (0..self.m)
            .map(|k| (self.sigma1.c[k] + self.sigma2.c[k]) as f64)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn lower_bound_1m(&self) -> f64 {
        (0..self.m)
            .map(|k| {
                let min_r = self.free_jobs.iter().map(|j| j.r[k]).min().unwrap();
                let sum_p: i64 = self.free_jobs.iter().map(|j| j.p[k]).sum();
                let min_q = self.free_jobs.iter().map(|j| j.q[k]).min().unwrap();
                (min_r + sum_p + min_q) as f64
            })
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn lower_bound_2m(&self) -> f64 {
        let mut best = f64::NEG_INFINITY;
        for m1 in 0..self.m - 1 {
            for m2 in (m1 + 1)..self.m {
                let r = self.free_jobs.iter().map(|j| j.r[m1]).min().unwrap();
                let q = self.free_jobs.iter().map(|j| j.q[m2]).min().unwrap();
                let makespan = two_mach_problem(&self.free_jobs, m1, m2);
                best = best.max((r + makespan + q) as f64);
            }
        }
        best
    }

    pub fn is_feasible(&mut self) -> bool {
        let valid = self.free_jobs.is_empty();
        if valid {
            self.compute_starts();
        }
        valid
    }

    /// Recomputes exact `r` (start time) for every job in the complete
    /// sequence, left to right.
    pub fn compute_starts(&mut self) {
        let mut seq = self.sequence();
        for job in &mut seq {
            job.r = vec![0; self.m];
        }
        for m in 1..self.m {
            seq[0].r[m] = seq[0].r[m - 1] + seq[0].p[m - 1];
        }
        for j in 1..seq.len() {
            let prev_r = seq[j - 1].r.clone();
            let prev_p = seq[j - 1].p.clone();
            seq[j].r[0] = prev_r[0] + prev_p[0];
            for m in 1..self.m {
                seq[j].r[m] = (seq[j].r[m - 1] + seq[j].p[m - 1]).max(prev_r[m] + prev_p[m]);
            }
        }
        self.sigma1.jobs = seq;
        self.sigma2.jobs.clear();
    }

    pub fn copy(&self) -> Self {
        Permutation {
            m: self.m,
            free_jobs: self.free_jobs.iter().map(Job::copy).collect(),
            sigma1: self.sigma1.copy(),
            sigma2: self.sigma2.copy(),
            level: self.level,
        }
    }
}

struct Virtual {
    t1: i64,
    t2: i64,
    p1: i64,
    p2: i64,
    lat: i64,
}

/// Johnson's two-machine relaxation: jobs split by whether the machine-`m1`
/// virtual time beats the machine-`m2` one, each half sorted oppositely,
/// then swept to get the two-machine makespan.
pub fn two_mach_problem(jobs: &[Job], m1: usize, m2: usize) -> i64 {
    let all: Vec<Virtual> = jobs
        .iter()
        .map(|job| {
            let lat = job.lat[m2][m1];
            Virtual {
                t1: job.p[m1] + lat,
                t2: job.p[m2] + lat,
                p1: job.p[m1],
                p2: job.p[m2],
                lat,
            }
        })
        .collect();

    let mut first: Vec<&Virtual> = all.iter().filter(|v| v.t1 <= v.t2).collect();
    let mut second: Vec<&Virtual> = all.iter().filter(|v| v.t1 > v.t2).collect();
    first.sort_by_key(|v| v.t1);
    second.sort_by_key(|v| std::cmp::Reverse(v.t2));
    first.extend(second);

    two_mach_makespan(&first)
}

/// Sweeps Johnson's order, accumulating each machine's completion time.
fn two_mach_makespan(order: &[&Virtual]) -> i64 {
    let mut time_m1 = 0i64;
    let mut time_m2 = 0i64;
    for v in order {
        time_m1 += v.p1;
        time_m2 = (time_m1 + v.lat).max(time_m2) + v.p2;
    }
    time_m1.max(time_m2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(p: Vec<Vec<i64>>) -> Permutation {
        Permutation::from_processing_times(&p)
    }

    #[test]
    fn lb_full_is_max_combined_completion() {
        let mut perm = perm(vec![vec![2, 3], vec![4, 1]]);
        perm.push_job(0);
        perm.push_job(0);
        assert!(perm.free_jobs.is_empty());
        let lb = perm.calc_lb_full();
        assert!(lb.is_finite());
    }

    #[test]
    fn lb1_is_monotone_as_jobs_fix() {
        let perm = perm(vec![vec![2, 3], vec![4, 1], vec![1, 5]]);
        let lb_before = perm.calc_lb_1m();
        let mut after = perm.copy();
        after.push_job(0);
        let lb_after = after.calc_lb_1m();
        assert!(lb_after >= lb_before - 1e-9);
    }
}
