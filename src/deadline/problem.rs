//! The fixed-suffix / unscheduled-prefix `Problem` implementation: `fixed`
//! holds jobs already placed (most-recently-fixed first, i.e. the end of
//! the schedule is built first), `unscheduled` is the remaining Smith-order
//! prefix. The dominance cache (`lb_refs`) is shared by every descendant of
//! a single root via `Rc<RefCell<_>>` — single-threaded per spec.md §5, so
//! no atomics are needed.

use std::cell::RefCell;
use std::rc::Rc;

use fxhash::FxHashMap;

use crate::abstraction::problem::Problem;
use crate::common::Solution;

use super::job::Job;
use super::lagrangian::LagrangianHelper;

#[derive(Debug, Clone)]
pub struct DeadlineProblem {
    solution: Solution,
    /// End of the schedule, built first: `fixed[0]` is the last job to run.
    pub fixed: Vec<Job>,
    /// Remaining jobs, Smith-ordered (earliest-first).
    pub unscheduled: Vec<Job>,
    pub unscheduled_total_time: i64,
    pub fixed_term: i64,
    unscheduled_term: (i64, i64),
    /// Bit `i` set once job `i` has been fixed.
    pub mask: u64,
    pub is_dominated: bool,
    lb_refs: Rc<RefCell<FxHashMap<u64, i64>>>,
    lagrangian: LagrangianHelper,
    precomputed: bool,
}

impl DeadlineProblem {
    pub fn new(jobs: Vec<Job>) -> Self {
        let unscheduled_total_time: i64 = jobs.iter().map(|j| j.p).sum();
        let lagrangian = LagrangianHelper::new(&jobs, Some(unscheduled_total_time));
        let unscheduled = lagrangian.smith.clone();
        let mut problem = DeadlineProblem {
            solution: Solution::new(),
            fixed: Vec::new(),
            unscheduled,
            unscheduled_total_time,
            fixed_term: 0,
            unscheduled_term: (0, 0),
            mask: 0,
            is_dominated: false,
            lb_refs: Rc::new(RefCell::new(FxHashMap::default())),
            lagrangian,
            precomputed: false,
        };
        problem.compute_completion_times();
        problem
    }

    /// The schedule in run order: unscheduled (earliest-first) followed by
    /// the fixed suffix reversed back into forward order.
    pub fn sequence(&self) -> Vec<Job> {
        let mut seq = self.unscheduled.clone();
        seq.extend(self.fixed.iter().rev().cloned());
        seq
    }

    fn compute_completion_times(&mut self) {
        let mut real_term = 0i64;
        let mut lag_term = 0.0f64;
        let lags = &self.lagrangian.lagrangian_multipliers;
        let c = &self.lagrangian.completion_times;
        for (i, job) in self.unscheduled.iter().enumerate() {
            real_term += job.w * c[i];
            lag_term += (job.w as f64 + lags[i]) * c[i] as f64 - lags[i] * job.d as f64;
        }
        self.unscheduled_term = (real_term, lag_term.ceil() as i64);
        self.precomputed = true;
    }

    /// The true (un-relaxed) `Σ w_i C_i` of the current fixed/unscheduled
    /// split, for verifying the Lagrangian bound never overshoots it.
    pub fn calc_real_cost(&mut self) -> i64 {
        if !self.precomputed {
            self.compute_completion_times();
        }
        self.unscheduled_term.0 + self.fixed_term
    }

    fn child_copy(&self) -> Self {
        DeadlineProblem {
            solution: Solution::new(),
            fixed: self.fixed.clone(),
            unscheduled: self.unscheduled.clone(),
            unscheduled_total_time: self.unscheduled_total_time,
            fixed_term: self.fixed_term,
            unscheduled_term: self.unscheduled_term,
            mask: self.mask,
            is_dominated: false,
            lb_refs: Rc::clone(&self.lb_refs),
            lagrangian: self.lagrangian.clone(),
            precomputed: self.precomputed,
        }
    }

    fn fix_job(&mut self, job: Job) {
        self.fixed.push(job);
        self.unscheduled.retain(|j| j.id != job.id);
        self.mask |= 1 << job.id;
        self.fixed_term += job.w * self.unscheduled_total_time;
        self.unscheduled_total_time -= job.p;
        self.lagrangian = LagrangianHelper::new(&self.unscheduled, Some(self.unscheduled_total_time));
        self.unscheduled = self.lagrangian.smith.clone();
        self.precomputed = false;
    }

    fn simple_fix_job(&mut self, job: Job) {
        self.fixed.push(job);
        self.mask |= 1 << job.id;
        self.fixed_term += job.w * self.unscheduled_total_time;
        self.unscheduled_total_time -= job.p;
    }

    fn fix_all_self(&mut self) {
        for job in self.unscheduled.clone().into_iter().rev() {
            self.simple_fix_job(job);
        }
        self.unscheduled.clear();
        self.unscheduled_term = (0, 0);
        self.precomputed = true;
    }
}

impl Problem for DeadlineProblem {
    fn solution(&self) -> &Solution {
        &self.solution
    }

    fn solution_mut(&mut self) -> &mut Solution {
        &mut self.solution
    }

    fn calc_bound(&mut self) -> f64 {
        if !self.precomputed {
            self.compute_completion_times();
        }
        if !self.lagrangian.success {
            return f64::INFINITY;
        }
        let cost = self.unscheduled_term.1 + self.fixed_term;
        let mut lb_refs = self.lb_refs.borrow_mut();
        let best = lb_refs.entry(self.mask).or_insert(i64::MAX);
        if self.fixed_term >= *best {
            self.is_dominated = true;
        } else {
            *best = self.fixed_term;
        }
        cost as f64
    }

    fn is_feasible(&mut self) -> bool {
        self.unscheduled.is_empty()
    }

    fn branch(&self) -> Vec<Self> {
        if self.is_dominated || !self.lagrangian.success {
            return Vec::new();
        }
        self.unscheduled
            .iter()
            .filter(|job| job.d >= self.unscheduled_total_time)
            .map(|job| {
                let mut child = self.child_copy();
                child.fix_job(*job);
                child
            })
            .collect()
    }

    fn warmstart(&self) -> Option<Self> {
        if !self.lagrangian.success {
            return None;
        }
        let mut sol = self.child_copy();
        sol.fix_all_self();
        Some(sol)
    }

    fn copy(&self, deep: bool) -> Self {
        let lb_refs = if deep {
            Rc::new(RefCell::new(self.lb_refs.borrow().clone()))
        } else {
            Rc::clone(&self.lb_refs)
        };
        DeadlineProblem {
            solution: self.solution,
            fixed: self.fixed.clone(),
            unscheduled: self.unscheduled.clone(),
            unscheduled_total_time: self.unscheduled_total_time,
            fixed_term: self.fixed_term,
            unscheduled_term: self.unscheduled_term,
            mask: self.mask,
            is_dominated: self.is_dominated,
            lb_refs,
            lagrangian: self.lagrangian.clone(),
            precomputed: self.precomputed,
        }
    }
}
