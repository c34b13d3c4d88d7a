//! The two fixed-sequence ends a permutation grows from: `Sigma1` accumulates
//! at the front (machine order), `Sigma2` at the back (reverse machine
//! order). Both track only the per-machine completion vector `c`, not full
//! per-job completion times — that's all the bounds ever need.

use super::job::Job;

#[derive(Debug, Clone)]
pub struct Sigma1 {
    pub jobs: Vec<Job>,
    pub c: Vec<i64>,
}

impl Sigma1 {
    pub fn empty(m: usize) -> Self {
        Sigma1 {
            jobs: Vec::new(),
            c: vec![0; m],
        }
    }

    /// Appends `job` to the back of the fixed front sequence.
    pub fn job_to_bottom(&mut self, job: Job) {
        self.c[0] = self.c[0].max(job.r[0]) + job.p[0];
        for k in 1..self.c.len() {
            self.c[k] = self.c[k].max(self.c[k - 1]) + job.p[k];
        }
        self.jobs.push(job);
    }

    pub fn copy(&self) -> Self {
        Sigma1 {
            jobs: self.jobs.iter().map(Job::copy).collect(),
            c: self.c.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sigma2 {
    pub jobs: Vec<Job>,
    pub c: Vec<i64>,
}

impl Sigma2 {
    pub fn empty(m: usize) -> Self {
        Sigma2 {
            jobs: Vec::new(),
            c: vec![0; m],
        }
    }

    /// Prepends `job` to the front of the fixed back sequence.
    pub fn job_to_top(&mut self, job: Job) {
        let m = self.c.len();
        self.c[m - 1] = self.c[m - 1].max(job.q[m - 1]) + job.p[m - 1];
        for k in 2..=m {
            let idx = m - k;
            self.c[idx] = self.c[idx].max(self.c[idx + 1]) + job.p[idx];
        }
        self.jobs.insert(0, job);
    }

    pub fn copy(&self) -> Self {
        Sigma2 {
            jobs: self.jobs.iter().map(Job::copy).collect(),
            c: self.c.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_to_bottom_accumulates_completion() {
        let mut s = Sigma1::empty(2);
        let job = Job::new(0, vec![3, 4]);
        s.job_to_bottom(job);
        assert_eq!(s.c, vec![3, 7]);
    }

    #[test]
    fn job_to_top_accumulates_from_the_right() {
        let mut s = Sigma2::empty(2);
        let job = Job::new(0, vec![3, 4]);
        s.job_to_top(job);
        assert_eq!(s.c, vec![7, 4]);
    }
}
