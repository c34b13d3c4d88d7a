//! A single job's processing-time row, plus the head/tail release and
//! delivery vectors (`r`, `q`) the bound computations keep refreshed as it
//! moves between the free set and the two fixed sequences.

#[derive(Debug, Clone)]
pub struct Job {
    pub id: usize,
    /// Processing time on each machine.
    pub p: Vec<i64>,
    /// Earliest start on each machine, given the jobs already fixed ahead
    /// of it (`σ₁`). Recomputed by `front_updates` while the job is free.
    pub r: Vec<i64>,
    /// Latest-finish budget on each machine, given the jobs already fixed
    /// behind it (`σ₂`). Recomputed by `back_updates` while the job is free.
    pub q: Vec<i64>,
    /// `lat[a][b] = Σ_{k=b+1}^{a-1} p[k]` for `a > b`; the machine latency
    /// Johnson's two-machine relaxation needs between any ordered pair.
    pub lat: Vec<Vec<i64>>,
    /// Palmer's (1965) slope index, used to order the quick constructive.
    pub slope: f64,
}

impl Job {
    pub fn new(id: usize, p: Vec<i64>) -> Self {
        let m = p.len();
        let mut lat = vec![vec![0i64; m]; m];
        for a in 0..m {
            for b in 0..a.saturating_sub(1) {
                lat[a][b] = p[(b + 1)..a].iter().sum();
            }
        }
        let denom = (m as f64 + 2.0) / 2.0;
        let slope = (1..=m).map(|k| (k as f64 - denom) * p[k - 1] as f64).sum();
        Job {
            id,
            p,
            r: vec![0; m],
            q: vec![0; m],
            lat,
            slope,
        }
    }

    pub fn total_p(&self) -> i64 {
        self.p.iter().sum()
    }

    /// A shallow copy: `p`/`lat` are immutable once built, so only `r`/`q`
    /// (which every node mutates independently) need fresh storage.
    pub fn copy(&self) -> Self {
        Job {
            id: self.id,
            p: self.p.clone(),
            r: self.r.clone(),
            q: self.q.clone(),
            lat: self.lat.clone(),
            slope: self.slope,
        }
    }
}

/// Recomputes `r[0]` (the only field the from-scratch constructives ever
/// consult) for `jobs` taken in this exact order, as if each were pushed in
/// turn onto an initially empty machine 0. NEH and local search both
/// evaluate many candidate orderings of the same job objects, whose stale
/// `r[0]` from a previous trial order must be refreshed before
/// `Sigma1::job_to_bottom` can be replayed over the new one.
pub fn recompute_r0(jobs: &mut [Job]) {
    if jobs.is_empty() {
        return;
    }
    jobs[0].r[0] = 0;
    for j in 1..jobs.len() {
        jobs[j].r[0] = jobs[j - 1].r[0] + jobs[j - 1].p[0];
    }
}
