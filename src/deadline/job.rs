//! A single-machine job with a weighted completion-time objective and a
//! hard deadline.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub id: usize,
    /// Processing time.
    pub p: i64,
    /// Weight in the objective `Σ w_i C_i`.
    pub w: i64,
    /// Deadline: a feasible schedule needs `C_i <= d`.
    pub d: i64,
}

impl Job {
    pub fn new(id: usize, p: i64, w: i64, d: i64) -> Self {
        Job { id, p, w, d }
    }

    /// The Smith ratio `w/p` used to break ties among jobs whose deadlines
    /// don't yet force an order.
    pub fn ratio(&self) -> f64 {
        self.w as f64 / self.p as f64
    }
}
