//! Seeded Potts & Van Wassenhove deadline-instance generator (spec.md §6):
//! processing times and weights drawn uniformly, deadlines drawn around a
//! fraction `l` of total processing time with spread `r`.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::job::Job;

/// Draws `n` jobs: `p ~ U{1,100}`, `w ~ U{1,10}`, then
/// `d ~ U{floor(P*(l - r/2)), floor(P*(l + r/2))}` where `P = sum(p)`.
/// `l` is typically one of `{0.6, 0.7, 0.8, 0.9, 1.0}`, `r` one of
/// `{0.2, ..., 1.6}`; both are accepted as plain `f64` rather than a closed
/// enum since the instance-design sweep over their values lives in the
/// caller, not this generator.
pub fn potts_van_wassenhove(n: usize, seed: u64, l: f64, r: f64) -> Vec<Job> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let p: Vec<i64> = (0..n).map(|_| rng.gen_range(1..=100)).collect();
    let w: Vec<i64> = (0..n).map(|_| rng.gen_range(1..=10)).collect();
    let total: i64 = p.iter().sum();

    let low = ((total as f64) * (l - r / 2.0)).floor().max(1.0) as i64;
    let high = ((total as f64) * (l + r / 2.0)).floor().max(low as f64) as i64;

    (0..n)
        .map(|i| {
            let d = rng.gen_range(low..=high);
            Job::new(i, p[i], w[i], d)
        })
        .collect()
}
