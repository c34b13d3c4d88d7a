//! A seeded synthetic `n x m` processing-time matrix generator, the PFSSP
//! analogue of [`crate::deadline::generator::potts_van_wassenhove`]. No
//! canonical distribution is mandated for PFSSP instances (spec.md §6 only
//! requires non-negative integers); `uniform` draws each `p[j][k]` from an
//! inclusive range, which is the shape spec.md §8's scenario S1 exercises.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Draws an `n x m` matrix with every entry uniform in `[low, high]`.
pub fn uniform(n: usize, m: usize, seed: u64, low: i64, high: i64) -> Vec<Vec<i64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..m).map(|_| rng.gen_range(low..=high)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_is_reproducible() {
        let a = uniform(10, 4, 42, 5, 24);
        let b = uniform(10, 4, 42, 5, 24);
        assert_eq!(a, b);
    }

    #[test]
    fn entries_stay_in_range() {
        let p = uniform(10, 4, 7, 5, 24);
        assert_eq!(p.len(), 10);
        for row in &p {
            assert_eq!(row.len(), 4);
            for &v in row {
                assert!((5..=24).contains(&v));
            }
        }
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = uniform(10, 4, 1, 5, 24);
        let b = uniform(10, 4, 2, 5, 24);
        assert_ne!(a, b);
    }
}
