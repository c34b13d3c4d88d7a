//! `proptest`-based checks of spec.md §8's universal and PFSSP-specific
//! properties, run over randomly generated instances rather than the fixed
//! scenarios in `scenario_*.rs`.

use proptest::prelude::*;

use bbsolve::abstraction::problem::Problem;
use bbsolve::common::Solution;
use bbsolve::deadline::smith;
use bbsolve::deadline::DeadlineProblem;
use bbsolve::deadline::Job as DeadlineJob;
use bbsolve::node::NodeId;
use bbsolve::pfssp::permutation::Permutation;
use bbsolve::queue::discipline::{Bfs, BestFirst, Dfs, PriorityKeyed, QueueEntry};
use bbsolve::queue::{PriorityQueue, QueueDiscipline};

/// Brute-force makespan of `p` under sequence `order` — the reference an
/// exhaustive permutation search compares bounds against.
fn makespan_of(p: &[Vec<i64>], order: &[usize]) -> i64 {
    let m = p[0].len();
    let mut c = vec![0i64; m];
    for &j in order {
        c[0] += p[j][0];
        for k in 1..m {
            c[k] = c[k].max(c[k - 1]) + p[j][k];
        }
    }
    c[m - 1]
}

fn optimal_makespan(p: &[Vec<i64>]) -> i64 {
    let n = p.len();
    let mut order: Vec<usize> = (0..n).collect();
    let mut best = i64::MAX;
    permute(&mut order, 0, p, &mut best);
    best
}

fn permute(order: &mut Vec<usize>, k: usize, p: &[Vec<i64>], best: &mut i64) {
    if k == order.len() {
        *best = (*best).min(makespan_of(p, order));
        return;
    }
    for i in k..order.len() {
        order.swap(k, i);
        permute(order, k + 1, p, best);
        order.swap(k, i);
    }
}

proptest! {
    /// §8 property 1: `lb <= cost` whenever both are finite, across any
    /// sequence of `Solution` transitions a `Problem` might apply.
    #[test]
    fn solution_lb_never_exceeds_cost(lb in -100.0f64..100.0, bump in 0.0f64..50.0) {
        let mut sol = Solution::new();
        sol.set_lb(lb);
        sol.set_lb(lb + bump);
        sol.set_feasible();
        prop_assert!(sol.lb <= sol.cost + 1e-9);
    }

    /// §8 property 5: whichever discipline drives the queue, the node that
    /// comes out first minimises that discipline's priority key over
    /// everything still enqueued.
    #[test]
    fn dequeue_always_returns_the_minimal_key(
        entries in prop::collection::vec((0usize..8, -50.0f64..50.0), 1..20)
    ) {
        for discipline in [
            QueueDiscipline::Dfs(Dfs),
            QueueDiscipline::Bfs(Bfs),
            QueueDiscipline::BestFirst(BestFirst),
        ] {
            let mut q = PriorityQueue::new(discipline);
            for (i, (level, lb)) in entries.iter().enumerate() {
                q.enqueue(QueueEntry {
                    node_id: NodeId(i),
                    level: *level,
                    lb: *lb,
                    index: i as u64,
                });
            }
            let mut prev_key = None;
            while let Some(entry) = q.dequeue() {
                let key = discipline.priority_key(&entry);
                if let Some(prev) = prev_key {
                    prop_assert!(prev <= key);
                }
                prev_key = Some(key);
            }
        }
    }

    /// §8 property 7 (partial, verified against brute force rather than the
    /// unknown true optimum of a production-sized instance): `LB1 <= LB5 <=
    /// makespan(pi*)` for small enough matrices that exhaustive search is
    /// still cheap.
    #[test]
    fn lb1_and_lb5_never_exceed_the_true_optimum(
        (m, n) in (2usize..=3, 2usize..=5),
        seed_values in prop::collection::vec(1i64..20, 6..=15)
    ) {
        // `seed_values` is sized generously (up to 3*5) and truncated to
        // exactly `m*n` so one strategy can drive both dimensions without
        // proptest's collection-of-collections generating ragged rows.
        prop_assume!(seed_values.len() >= m * n);
        let p: Vec<Vec<i64>> = seed_values[..m * n]
            .chunks(m)
            .map(|row| row.to_vec())
            .collect();

        let perm = Permutation::new(p[0].len(), p.iter().enumerate().map(|(j, row)| {
            bbsolve::pfssp::job::Job::new(j, row.clone())
        }).collect());
        let lb1 = perm.lower_bound_1m();
        let lb5 = perm.lower_bound_2m();
        let optimum = optimal_makespan(&p) as f64;

        prop_assert!(lb1 <= lb5 + 1e-6, "LB1 {} > LB5 {}", lb1, lb5);
        prop_assert!(lb5 <= optimum + 1e-6, "LB5 {} > optimum {}", lb5, optimum);
    }

    /// §8 property 10: whenever Smith's rule succeeds, the resulting order
    /// meets every deadline.
    #[test]
    fn smith_rule_meets_every_deadline_when_it_succeeds(
        ps in prop::collection::vec(1i64..15, 1..8),
        ds in prop::collection::vec(5i64..200, 1..8),
    ) {
        let n = ps.len().min(ds.len());
        let jobs: Vec<DeadlineJob> = (0..n)
            .map(|i| DeadlineJob::new(i, ps[i], 1, ds[i]))
            .collect();
        let result = smith::apply(&jobs, None, true);
        if result.success {
            let mut c = 0i64;
            for job in &result.jobs {
                c += job.p;
                prop_assert!(c <= job.d);
            }
        }
    }

    /// §8: the Lagrangian-relaxed bound `calc_bound` returns must never
    /// exceed the true (un-relaxed) `Σ w_i C_i` that `calc_real_cost`
    /// reports for the same fixed/unscheduled split, walked a few levels
    /// down the branch tree so the block/multiplier recursion runs past the
    /// root. This is the regression test for the block-partition bug where
    /// resetting the running max deadline per block (instead of carrying it
    /// across the whole order) let the bound overshoot this true cost.
    #[test]
    fn lagrangian_bound_never_exceeds_true_cost(
        ps in prop::collection::vec(1i64..15, 2..7),
        ws in prop::collection::vec(1i64..10, 2..7),
        ds in prop::collection::vec(5i64..200, 2..7),
    ) {
        let n = ps.len().min(ws.len()).min(ds.len());
        let jobs: Vec<DeadlineJob> = (0..n)
            .map(|i| DeadlineJob::new(i, ps[i], ws[i], ds[i]))
            .collect();

        let mut frontier = vec![DeadlineProblem::new(jobs)];
        let mut visited = 0;
        while let Some(mut node) = frontier.pop() {
            if visited >= 64 {
                break;
            }
            visited += 1;
            let bound = node.calc_bound();
            let real_cost = node.calc_real_cost();
            if bound.is_finite() {
                prop_assert!(
                    bound <= real_cost as f64 + 1e-6,
                    "bound {} > real cost {}",
                    bound,
                    real_cost
                );
            }
            if !node.is_dominated {
                frontier.extend(node.branch());
            }
        }
    }
}
