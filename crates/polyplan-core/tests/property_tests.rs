use ndarray::{Array1, Array2, Array3};
use polyplan_core::{DenseMdp, MinilpOracle, solve_dense};
use proptest::collection::vec;
use proptest::prelude::*;

/// Random small MDPs with strictly positive probabilities everywhere, so the
/// LP optimum is the unique optimal value function at every state.
fn dense_mdp_strategy() -> impl Strategy<Value = (DenseMdp<usize, usize>, f64)> {
    (1_usize..=4, 1_usize..=3).prop_flat_map(|(n, m)| {
        (
            vec(-10.0_f64..10.0, n * m),
            vec(0.05_f64..1.0, n * m * n),
            vec(0.05_f64..1.0, n),
            0.05_f64..0.95,
        )
            .prop_map(move |(rewards, raw_transitions, raw_start, gamma)| {
                let rewards = Array2::from_shape_vec((n, m), rewards).expect("reward shape");

                let mut transitions =
                    Array3::from_shape_vec((n, m, n), raw_transitions).expect("transition shape");
                for i in 0..n {
                    for j in 0..m {
                        let total: f64 = (0..n).map(|k| transitions[[i, j, k]]).sum();
                        for k in 0..n {
                            transitions[[i, j, k]] /= total;
                        }
                    }
                }

                let total: f64 = raw_start.iter().sum();
                let start = Array1::from_vec(
                    raw_start.iter().map(|probability| probability / total).collect(),
                );

                let dense = DenseMdp {
                    states: (0..n).collect(),
                    actions: (0..m).collect(),
                    rewards,
                    transitions,
                    start,
                };
                (dense, gamma)
            })
    })
}

proptest! {
    #[test]
    fn solved_values_satisfy_bellman_optimality((dense, gamma) in dense_mdp_strategy()) {
        let solved = solve_dense(&dense, gamma, &MinilpOracle).expect("solve should succeed");

        for i in 0..dense.n_states() {
            let mut best = f64::NEG_INFINITY;
            for j in 0..dense.n_actions() {
                let mut lookahead = dense.rewards[[i, j]];
                for k in 0..dense.n_states() {
                    lookahead += gamma * dense.transitions[[i, j, k]] * solved.values[k];
                }

                // Feasibility: the value dominates every action's lookahead.
                prop_assert!(solved.values[i] >= lookahead - 1e-6);
                best = best.max(lookahead);
            }

            // Optimality: the best lookahead attains the value itself, and
            // the extractor picked an action achieving it.
            prop_assert!((solved.values[i] - best).abs() <= 1e-5);

            let chosen = solved.policy[i];
            let mut chosen_lookahead = dense.rewards[[i, chosen]];
            for k in 0..dense.n_states() {
                chosen_lookahead += gamma * dense.transitions[[i, chosen, k]] * solved.values[k];
            }
            prop_assert!((chosen_lookahead - best).abs() <= 1e-5);
        }
    }

    #[test]
    fn solving_twice_is_deterministic((dense, gamma) in dense_mdp_strategy()) {
        let first = solve_dense(&dense, gamma, &MinilpOracle).expect("first solve");
        let second = solve_dense(&dense, gamma, &MinilpOracle).expect("second solve");

        prop_assert_eq!(first.objective_value, second.objective_value);
        prop_assert_eq!(first.values, second.values);
        prop_assert_eq!(first.policy, second.policy);
    }
}
