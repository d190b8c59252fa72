use ndarray::s;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::DenseMdp;

#[derive(Debug, Clone)]
/// Seeded rollout sampler over a dense MDP.
///
/// Useful for cross-checking a solved policy empirically: the mean
/// discounted return of the greedy policy over sampled episodes should
/// approach the LP objective. The solve pipeline itself never samples.
pub struct DenseSimulator<'a, S, A> {
    dense: &'a DenseMdp<S, A>,
    rng: ChaCha8Rng,
}

impl<'a, S, A> DenseSimulator<'a, S, A> {
    /// Create a simulator with a deterministic RNG seed.
    pub fn new(dense: &'a DenseMdp<S, A>, seed: u64) -> Self {
        Self {
            dense,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn uniform_sample(&mut self) -> f64 {
        (self.rng.next_u64() as f64) / ((u64::MAX as f64) + 1.0)
    }

    /// Sample a start state index from the start distribution.
    pub fn sample_start(&mut self) -> usize {
        let sample = self.uniform_sample();
        let mut cumulative = 0.0;
        for (i, probability) in self.dense.start.iter().enumerate() {
            cumulative += probability;
            if sample < cumulative {
                return i;
            }
        }
        self.dense.n_states() - 1
    }

    /// Sample one `(successor, reward)` transition for `(state, action)`.
    pub fn step(&mut self, state: usize, action: usize) -> (usize, f64) {
        let sample = self.uniform_sample();
        let row = self.dense.transitions.slice(s![state, action, ..]);

        let mut successor = self.dense.n_states() - 1;
        let mut cumulative = 0.0;
        for (k, probability) in row.iter().enumerate() {
            cumulative += probability;
            if sample < cumulative {
                successor = k;
                break;
            }
        }

        (successor, self.dense.rewards[[state, action]])
    }

    /// Mean discounted return of a fixed policy over sampled episodes.
    ///
    /// Each episode starts from a sampled start state and runs for exactly
    /// `horizon` steps, so the estimate is truncated at `gamma^horizon`
    /// relative to the infinite-horizon value.
    pub fn evaluate_policy(
        &mut self,
        policy: &[usize],
        gamma: f64,
        episodes: usize,
        horizon: usize,
    ) -> f64 {
        let mut total = 0.0;

        for _ in 0..episodes {
            let mut state = self.sample_start();
            let mut discount = 1.0;
            let mut episode_return = 0.0;

            for _ in 0..horizon {
                let (successor, reward) = self.step(state, policy[state]);
                episode_return += discount * reward;
                discount *= gamma;
                state = successor;
            }

            total += episode_return;
        }

        total / episodes as f64
    }
}
