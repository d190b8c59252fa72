use ndarray::{Array1, Array2, Array3};

use crate::{Mdp, SolveError};

#[derive(Debug, Clone)]
/// Dense in-memory form of a finite MDP, indexed by enumeration order.
///
/// `states[i]` and `actions[j]` record the original identifiers behind index
/// `i` and `j`; the arrays are laid out as `rewards[[i, j]]`,
/// `transitions[[i, j, k]]` (successor `k`), and `start[i]`. Fields are
/// public so callers can assemble a dense MDP directly instead of going
/// through the [`Mdp`] trait.
pub struct DenseMdp<S, A> {
    pub states: Vec<S>,
    pub actions: Vec<A>,
    pub rewards: Array2<f64>,
    pub transitions: Array3<f64>,
    pub start: Array1<f64>,
}

impl<S, A> DenseMdp<S, A> {
    /// Flatten an MDP interface into dense arrays.
    ///
    /// Every cell is one pure query against the interface. The transition
    /// cube costs O(n_states² · n_actions) queries and dominates; it is what
    /// bounds problem size in practice.
    pub fn materialize<M>(mdp: &M) -> Self
    where
        M: Mdp<State = S, Action = A>,
    {
        let states = mdp.states();
        let actions = mdp.actions();
        let n = states.len();
        let m = actions.len();

        let rewards = Array2::from_shape_fn((n, m), |(i, j)| mdp.reward(&states[i], &actions[j]));
        let transitions = Array3::from_shape_fn((n, m, n), |(i, j, k)| {
            mdp.transition_probability(&states[i], &actions[j], &states[k])
        });
        let start = Array1::from_shape_fn(n, |i| mdp.start_probability(&states[i]));

        Self {
            states,
            actions,
            rewards,
            transitions,
            start,
        }
    }

    /// Number of states.
    pub fn n_states(&self) -> usize {
        self.states.len()
    }

    /// Number of actions.
    pub fn n_actions(&self) -> usize {
        self.actions.len()
    }

    /// Fail fast on malformed dimensions before any LP is built.
    ///
    /// Checks the state and action sets are non-empty and that every array
    /// matches the shape implied by them. A mismatch is a configuration
    /// error and is never repaired.
    pub fn validate(&self) -> Result<(), SolveError> {
        let n = self.states.len();
        let m = self.actions.len();

        if n == 0 {
            return Err(SolveError::EmptyStates);
        }
        if m == 0 {
            return Err(SolveError::EmptyActions);
        }
        if self.rewards.dim() != (n, m) {
            return Err(SolveError::RewardShape {
                expected: (n, m),
                found: self.rewards.dim(),
            });
        }
        if self.transitions.dim() != (n, m, n) {
            return Err(SolveError::TransitionShape {
                expected: (n, m, n),
                found: self.transitions.dim(),
            });
        }
        if self.start.len() != n {
            return Err(SolveError::StartShape {
                expected: n,
                found: self.start.len(),
            });
        }

        Ok(())
    }
}
