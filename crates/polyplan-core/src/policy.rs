use ndarray::{Array1, s};

use crate::DenseMdp;

/// Expected one-step return of `(state, action)` under `values`.
fn lookahead<S, A>(
    dense: &DenseMdp<S, A>,
    values: &Array1<f64>,
    gamma: f64,
    state: usize,
    action: usize,
) -> f64 {
    dense.rewards[[state, action]]
        + gamma * dense.transitions.slice(s![state, action, ..]).dot(values)
}

/// Recover one greedy action index per state from a solved value vector.
///
/// Ties keep the earliest action in enumeration order: each candidate is
/// compared against the running best with a strict `>`, so a later action
/// with an exactly equal lookahead never displaces an earlier one. MDPs with
/// symmetric transitions hit exact ties routinely, which makes this
/// convention observable.
///
/// `dense` must enumerate at least one action; the solve path guarantees
/// this through [`DenseMdp::validate`].
pub fn greedy_policy<S, A>(dense: &DenseMdp<S, A>, values: &Array1<f64>, gamma: f64) -> Vec<usize> {
    let mut policy = Vec::with_capacity(dense.n_states());

    for i in 0..dense.n_states() {
        let mut best_action = 0;
        let mut best_value = lookahead(dense, values, gamma, i, 0);

        for j in 1..dense.n_actions() {
            let action_value = lookahead(dense, values, gamma, i, j);
            if action_value > best_value {
                best_action = j;
                best_value = action_value;
            }
        }

        policy.push(best_action);
    }

    policy
}
