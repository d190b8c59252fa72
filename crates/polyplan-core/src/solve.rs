use std::collections::HashMap;

use ndarray::Array1;

use crate::{DenseMdp, Mdp, MinilpOracle, SolveError, SolverOracle, greedy_policy, value_lp};

#[derive(Debug, Clone)]
/// Complete output of one solve, keyed by the original state identifiers.
pub struct Solution<S, A> {
    /// Optimal start-weighted objective reported by the oracle.
    pub objective_value: f64,
    /// Expected discounted return from each state under an optimal policy.
    pub values: HashMap<S, f64>,
    /// Greedy action for each state.
    pub policy: HashMap<S, A>,
}

#[derive(Debug, Clone)]
/// Index-form output of one solve over a dense MDP.
pub struct DenseSolution {
    pub objective_value: f64,
    pub values: Array1<f64>,
    pub policy: Vec<usize>,
}

/// Solve an MDP with the default minilp-backed oracle.
pub fn solve<M: Mdp>(mdp: &M, gamma: f64) -> Result<Solution<M::State, M::Action>, SolveError> {
    solve_with(mdp, gamma, &MinilpOracle)
}

/// Solve an MDP against a caller-supplied oracle.
///
/// Materializes once, solves once, and reconstructs the returned mappings
/// through the canonical enumeration order. Nothing is retained between
/// calls: the same interface and `gamma` always rebuild the same program.
pub fn solve_with<M, O>(
    mdp: &M,
    gamma: f64,
    oracle: &O,
) -> Result<Solution<M::State, M::Action>, SolveError>
where
    M: Mdp,
    O: SolverOracle + ?Sized,
{
    let dense = DenseMdp::materialize(mdp);
    let solved = solve_dense(&dense, gamma, oracle)?;

    let values = dense
        .states
        .iter()
        .cloned()
        .zip(solved.values.iter().copied())
        .collect();
    let policy = dense
        .states
        .iter()
        .cloned()
        .zip(solved.policy.iter().map(|&j| dense.actions[j].clone()))
        .collect();

    Ok(Solution {
        objective_value: solved.objective_value,
        values,
        policy,
    })
}

/// Solve an already materialized MDP, returning the index-form solution.
///
/// Validation runs before the program is built, so a malformed dense MDP or
/// discount factor never reaches the oracle. The oracle is invoked exactly
/// once; its failures surface unmodified as [`SolveError::Oracle`].
pub fn solve_dense<S, A, O>(
    dense: &DenseMdp<S, A>,
    gamma: f64,
    oracle: &O,
) -> Result<DenseSolution, SolveError>
where
    O: SolverOracle + ?Sized,
{
    // gamma = 1 would cost the LP its strict contraction and its boundedness.
    if !gamma.is_finite() || !(0.0..1.0).contains(&gamma) {
        return Err(SolveError::InvalidDiscount { gamma });
    }
    dense.validate()?;

    let program = value_lp(dense, gamma);
    let lp = oracle.solve(&program)?;

    if lp.values.len() != program.n_variables() {
        return Err(SolveError::SolutionLength {
            expected: program.n_variables(),
            found: lp.values.len(),
        });
    }

    let values = Array1::from(lp.values);
    let policy = greedy_policy(dense, &values, gamma);

    Ok(DenseSolution {
        objective_value: lp.objective_value,
        values,
        policy,
    })
}
