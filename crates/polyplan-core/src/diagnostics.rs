use std::fmt::{Debug, Write};

use crate::Mdp;

/// Tolerance for probability-mass sums when auditing an MDP implementation.
pub const PROB_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
/// A probability mass that failed to sum to 1 within [`PROB_TOLERANCE`].
pub enum ProbabilityViolation {
    /// Transition row for `(state_index, action_index)` sums to `sum`.
    Transition {
        state_index: usize,
        action_index: usize,
        sum: f64,
    },
    /// Start distribution sums to `sum`.
    Start { sum: f64 },
}

/// Audit the transition and start distributions of an MDP implementation.
///
/// Correct probability masses are part of the [`Mdp`] contract and the solve
/// pipeline neither checks nor repairs them; this sweep exists to flag
/// implementation bugs after the fact. Sums are compared with an absolute
/// deviation, so masses below 1 are caught as well as masses above it.
pub fn check_probabilities<M: Mdp>(mdp: &M) -> Vec<ProbabilityViolation> {
    let states = mdp.states();
    let actions = mdp.actions();
    let mut violations = Vec::new();

    for (i, state) in states.iter().enumerate() {
        for (j, action) in actions.iter().enumerate() {
            let sum: f64 = states
                .iter()
                .map(|successor| mdp.transition_probability(state, action, successor))
                .sum();
            if (sum - 1.0).abs() > PROB_TOLERANCE {
                violations.push(ProbabilityViolation::Transition {
                    state_index: i,
                    action_index: j,
                    sum,
                });
            }
        }
    }

    let start_sum: f64 = states
        .iter()
        .map(|state| mdp.start_probability(state))
        .sum();
    if (start_sum - 1.0).abs() > PROB_TOLERANCE {
        violations.push(ProbabilityViolation::Start { sum: start_sum });
    }

    violations
}

/// Dump every query the MDP interface answers as human-readable text.
///
/// Covers the state and action enumerations, the full transition table with
/// per-row totals, the reward table, and the start distribution. Intended
/// for eyeballing small models; the transition section is quadratic in the
/// state count.
pub fn describe_mdp<M>(mdp: &M) -> String
where
    M: Mdp,
    M::State: Debug,
    M::Action: Debug,
{
    let states = mdp.states();
    let actions = mdp.actions();
    let mut out = String::new();

    out.push_str("States:\n");
    for (index, state) in states.iter().enumerate() {
        let _ = writeln!(out, "  State {index}: {state:?}");
    }

    out.push_str("Actions:\n");
    for (index, action) in actions.iter().enumerate() {
        let _ = writeln!(out, "  Action {index}: {action:?}");
    }

    out.push_str("Transition Function:\n");
    for state in &states {
        for action in &actions {
            let _ = writeln!(out, "  Transition: ({state:?}, {action:?})");

            let mut total = 0.0;
            for successor in &states {
                let probability = mdp.transition_probability(state, action, successor);
                total += probability;
                let _ = writeln!(out, "    Successor State: {successor:?} -> {probability}");
            }
            let _ = writeln!(out, "    Total Probability: {total}");
        }
    }

    out.push_str("Reward Function:\n");
    for state in &states {
        let _ = writeln!(out, "  State: {state:?}");
        for action in &actions {
            let reward = mdp.reward(state, action);
            let _ = writeln!(out, "    Action: {action:?} -> {reward}");
        }
    }

    out.push_str("Start State Function:\n");
    let mut total = 0.0;
    for state in &states {
        let probability = mdp.start_probability(state);
        total += probability;
        let _ = writeln!(out, "  State {state:?}: {probability}");
    }
    let _ = writeln!(out, "  Total Probability: {total}");

    out
}
