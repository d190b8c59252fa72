use thiserror::Error;

use crate::OracleError;

#[derive(Debug, Error)]
/// Error type for dense materialization, LP construction, and solving.
pub enum SolveError {
    #[error("discount factor must be finite and in [0, 1), got {gamma}")]
    InvalidDiscount { gamma: f64 },

    #[error("mdp enumerates no states")]
    EmptyStates,

    #[error("mdp enumerates no actions")]
    EmptyActions,

    #[error("reward array has shape {found:?}, expected (n_states, n_actions) = {expected:?}")]
    RewardShape {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error(
        "transition array has shape {found:?}, expected (n_states, n_actions, n_states) = {expected:?}"
    )]
    TransitionShape {
        expected: (usize, usize, usize),
        found: (usize, usize, usize),
    },

    #[error("start distribution has length {found}, expected {expected}")]
    StartShape { expected: usize, found: usize },

    #[error("solver oracle failed: {0}")]
    Oracle(#[from] OracleError),

    #[error("solver oracle returned {found} variable values, expected {expected}")]
    SolutionLength { expected: usize, found: usize },
}
