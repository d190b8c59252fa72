mod dense;
mod diagnostics;
mod error;
mod mdp;
mod oracle;
mod policy;
mod program;
mod simulator;
mod solve;

pub use dense::DenseMdp;
pub use diagnostics::{PROB_TOLERANCE, ProbabilityViolation, check_probabilities, describe_mdp};
pub use error::SolveError;
pub use mdp::Mdp;
pub use oracle::{LpSolution, MinilpOracle, OracleError, SolverOracle};
pub use policy::greedy_policy;
pub use program::{Constraint, LinearProgram, ObjectiveSense, RowSense, value_lp};
pub use simulator::DenseSimulator;
pub use solve::{DenseSolution, Solution, solve, solve_dense, solve_with};
