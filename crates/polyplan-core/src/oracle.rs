use minilp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};
use thiserror::Error;

use crate::{LinearProgram, ObjectiveSense, RowSense};

#[derive(Debug, Error)]
/// Failure modes a solver oracle may report.
pub enum OracleError {
    #[error("linear program is infeasible")]
    Infeasible,

    #[error("linear program is unbounded")]
    Unbounded,

    #[error("numerical failure: {0}")]
    Numerical(String),
}

#[derive(Debug, Clone)]
/// Optimal objective value and per-variable assignment, in variable index order.
pub struct LpSolution {
    pub objective_value: f64,
    pub values: Vec<f64>,
}

/// Opaque LP solving engine consumed by the solve pipeline.
///
/// The oracle is invoked exactly once per solve with the fully built
/// program. Failures are propagated to the caller unmodified; the pipeline
/// never retries or perturbs coefficients.
pub trait SolverOracle {
    fn solve(&self, program: &LinearProgram) -> Result<LpSolution, OracleError>;

    /// Engine name for diagnostics.
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default)]
/// Oracle backed by the pure-Rust `minilp` simplex implementation.
pub struct MinilpOracle;

impl SolverOracle for MinilpOracle {
    fn solve(&self, program: &LinearProgram) -> Result<LpSolution, OracleError> {
        let direction = match program.sense {
            ObjectiveSense::Minimize => OptimizationDirection::Minimize,
            ObjectiveSense::Maximize => OptimizationDirection::Maximize,
        };

        let mut problem = Problem::new(direction);
        let vars: Vec<_> = program
            .objective
            .iter()
            .map(|&coefficient| problem.add_var(coefficient, (f64::NEG_INFINITY, f64::INFINITY)))
            .collect();

        for row in &program.constraints {
            let mut expr = LinearExpr::empty();
            for (&var, &coefficient) in vars.iter().zip(&row.coefficients) {
                expr.add(var, coefficient);
            }

            let op = match row.sense {
                RowSense::Ge => ComparisonOp::Ge,
                RowSense::Le => ComparisonOp::Le,
                RowSense::Eq => ComparisonOp::Eq,
            };
            problem.add_constraint(expr, op, row.rhs);
        }

        let solved = problem.solve().map_err(|err| match err {
            minilp::Error::Infeasible => OracleError::Infeasible,
            minilp::Error::Unbounded => OracleError::Unbounded,
        })?;

        Ok(LpSolution {
            objective_value: solved.objective(),
            values: vars.iter().map(|&var| solved[var]).collect(),
        })
    }

    fn name(&self) -> &str {
        "minilp"
    }
}
