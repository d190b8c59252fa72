use std::fmt;

use crate::DenseMdp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Objective direction of a linear program.
pub enum ObjectiveSense {
    Minimize,
    Maximize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Comparison sense of one constraint row.
pub enum RowSense {
    Ge,
    Le,
    Eq,
}

#[derive(Debug, Clone)]
/// One dense constraint row: `coefficients · x <sense> rhs`.
pub struct Constraint {
    pub coefficients: Vec<f64>,
    pub sense: RowSense,
    pub rhs: f64,
}

#[derive(Debug, Clone)]
/// A dense linear program as handed to a [`crate::SolverOracle`].
///
/// The variable count is the length of `objective`; every constraint row
/// carries one coefficient per variable, zeros included.
pub struct LinearProgram {
    pub sense: ObjectiveSense,
    pub objective: Vec<f64>,
    pub constraints: Vec<Constraint>,
}

impl LinearProgram {
    /// Number of decision variables.
    pub fn n_variables(&self) -> usize {
        self.objective.len()
    }

    /// Number of constraint rows.
    pub fn n_constraints(&self) -> usize {
        self.constraints.len()
    }
}

impl fmt::Display for LinearProgram {
    /// Program summary in the shape the solver demos print before solving.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sense = match self.sense {
            ObjectiveSense::Minimize => "minimize",
            ObjectiveSense::Maximize => "maximize",
        };
        writeln!(f, "{} variables", self.n_variables())?;
        writeln!(f, "{sense} sense")?;
        writeln!(f, "{} linear coefficients", self.objective.len())?;
        write!(f, "{} linear constraints", self.n_constraints())
    }
}

/// Encode the Bellman optimality conditions for `dense` as a linear program.
///
/// One free continuous variable per state holds that state's value estimate.
/// The objective minimizes the start-weighted value sum; for every
/// `(state i, action j)` pair there is one row
///
/// ```text
/// value[i] - gamma * sum_k transitions[i][j][k] * value[k]  >=  rewards[i][j]
/// ```
///
/// so the coefficient on `value[k]` is `(k == i ? 1 : 0) - gamma * p`. Rows
/// are emitted in `(i, j)` row-major order and keep zero coefficients
/// explicit. Minimizing subject to these rows yields the smallest value
/// function dominating every action's one-step lookahead, which is the
/// optimal value function.
pub fn value_lp<S, A>(dense: &DenseMdp<S, A>, gamma: f64) -> LinearProgram {
    let n = dense.n_states();
    let m = dense.n_actions();

    let objective = dense.start.to_vec();

    let mut constraints = Vec::with_capacity(n * m);
    for i in 0..n {
        for j in 0..m {
            let mut coefficients = Vec::with_capacity(n);
            for k in 0..n {
                let identity = if k == i { 1.0 } else { 0.0 };
                coefficients.push(identity - gamma * dense.transitions[[i, j, k]]);
            }

            constraints.push(Constraint {
                coefficients,
                sense: RowSense::Ge,
                rhs: dense.rewards[[i, j]],
            });
        }
    }

    LinearProgram {
        sense: ObjectiveSense::Minimize,
        objective,
        constraints,
    }
}
